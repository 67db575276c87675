//! Simple read operations for Vaa3D raw image stack files
//!
//! The format is binary with a short fixed header. Unlike most stack
//! formats the byte ordering is declared *in* the file, as a single flag
//! byte, so everything after the flag is parsed through a `ByteOrder`
//! type parameter.

// standard library
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::stack::{DataType, Dimensions, Stack};

// external crates
use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use log::debug;

/// 24-byte key at the start of every stack file
const MAGIC: &[u8; 24] = b"raw_image_stack_by_hpeng";

/// Header length in bytes: magic + flag + datatype code + four extents
const HEADER_BYTES: u64 = 24 + 1 + 2 + 4 * 4;

/// Deserialise a binary Vaa3D raw stack file
///
/// Returns a Result containing a [Stack] with all the information extracted
/// from the `raw_image_stack_by_hpeng` file at `path`. Samples are converted
/// to `f32` whatever the on-disk datatype.
///
/// ```rust, no_run
/// # use vtools_vaa3d::read_vaa3d_file;
/// // Read a stack written by Vaa3D
/// let stack = read_vaa3d_file("./data/neuron.v3draw.raw").unwrap();
///
/// // Print a summary of the data
/// println!("{stack}");
/// ```
pub fn read_vaa3d_file<P: AsRef<Path>>(path: P) -> Result<Stack> {
    let file = File::open(path)?;
    let file_length = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    parse_magic(&mut reader)?;

    // everything after the flag byte is in the declared byte order
    match reader.read_u8()? {
        b'B' => parse_stack::<BigEndian>(&mut reader, file_length),
        b'L' => parse_stack::<LittleEndian>(&mut reader, file_length),
        flag => Err(Error::UnknownEndianness(flag as char)),
    }
}

/// Check the file starts with the expected magic key
fn parse_magic(reader: &mut BufReader<File>) -> Result<()> {
    let mut magic = [0u8; MAGIC.len()];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(Error::UnrecognisedMagic);
    }
    Ok(())
}

/// Deserialise everything after the endianness flag
fn parse_stack<E: ByteOrder>(reader: &mut BufReader<File>, file_length: u64) -> Result<Stack> {
    let datatype = DataType::from_code(reader.read_u16::<E>()?)?;
    let dimensions = parse_dimensions::<E>(reader)?;
    debug!("vaa3d header: {dimensions}, {datatype} samples");

    // catch truncated or padded files before committing to the payload
    let expected = HEADER_BYTES + dimensions.payload_byte_length(datatype) as u64;
    if file_length != expected {
        return Err(Error::UnexpectedByteLength {
            expected,
            found: file_length,
        });
    }

    let data = parse_samples::<E>(reader, datatype, dimensions.number_of_samples())?;

    Ok(Stack {
        dimensions,
        datatype,
        data,
    })
}

/// Deserialise the four u32 extents, x first
fn parse_dimensions<E: ByteOrder>(reader: &mut BufReader<File>) -> Result<Dimensions> {
    Ok(Dimensions {
        x: reader.read_u32::<E>()?,
        y: reader.read_u32::<E>()?,
        z: reader.read_u32::<E>()?,
        c: reader.read_u32::<E>()?,
    })
}

/// Deserialise the payload into a vector of `f32` samples
fn parse_samples<E: ByteOrder>(
    reader: &mut BufReader<File>,
    datatype: DataType,
    count: usize,
) -> Result<Vec<f32>> {
    match datatype {
        DataType::U8 => {
            let mut samples = vec![0u8; count];
            reader.read_exact(&mut samples)?;
            Ok(samples.iter().map(|&s| s as f32).collect())
        }
        DataType::U16 => {
            let mut samples = vec![0u16; count];
            reader.read_u16_into::<E>(&mut samples)?;
            Ok(samples.iter().map(|&s| s as f32).collect())
        }
        DataType::F32 => {
            let mut samples = vec![0f32; count];
            reader.read_f32_into::<E>(&mut samples)?;
            Ok(samples)
        }
    }
}
