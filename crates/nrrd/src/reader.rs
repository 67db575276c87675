//! Read operations for NRRD files
//!
//! The header is parsed line-by-line up to the blank line that separates it
//! from the payload. Fields outside the supported subset fail loudly;
//! fields the subset simply has no use for (spacings, axis labels and so
//! on) are skipped with a warning.

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::nrrd::{Encoding, Nrrd};

// external crates
use byteorder::{ByteOrder, LittleEndian};
use flate2::read::GzDecoder;
use log::warn;

/// Deserialise an NRRD file within the supported subset
///
/// Returns a Result containing an [Nrrd] with the sizes, encoding and
/// decoded `f32` payload of the file at `path`.
///
/// ```rust, no_run
/// # use vtools_nrrd::read_nrrd;
/// // Read a container written by this toolkit
/// let nrrd = read_nrrd("./out/volume.nrrd").unwrap();
///
/// // Print a summary of the data
/// println!("{nrrd}");
/// ```
pub fn read_nrrd<P: AsRef<Path>>(path: P) -> Result<Nrrd> {
    let mut reader = init_reader(path)?;

    let (sizes, encoding) = parse_header(&mut reader)?;
    // saturating so a nonsense header fails the length check, not the maths
    let expected = sizes.iter().fold(1_usize, |acc, &s| acc.saturating_mul(s));
    let data = parse_samples(&mut reader, encoding, expected)?;

    Ok(Nrrd {
        sizes,
        encoding,
        data,
    })
}

/// Initialise a reader from anything that can be turned into a path
fn init_reader(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Parse the header block up to the blank line
///
/// Returns the sizes converted back to `(z, y, x)` order and the declared
/// payload encoding.
fn parse_header(reader: &mut BufReader<File>) -> Result<([usize; 3], Encoding)> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let magic = line.trim_end();
    if !magic.starts_with("NRRD") {
        return Err(Error::NotAnNrrd(magic.to_string()));
    }

    let mut sizes: Option<[usize; 3]> = None;
    let mut encoding: Option<Encoding> = None;
    let mut sample_type: Option<()> = None;
    let mut dimension: Option<()> = None;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            // EOF before the blank line, missing-field checks report it
            break;
        }
        let field = line.trim_end();
        if field.is_empty() {
            break;
        }
        if field.starts_with('#') {
            continue;
        }

        let (key, value) = field.split_once(':').ok_or_else(|| Error::MalformedField {
            field: field.to_string(),
            value: String::new(),
        })?;
        let value = value.trim();

        match key {
            "type" => match value {
                "float" => sample_type = Some(()),
                _ => return Err(Error::UnsupportedSampleType(value.to_string())),
            },
            "dimension" => {
                let parsed: usize = value.parse().map_err(|_| Error::MalformedField {
                    field: key.to_string(),
                    value: value.to_string(),
                })?;
                if parsed != 3 {
                    return Err(Error::UnsupportedDimension(parsed));
                }
                dimension = Some(());
            }
            "sizes" => sizes = Some(parse_sizes(value)?),
            "endian" => {
                if value != "little" {
                    return Err(Error::UnsupportedEndianness(value.to_string()));
                }
            }
            "encoding" => encoding = Some(Encoding::from_field(value)?),
            _ => warn!("ignoring unsupported header field \"{key}\""),
        }
    }

    sample_type.ok_or(Error::MissingField("type"))?;
    dimension.ok_or(Error::MissingField("dimension"))?;
    let sizes = sizes.ok_or(Error::MissingField("sizes"))?;
    let encoding = encoding.ok_or(Error::MissingField("encoding"))?;

    Ok((sizes, encoding))
}

/// Parse the three size values, reversing fastest-first to `(z, y, x)`
fn parse_sizes(value: &str) -> Result<[usize; 3]> {
    let malformed = || Error::MalformedField {
        field: "sizes".to_string(),
        value: value.to_string(),
    };

    let parsed = value
        .split_whitespace()
        .map(|v| v.parse::<usize>())
        .collect::<core::result::Result<Vec<usize>, _>>()
        .map_err(|_| malformed())?;

    match parsed.as_slice() {
        [x, y, z] => Ok([*z, *y, *x]),
        _ => Err(malformed()),
    }
}

/// Decode the payload into a vector of `f32` samples
fn parse_samples(
    reader: &mut BufReader<File>,
    encoding: Encoding,
    expected: usize,
) -> Result<Vec<f32>> {
    let mut bytes = Vec::new();
    match encoding {
        Encoding::Raw => {
            reader.read_to_end(&mut bytes)?;
        }
        Encoding::Gzip => {
            GzDecoder::new(reader).read_to_end(&mut bytes)?;
        }
    }

    if bytes.len() != expected.saturating_mul(std::mem::size_of::<f32>()) {
        return Err(Error::UnexpectedDataLength {
            expected,
            found: bytes.len() / std::mem::size_of::<f32>(),
        });
    }

    let mut samples = vec![0f32; expected];
    LittleEndian::read_f32_into(&bytes, &mut samples);
    Ok(samples)
}
