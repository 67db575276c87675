//! Write operations for NRRD data

// standard library
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::nrrd::{Encoding, Nrrd};

// external crates
use byteorder::{LittleEndian, WriteBytesExt};
use flate2::write::GzEncoder;
use flate2::Compression;

/// Serialise an [Nrrd] container to a file
///
/// Parent directories of `path` are created if missing. An existing file at
/// `path` is replaced outright; there is no backup of prior contents and no
/// atomicity guarantee.
///
/// The header always declares `type: float`, `dimension: 3` and
/// `endian: little`; the payload is written with the encoding carried by the
/// container.
///
/// ```rust, no_run
/// # use vtools_nrrd::{write_nrrd, Nrrd};
/// # use ndarray::Array3;
/// let volume = Array3::<f32>::zeros((17, 256, 256));
/// let nrrd = Nrrd::from_array(&volume);
///
/// // Parent directories are created as needed
/// write_nrrd(&nrrd, "./out/sub/volume.nrrd").unwrap();
/// ```
pub fn write_nrrd<P: AsRef<Path>>(nrrd: &Nrrd, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = init_writer(path)?;
    write_header(&mut writer, nrrd)?;

    match nrrd.encoding {
        Encoding::Raw => {
            write_samples(&mut writer, &nrrd.data)?;
            writer.flush()?;
        }
        Encoding::Gzip => {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            write_samples(&mut encoder, &nrrd.data)?;
            encoder.finish()?.flush()?;
        }
    }

    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

/// Write the header block, closed off by the blank line
///
/// NRRD sizes go fastest axis first, the reverse of the stored `(z, y, x)`
/// shape.
fn write_header(writer: &mut BufWriter<File>, nrrd: &Nrrd) -> Result<()> {
    writeln!(writer, "NRRD0004")?;
    writeln!(writer, "# Complete NRRD file format specification at:")?;
    writeln!(writer, "# http://teem.sourceforge.net/nrrd/format.html")?;
    writeln!(writer, "type: float")?;
    writeln!(writer, "dimension: 3")?;
    writeln!(
        writer,
        "sizes: {} {} {}",
        nrrd.sizes[2], nrrd.sizes[1], nrrd.sizes[0]
    )?;
    writeln!(writer, "endian: little")?;
    writeln!(writer, "encoding: {}", nrrd.encoding)?;
    writeln!(writer)?;
    Ok(())
}

/// Write every sample as a little-endian f32
fn write_samples<W: Write>(writer: &mut W, samples: &[f32]) -> Result<()> {
    for sample in samples {
        writer.write_f32::<LittleEndian>(*sample)?;
    }
    Ok(())
}
