//! Volumetric file to NRRD conversion

// standard library
use std::path::PathBuf;

// external crates
use anyhow::Result;
use clap::{Args, ValueEnum};

// vtools crates
use vtools_nrrd::{write_nrrd, Encoding, Nrrd};
use vtools_volume::{project_max, read_volume, resample, Format};

#[derive(Args, Debug)]
pub struct ToNrrd {
    /// Input file path (.raw or .tif)
    #[arg(long, short)]
    input: PathBuf,

    /// Output NRRD file path
    #[arg(long, short)]
    output: PathBuf,

    /// Scaling factor (e.g. 0.5 to reduce resolution)
    #[arg(long, short, default_value_t = 1.0, value_parser = positive_scale)]
    scale: f64,

    /// Payload encoding for the NRRD file
    #[arg(long, short, value_enum, default_value_t = PayloadEncoding::Gzip)]
    encoding: PayloadEncoding,
}

impl ToNrrd {
    /// Run the linear read, project, resample, write pipeline
    ///
    /// Narrates every stage on stdout the way the original conversion
    /// script did. The first failing stage aborts the whole conversion.
    pub fn run(&self) -> Result<()> {
        println!("Processing {} ...", self.input.display());

        let format = Format::from_path(&self.input)?;
        println!("Reading {format}: {}", self.input.display());
        let stack = read_volume(&self.input)?;

        if stack.ndim() == 4 {
            println!("4D volume detected, applying max projection along the first axis.");
        }
        let volume = project_max(stack)?;
        println!("Original shape: {:?}", volume.shape());

        let volume = if self.scale != 1.0 {
            println!("Scaling volume by factor {} ...", self.scale);
            let scaled = resample(volume, self.scale)?;
            println!("Scaled shape: {:?}", scaled.shape());
            scaled
        } else {
            volume
        };

        println!("Writing NRRD to: {}", self.output.display());
        let mut nrrd = Nrrd::from_array(&volume);
        nrrd.encoding = self.encoding.into();
        write_nrrd(&nrrd, &self.output)?;

        println!("Conversion complete.");
        Ok(())
    }
}

/// NRRD payload encodings exposed on the command line
#[derive(ValueEnum, Clone, Copy, Debug)]
enum PayloadEncoding {
    /// Uncompressed little-endian floats
    Raw,
    /// Gzip-compressed payload
    Gzip,
}

impl From<PayloadEncoding> for Encoding {
    fn from(encoding: PayloadEncoding) -> Self {
        match encoding {
            PayloadEncoding::Raw => Encoding::Raw,
            PayloadEncoding::Gzip => Encoding::Gzip,
        }
    }
}

/// Reject zero, negative, and unparsable scale factors at the parser
fn positive_scale(value: &str) -> Result<f64, String> {
    let scale: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale factor must be positive, got {scale}"))
    }
}
