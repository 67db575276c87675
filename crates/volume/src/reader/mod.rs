//! Format detection and decoding of volumetric files
//!
//! # Quickstart
//!
//! The convenience function is all most callers need:
//!
//! ```rust, no_run
//! # use vtools_volume::read_volume;
//! // Decode a stack into an ArrayD<f32> with at least 3 dimensions
//! let stack = read_volume("./data/neuron.tif").unwrap();
//! ```
//!
//! # Implementation overview
//!
//! The decoder is keyed on the file extension through [Format], so the
//! dispatch is explicit and testable rather than buried in the read call.
//! `tif`/`tiff` stacks go through the `tiff` codec page by page; `raw`
//! files go through `vtools-vaa3d` when that capability was compiled in.
//!
//! Not every recognised format is necessarily readable: Vaa3D raw support
//! is a build-time capability, and [Format::is_available] reports whether
//! the current build carries it. [read_volume] turns an unavailable
//! capability into [Error::MissingCapability](crate::Error) rather than
//! attempting any fallback.

// reader modules
mod tiff_stack;

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};

// external crates
use ndarray::ArrayD;

/// Volumetric file formats recognised by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-page grayscale TIFF stack (`tif`, `tiff`)
    Tiff,
    /// Vaa3D `raw_image_stack_by_hpeng` binary (`raw`)
    Vaa3dRaw,
}

impl Format {
    /// Select the decoder for a path from its extension
    ///
    /// The comparison is case-insensitive. Unrecognised (or missing)
    /// extensions are an [Error::UnsupportedFormat](crate::Error) naming
    /// the offending extension.
    ///
    /// ```rust
    /// # use vtools_volume::Format;
    /// assert_eq!(Format::from_path("a/stack.tif").unwrap(), Format::Tiff);
    /// assert_eq!(Format::from_path("a/stack.RAW").unwrap(), Format::Vaa3dRaw);
    /// assert!(Format::from_path("a/stack.xyz").is_err());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "tif" | "tiff" => Ok(Self::Tiff),
            "raw" => Ok(Self::Vaa3dRaw),
            _ => Err(Error::UnsupportedFormat(extension)),
        }
    }

    /// Check whether the current build can actually decode the format
    ///
    /// TIFF is always compiled in; Vaa3D raw support depends on the
    /// `vaa3d` feature.
    pub const fn is_available(&self) -> bool {
        match self {
            Self::Tiff => true,
            Self::Vaa3dRaw => cfg!(feature = "vaa3d"),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tiff => write!(f, "TIFF"),
            Self::Vaa3dRaw => write!(f, "Vaa3D RAW"),
        }
    }
}

/// Read a volumetric file into a dynamic array of `f32` samples
///
/// Returns a Result containing the decoded stack. The decoder is selected
/// by [Format::from_path]; samples are converted to `f32` whatever the
/// on-disk type.
///
/// Postcondition: the array has at least 3 dimensions. Flat images decode
/// to 2 dimensions and are rejected here with a shape-mismatch error, so
/// downstream stages never see them.
///
/// ```rust, no_run
/// # use vtools_volume::read_volume;
/// let stack = read_volume("./data/neuron.tif").unwrap();
/// assert!(stack.ndim() >= 3);
/// ```
pub fn read_volume<P: AsRef<Path>>(path: P) -> Result<ArrayD<f32>> {
    let path = path.as_ref();
    let volume = match Format::from_path(path)? {
        Format::Tiff => tiff_stack::read_stack(path)?,
        Format::Vaa3dRaw => read_raw_stack(path)?,
    };

    if volume.ndim() < 3 {
        return Err(Error::ShapeMismatch {
            shape: volume.shape().to_vec(),
        });
    }
    Ok(volume)
}

/// Decode a Vaa3D stack to the `(c, z, y, x)` layout the loader documents
#[cfg(feature = "vaa3d")]
fn read_raw_stack(path: &Path) -> Result<ArrayD<f32>> {
    let stack = vtools_vaa3d::read_vaa3d_file(path)?;
    let shape = stack.shape().to_vec();
    // Safe to unwrap as the reader checks the payload against the header
    Ok(ArrayD::from_shape_vec(shape, stack.data).unwrap())
}

/// Without the capability there is no fallback, only a typed failure
#[cfg(not(feature = "vaa3d"))]
fn read_raw_stack(_path: &Path) -> Result<ArrayD<f32>> {
    Err(Error::MissingCapability)
}
