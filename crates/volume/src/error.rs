//! Result and Error types for the volume module

use vtools_utils::ByteExt;

/// Type alias for `Result<T, volume::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `vtools-volume`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to decode a TIFF stack
    #[error("failed to decode TIFF stack")]
    TiffError(#[from] tiff::TiffError),

    /// Failure to decode a Vaa3D raw stack
    #[cfg(feature = "vaa3d")]
    #[error("failed to decode Vaa3D raw stack")]
    Vaa3dError(#[from] vtools_vaa3d::Error),

    /// File extension is not in the recognised set
    #[error("unsupported file extension \"{0}\"")]
    UnsupportedFormat(String),

    /// A `.raw` file was given to a build without the vaa3d capability
    #[error("this build cannot read Vaa3D raw files (recompile with the \"vaa3d\" feature)")]
    MissingCapability,

    /// Decoded data has fewer than the 3 dimensions a volume needs
    #[error("expected volumetric data, found shape {shape:?}")]
    ShapeMismatch {
        /// Shape of the decoded array
        shape: Vec<usize>,
    },

    /// Decoded data has more dimensions than a stacked volume can have
    #[error("found {found} dimensions, but only 3D volumes and stacked 4D volumes are handled")]
    TooManyDimensions {
        /// Dimensionality of the decoded array
        found: usize,
    },

    /// TIFF pages within one stack must share their dimensions
    #[error("inconsistent TIFF pages (expected {expected:?}, found {found:?})")]
    InconsistentPages {
        /// Dimensions of the first page as (width, height)
        expected: (u32, u32),
        /// Dimensions of the offending page as (width, height)
        found: (u32, u32),
    },

    /// Non-grayscale stacks are outside the supported subset
    #[error("unsupported TIFF colour type {0} (only grayscale stacks are handled)")]
    UnsupportedColorType(String),

    /// The resampled volume did not fit in memory
    #[error("not enough memory for the scaled volume ({} requested)", .requested.display_size())]
    OutOfMemory {
        /// Bytes the allocation asked for
        requested: u64,
    },

    /// Scale factors must be positive reals
    #[error("invalid scale factor {0} (must be positive)")]
    InvalidScale(f64),
}
