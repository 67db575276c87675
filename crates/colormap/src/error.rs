//! Result and Error types for the colormap module

/// Type alias for `Result<T, colormap::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `vtools-colormap`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to encode or save the texture image
    #[error("failed to write texture image")]
    ImageError(#[from] image::ImageError),

    /// A colormap with no entries has nothing to write
    #[error("a colormap needs at least one entry")]
    Empty,
}
