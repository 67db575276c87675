//! Result and Error types for the thumbs module

/// Type alias for `Result<T, thumbs::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `vtools-thumbs`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to decode the source or encode the WebP
    #[error("failed image operation")]
    ImageError(#[from] image::ImageError),

    /// Failure while walking the directory tree
    #[error("failed to walk directory tree")]
    WalkError(#[from] walkdir::Error),

    /// The base directory to walk does not exist
    #[error("base directory {0:?} does not exist")]
    MissingBaseDir(std::path::PathBuf),
}
