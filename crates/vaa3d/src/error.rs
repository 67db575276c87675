//! Result and Error types for the vaa3d module

/// Type alias for `Result<T, vaa3d::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `vtools-vaa3d`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// File does not start with the expected magic key
    #[error("bad magic key, not a \"raw_image_stack_by_hpeng\" stack")]
    UnrecognisedMagic,

    /// Endianness flag is something other than 'B' or 'L'
    #[error("unknown endianness flag {0:?} (expected 'B' or 'L')")]
    UnknownEndianness(char),

    /// Sample datatype code is not one of the documented values
    #[error("unsupported sample datatype code {0} (expected 1, 2, or 4)")]
    UnsupportedDataType(u16),

    /// Unexpected length of file based on the header dimensions
    #[error("unexpected file length (expected {expected:?}, found {found:?})")]
    UnexpectedByteLength { expected: u64, found: u64 },
}
