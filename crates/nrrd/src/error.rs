//! Result and Error types for the nrrd module

/// Type alias for `Result<T, nrrd::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `vtools-nrrd`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// File does not start with an NRRD magic line
    #[error("not an NRRD file, first line is {0:?}")]
    NotAnNrrd(String),

    /// A required header field never appeared before the payload
    #[error("header is missing the required \"{0}\" field")]
    MissingField(&'static str),

    /// A header field value could not be parsed
    #[error("malformed header field \"{field}: {value}\"")]
    MalformedField {
        /// Field key as it appeared in the header
        field: String,
        /// Unparsable value
        value: String,
    },

    /// Sample types other than `float` are outside the supported subset
    #[error("unsupported sample type \"{0}\" (only \"float\" is handled)")]
    UnsupportedSampleType(String),

    /// Only 3-dimensional volumes are handled
    #[error("unsupported dimension {0} (only 3 is handled)")]
    UnsupportedDimension(usize),

    /// Payload encodings other than raw/gzip are outside the supported subset
    #[error("unsupported encoding \"{0}\" (only \"raw\" and \"gzip\" are handled)")]
    UnsupportedEncoding(String),

    /// Big-endian payloads are outside the supported subset
    #[error("unsupported endianness \"{0}\" (only \"little\" is handled)")]
    UnsupportedEndianness(String),

    /// Payload sample count does not match the header sizes
    #[error("unexpected payload length (expected {expected:?} samples, found {found:?})")]
    UnexpectedDataLength {
        /// Sample count promised by the header
        expected: usize,
        /// Sample count actually decoded
        found: usize,
    },
}
