//! Size-budgeted JPEG to WebP thumbnail re-encoding
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod builder;
mod convert;
mod error;
mod walk;

// Inline anything important for a nice public API
#[doc(inline)]
pub use convert::{EncodedThumbnail, ThumbnailConverter};

#[doc(inline)]
pub use builder::ThumbnailConverterBuilder;

#[doc(inline)]
pub use error::{Error, Result};
