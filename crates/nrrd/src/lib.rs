//! Module for reading and writing minimal NRRD volume containers
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod nrrd;
mod reader;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use nrrd::{Encoding, Nrrd};

#[doc(inline)]
pub use reader::read_nrrd;

#[doc(inline)]
pub use writer::write_nrrd;

#[doc(inline)]
pub use error::{Error, Result};
