//! Module for working with Vaa3D raw image stack binaries
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod reader;
mod stack;

// Inline anything important for a nice public API
#[doc(inline)]
pub use stack::{DataType, Dimensions, Stack};

#[doc(inline)]
pub use reader::read_vaa3d_file;

#[doc(inline)]
pub use error::{Error, Result};
