//! Volume reading, projection, and resampling for microscopy stacks
//!
#![doc = include_str!("../readme.md")]
//!
//! # Quickstart
//!
//! The pipeline is three plain functions, applied in order:
//!
//! ```rust, no_run
//! # use vtools_volume::{project_max, read_volume, resample};
//! // Decode the stack, whatever the format
//! let stack = read_volume("./data/neuron.tif").unwrap();
//!
//! // Collapse stacked 4D data to a single 3D volume
//! let volume = project_max(stack).unwrap();
//!
//! // Halve the resolution along every axis
//! let volume = resample(volume, 0.5).unwrap();
//! ```
//!
//! Each stage's precondition is the previous stage's postcondition, so the
//! stages can also be used on their own: [read_volume] guarantees at least
//! 3 dimensions, [project_max] guarantees exactly 3.

// Split into subfiles for development, but anything important is re-exported
mod error;
mod project;
mod resample;

pub mod reader;

// Inline anything important for a nice public API
#[doc(inline)]
pub use reader::{read_volume, Format};

#[doc(inline)]
pub use project::project_max;

#[doc(inline)]
pub use resample::resample;

#[doc(inline)]
pub use error::{Error, Result};
