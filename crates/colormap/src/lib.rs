//! Deterministic random-hue colormap textures
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod colormap;
mod error;
mod texture;

// Inline anything important for a nice public API
#[doc(inline)]
pub use colormap::{hsv_to_rgb, Colormap};

#[doc(inline)]
pub use texture::write_texture;

#[doc(inline)]
pub use error::{Error, Result};
