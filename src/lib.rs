//! `vtools` is a semi-modular toolkit of fast and reliable libraries for
//! volumetric microscopy assets
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use vtools_utils as utils;

#[cfg(feature = "colormap")]
#[cfg_attr(docsrs, doc(cfg(feature = "colormap")))]
#[doc(inline)]
pub use vtools_colormap as colormap;

#[cfg(feature = "nrrd")]
#[cfg_attr(docsrs, doc(cfg(feature = "nrrd")))]
#[doc(inline)]
pub use vtools_nrrd as nrrd;

#[cfg(feature = "thumbs")]
#[cfg_attr(docsrs, doc(cfg(feature = "thumbs")))]
#[doc(inline)]
pub use vtools_thumbs as thumbs;

#[cfg(feature = "vaa3d")]
#[cfg_attr(docsrs, doc(cfg(feature = "vaa3d")))]
#[doc(inline)]
pub use vtools_vaa3d as vaa3d;

#[cfg(feature = "volume")]
#[cfg_attr(docsrs, doc(cfg(feature = "volume")))]
#[doc(inline)]
pub use vtools_volume as volume;
