//! Write operations for colormap textures

// standard library
use std::fs;
use std::path::Path;

// crate modules
use crate::colormap::Colormap;
use crate::error::{Error, Result};

// external crates
use image::RgbImage;

/// Save a colormap as a 1×N 8-bit RGB texture
///
/// One pixel per entry, left to right in label order, a single row tall —
/// the layout viewers sample with a plain 1D texture fetch. The image
/// format follows the file extension; parent directories are created if
/// missing and an existing file is replaced.
///
/// ```rust, no_run
/// # use vtools_colormap::{write_texture, Colormap};
/// let colormap = Colormap::random_hue(1024, 42).unwrap();
/// write_texture(&colormap, "./cm_random_hue.png").unwrap();
/// ```
pub fn write_texture<P: AsRef<Path>>(colormap: &Colormap, path: P) -> Result<()> {
    if colormap.is_empty() {
        return Err(Error::Empty);
    }

    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Safe to unwrap as the buffer length is 3 bytes per entry by construction
    let image = RgbImage::from_raw(colormap.len() as u32, 1, colormap.to_bytes()).unwrap();
    image.save(path)?;
    Ok(())
}
