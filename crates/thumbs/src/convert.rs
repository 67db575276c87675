//! Re-encoding of single thumbnails under a size budget

// standard library
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

// crate modules
use crate::builder::ThumbnailConverterBuilder;
use crate::error::Result;
use vtools_utils::ByteExt;

// external crates
use image::codecs::webp::{WebPEncoder, WebPQuality};
use image::ColorType;
use log::{debug, warn};

/// Quality of the first encode attempt
const START_QUALITY: u8 = 95;

/// Quality below which stepping down stops
const MIN_QUALITY: u8 = 10;

/// Re-encodes JPEG thumbnails as size-budgeted WebP files
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented and recommended.
///
/// ```rust
/// # use vtools_thumbs::ThumbnailConverter;
/// // Tighten the budget and clean up the source files
/// let converter = ThumbnailConverter::builder()
///     .max_kilobytes(35.0)
///     .remove_original(true)
///     .build();
/// ```
///
/// Encoding starts at quality 95 and steps down by `quality_step` until the
/// file fits `max_kilobytes`. A thumbnail that never fits is left at the
/// lowest-quality attempt with a warning rather than discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailConverter {
    /// File name that marks a thumbnail to convert
    pub target_name: String,
    /// File name written next to the target
    pub output_name: String,
    /// Size budget for the encoded file, in kilobytes
    pub max_kilobytes: f64,
    /// Quality decrement between attempts
    pub quality_step: u8,
    /// Delete the source JPEG after conversion
    pub remove_original: bool,
}

impl Default for ThumbnailConverter {
    fn default() -> Self {
        Self {
            target_name: "thumbnail.jpg".to_string(),
            output_name: "thumbnail.webp".to_string(),
            max_kilobytes: 50.0,
            quality_step: 5,
            remove_original: false,
        }
    }
}

impl ThumbnailConverter {
    /// Builder with the default configuration to start from
    pub fn builder() -> ThumbnailConverterBuilder {
        ThumbnailConverterBuilder::default()
    }

    /// Re-encode a single image file as a WebP within the size budget
    ///
    /// The output is written (and rewritten) in place on every attempt, so
    /// on success the file at `output` is the final encode. Returns the
    /// [EncodedThumbnail] record of the last attempt.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<EncodedThumbnail> {
        let image = image::open(input)?.to_rgb8();
        let (width, height) = image.dimensions();

        // a zero step would never terminate
        let step = self.quality_step.max(1);
        let mut quality = START_QUALITY;

        loop {
            let writer = BufWriter::new(File::create(output)?);
            let encoder = WebPEncoder::new_with_quality(writer, WebPQuality::lossy(quality));
            encoder.encode(image.as_raw(), width, height, ColorType::Rgb8)?;

            let bytes = fs::metadata(output)?.len();
            debug!(
                "{} came out at {} with quality {quality}",
                output.display(),
                bytes.display_size()
            );

            if bytes.kilobytes() <= self.max_kilobytes {
                return Ok(EncodedThumbnail {
                    path: output.to_path_buf(),
                    bytes,
                    quality,
                    within_budget: true,
                });
            }

            if (quality as u16) < MIN_QUALITY as u16 + step as u16 {
                warn!(
                    "could not fit {} under {} KB, leaving it at quality {quality}",
                    output.display(),
                    self.max_kilobytes
                );
                return Ok(EncodedThumbnail {
                    path: output.to_path_buf(),
                    bytes,
                    quality,
                    within_budget: false,
                });
            }
            quality -= step;
        }
    }
}

/// Record of one written thumbnail
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedThumbnail {
    /// Path of the WebP that was written
    pub path: PathBuf,
    /// Size of the encoded file in bytes
    pub bytes: u64,
    /// Quality of the encode that was kept
    pub quality: u8,
    /// Whether the kept encode fits the configured budget
    pub within_budget: bool,
}

impl std::fmt::Display for EncodedThumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let marker = if self.within_budget { "" } else { ", over budget" };
        write!(
            f,
            "{} ({} @ quality {}{marker})",
            self.path.display(),
            self.bytes.display_size(),
            self.quality
        )
    }
}
