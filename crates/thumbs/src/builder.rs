//! Builder implementation for ThumbnailConverter configuration

// crate modules
use crate::convert::ThumbnailConverter;

/// Builder for [ThumbnailConverter]
///
/// The fields of [ThumbnailConverter] are left public for direct use but
/// the module also implements a builder. Any number of parameters can be
/// set this way (including none); everything else keeps the defaults of
/// the original conversion script.
///
/// ```rust
/// # use vtools_thumbs::ThumbnailConverter;
/// let converter = ThumbnailConverter::builder()
///     .target_name("cover.jpg")
///     .output_name("cover.webp")
///     .max_kilobytes(80.0)
///     .quality_step(10)
///     .build();
///
/// assert_eq!(converter.quality_step, 10);
/// ```
#[derive(Debug, Default)]
pub struct ThumbnailConverterBuilder {
    converter: ThumbnailConverter,
}

impl ThumbnailConverterBuilder {
    /// File name that marks a thumbnail to convert
    pub fn target_name(mut self, name: &str) -> Self {
        self.converter.target_name = name.to_string();
        self
    }

    /// File name written next to the target
    pub fn output_name(mut self, name: &str) -> Self {
        self.converter.output_name = name.to_string();
        self
    }

    /// Size budget for the encoded file, in kilobytes
    pub fn max_kilobytes(mut self, budget: f64) -> Self {
        self.converter.max_kilobytes = budget;
        self
    }

    /// Quality decrement between attempts
    pub fn quality_step(mut self, step: u8) -> Self {
        self.converter.quality_step = step;
        self
    }

    /// Delete the source JPEG after conversion
    pub fn remove_original(mut self, remove: bool) -> Self {
        self.converter.remove_original = remove;
        self
    }

    /// Finalise the configuration
    pub fn build(self) -> ThumbnailConverter {
        self.converter
    }
}
