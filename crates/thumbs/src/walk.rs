//! Directory tree walking for batch conversion

// standard library
use std::fs;
use std::path::Path;

// crate modules
use crate::convert::{EncodedThumbnail, ThumbnailConverter};
use crate::error::{Error, Result};

// external crates
use log::debug;
use walkdir::WalkDir;

impl ThumbnailConverter {
    /// Convert every matching thumbnail under a base directory
    ///
    /// Walks the full tree below `base` and re-encodes every file whose
    /// name equals the configured target name, writing the WebP next to it.
    /// Returns the records of everything written, in walk order. Any
    /// failure aborts the walk and propagates.
    ///
    /// ```rust, no_run
    /// # use vtools_thumbs::ThumbnailConverter;
    /// let converter = ThumbnailConverter::default();
    /// for thumb in converter.convert_tree("./projects").unwrap() {
    ///     println!("{thumb}");
    /// }
    /// ```
    pub fn convert_tree<P: AsRef<Path>>(&self, base: P) -> Result<Vec<EncodedThumbnail>> {
        let base = base.as_ref();
        if !base.is_dir() {
            return Err(Error::MissingBaseDir(base.to_path_buf()));
        }

        let mut encoded = Vec::new();
        for entry in WalkDir::new(base) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name().to_str() != Some(self.target_name.as_str()) {
                continue;
            }

            let input = entry.path();
            let output = input.with_file_name(self.output_name.as_str());
            encoded.push(self.convert_file(input, &output)?);

            if self.remove_original {
                fs::remove_file(input)?;
                debug!("removed original {}", input.display());
            }
        }

        Ok(encoded)
    }
}
