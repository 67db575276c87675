//! Batch thumbnail re-encoding

// standard library
use std::path::PathBuf;

// external crates
use anyhow::Result;
use clap::Args;

// vtools crates
use vtools_thumbs::ThumbnailConverter;

#[derive(Args, Debug)]
pub struct Thumbnails {
    /// Base directory to walk for thumbnails
    #[arg(long = "base-dir", short = 'd', default_value = "projects")]
    base_dir: PathBuf,

    /// Size budget per thumbnail, in kilobytes
    #[arg(long = "max-size", short = 'm', default_value_t = 50.0)]
    max_size: f64,

    /// Quality decrement between encode attempts
    #[arg(long = "quality-step", default_value_t = 5)]
    quality_step: u8,

    /// File name that marks a thumbnail to convert
    #[arg(long = "target-name", default_value = "thumbnail.jpg")]
    target_name: String,

    /// File name written next to each target
    #[arg(long = "output-name", default_value = "thumbnail.webp")]
    output_name: String,

    /// Delete each source JPEG after conversion
    #[arg(long = "remove-original")]
    remove_original: bool,
}

impl Thumbnails {
    /// Walk the tree and report every thumbnail written
    pub fn run(&self) -> Result<()> {
        let converter = ThumbnailConverter::builder()
            .target_name(&self.target_name)
            .output_name(&self.output_name)
            .max_kilobytes(self.max_size)
            .quality_step(self.quality_step)
            .remove_original(self.remove_original)
            .build();

        let encoded = converter.convert_tree(&self.base_dir)?;
        for thumbnail in &encoded {
            println!("Converted {thumbnail}");
        }
        println!(
            "Converted {} thumbnail(s) under {}",
            encoded.len(),
            self.base_dir.display()
        );
        Ok(())
    }
}
