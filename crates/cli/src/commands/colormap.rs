//! Random-hue colormap texture generation

// standard library
use std::path::PathBuf;

// external crates
use anyhow::Result;
use clap::Args;

// vtools crates
use vtools_colormap::write_texture;

#[derive(Args, Debug)]
pub struct Colormap {
    /// Output texture path
    #[arg(long, short, default_value = "cm_random_hue.png")]
    output: PathBuf,

    /// Total number of colormap entries, including the black background
    #[arg(long, short = 'n', default_value_t = 1024)]
    entries: usize,

    /// RNG seed, fixed so regenerated textures are identical
    #[arg(long, short, default_value_t = 42)]
    seed: u64,
}

impl Colormap {
    /// Generate the map and save it as a 1xN PNG texture
    pub fn run(&self) -> Result<()> {
        let colormap = vtools_colormap::Colormap::random_hue(self.entries, self.seed)?;
        write_texture(&colormap, &self.output)?;

        println!(
            "Saved colormap with {} entries -> {}",
            colormap.len(),
            self.output.display()
        );
        Ok(())
    }
}
