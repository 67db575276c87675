//! Command line definition and dispatch

mod colormap;
mod thumbnails;
mod to_nrrd;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vtools")]
#[command(about = "Conversion tools for volumetric microscopy assets")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Increase diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all diagnostics
    #[arg(short, long, global = true)]
    quiet: bool,
}

impl Cli {
    /// Wire the log macros of the library crates to stderr
    ///
    /// Warnings are always shown unless `--quiet`; each `-v` steps the
    /// level up from there.
    pub fn init_logging(&self) -> Result<()> {
        stderrlog::new()
            .verbosity(self.verbose as usize + 1)
            .quiet(self.quiet)
            .init()?;
        Ok(())
    }

    /// Dispatch to the chosen subcommand
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::ToNrrd(cmd) => cmd.run(),
            Commands::Thumbnails(cmd) => cmd.run(),
            Commands::Colormap(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a .raw or .tif volume to .nrrd, with optional downscaling
    ToNrrd(to_nrrd::ToNrrd),
    /// Re-encode project thumbnails as size-budgeted WebP files
    Thumbnails(thumbnails::Thumbnails),
    /// Generate a random-hue colormap texture
    Colormap(colormap::Colormap),
}
