//! Command line front end for the vtools conversion libraries

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;
    cli.run()
}
