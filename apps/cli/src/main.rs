//! docvars CLI — manifest-derived template variables for documentation builds.
//!
//! Resolves the project manifest version and publishes it, together with
//! static variables from config, for a documentation templating system.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
