//! Top-level argument parser.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the cogp installer.
#[derive(Parser)]
#[command(name = "cogp-setup")]
#[command(about = "Build, install and uninstall the cogp binary for the current user")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
