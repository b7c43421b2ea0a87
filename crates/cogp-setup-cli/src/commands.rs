//! Subcommand definitions.

use clap::Subcommand;

/// Top-level commands. Each runs to completion with no further arguments.
#[derive(Subcommand)]
pub enum Commands {
    /// Build cogp from source and install it into ~/.local/bin
    Install,
    /// Remove the installed cogp binary
    Uninstall,
}
