//! CLI entry point.
//!
//! Parses the subcommand, builds the run context, hands off to the workflow
//! and turns its result into the user-facing ending: a green or red summary
//! banner, a pause for acknowledgment so terminal windows stay readable, and
//! exit status 0 or 1.

use std::io::{self, Write};
use std::process;

use clap::Parser;

mod commands;
mod parser;

use commands::Commands;
use parser::Cli;

use cogp_setup_core::{SetupContext, report, run_install, run_uninstall, uninstall_targets};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Install => handle_install(),
        Commands::Uninstall => handle_uninstall(),
    };

    let code = match outcome {
        Ok(()) => 0,
        Err(err) => {
            report::error_banner(&err.to_string());
            1
        }
    };

    pause_for_ack();
    process::exit(code);
}

fn handle_install() -> anyhow::Result<()> {
    let ctx = SetupContext::resolve()?;
    run_install(&ctx)?;
    println!();
    report::green_line("Installation finished");
    Ok(())
}

fn handle_uninstall() -> anyhow::Result<()> {
    let targets = uninstall_targets()?;
    run_uninstall(&targets);
    println!();
    report::green_line("Uninstallation completed.");
    Ok(())
}

/// Keep the final lines visible when launched from a terminal that closes
/// with the process.
fn pause_for_ack() {
    print!("Press ENTER to exit.");
    let _ = io::stdout().flush();
    let mut ack = String::new();
    let _ = io::stdin().read_line(&mut ack);
}
