//! Top-level sequencing for the install and uninstall runs.
//!
//! Install walks probe, build directory, build, install in order; the first
//! failure short-circuits the rest, and the build directory is cleaned up on
//! every path that created one. Cleanup failures are reported and dropped,
//! never propagated as the run's result.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::build;
use crate::cleanup;
use crate::context::SetupContext;
use crate::error::{SetupError, SetupResult};
use crate::install;
use crate::probe::{self, BuildTools};
use crate::report;
use crate::uninstall::{self, RemovalOutcome};

/// Run the full install workflow.
///
/// Returns the primary outcome of the run; the final banner, acknowledgment
/// pause and exit code are the caller's concern.
pub fn run_install(ctx: &SetupContext) -> SetupResult<()> {
    let tools = probe::probe_build_tools(ctx)?;
    let build_dir = build::prepare_build_dir(ctx)?;

    let result = build_and_install(ctx, &tools, build_dir.path());
    finalize(build_dir);
    result
}

fn build_and_install(ctx: &SetupContext, tools: &BuildTools, build_dir: &Path) -> SetupResult<()> {
    build::build_binaries(ctx, tools, build_dir)?;
    install::install_artifact(ctx, build_dir)
}

/// Remove the build directory, downgrading a failure to a report.
fn finalize(build_dir: TempDir) {
    if let Err(err) = cleanup::remove_build_dir(build_dir) {
        tracing::warn!(%err, "build directory removal failed");
        report::red_line("Build directory clean-up failed:");
        println!("{}", cleanup_failure_detail(&err));
    }
}

/// Detail line printed under the clean-up failure header. The header already
/// names the operation, so only the path and the cause remain.
fn cleanup_failure_detail(err: &SetupError) -> String {
    match err {
        SetupError::CleanupFailed { path, reason } => format!("{}: {reason}", path.display()),
        other => other.to_string(),
    }
}

/// Run the uninstall sweep over `targets`, reporting each outcome.
///
/// Never fails: undeletable or missing artifacts are reported and the sweep
/// moves on. The collected outcomes are returned for inspection.
pub fn run_uninstall(targets: &[PathBuf]) -> Vec<RemovalOutcome> {
    let outcomes = uninstall::remove_artifacts(targets);
    for outcome in &outcomes {
        match outcome {
            RemovalOutcome::Removed(path) => {
                report::success(&format!("Removed {}", path.display()));
            }
            RemovalOutcome::NotFound(path) => {
                report::failure(&not_found_line(path));
            }
            RemovalOutcome::Failed { path, reason } => {
                report::failure(&format!("Could not remove: {}", path.display()));
                println!("{reason}");
            }
        }
    }
    outcomes
}

fn not_found_line(path: &Path) -> String {
    let name = path.file_name().map_or_else(
        || "artifact".to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    match path.parent() {
        Some(dir) => format!("No {name} found in {}", dir.display()),
        None => format!("No {name} found"),
    }
}
