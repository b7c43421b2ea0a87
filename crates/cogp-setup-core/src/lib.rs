//! Install and uninstall workflow for the `cogp` binary.
//!
//! A thin, strictly sequential orchestration layer over CMake and the
//! filesystem: probe for build tools, stage an out-of-tree build in an
//! ephemeral directory, relocate the result into the user's local bin
//! directory, clean up afterward. The companion uninstall sweep removes
//! installed artifacts best-effort.
//!
//! All run parameters live in [`SetupContext`], resolved once at process
//! start; every fallible operation returns [`SetupResult`] so the caller
//! decides how failures surface.

#![deny(unused_crate_dependencies)]

pub mod build;
pub mod cleanup;
pub mod context;
pub mod error;
pub mod install;
pub mod instructions;
pub mod paths;
pub mod probe;
pub mod report;
pub mod uninstall;
pub mod workflow;

// Re-export the types the CLI and tests reach for most.
pub use context::{ARTIFACT_NAME, SetupContext, uninstall_targets};
pub use error::{SetupError, SetupResult};
pub use paths::PathError;
pub use probe::BuildTools;
pub use uninstall::RemovalOutcome;
pub use workflow::{run_install, run_uninstall};
