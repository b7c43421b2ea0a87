//! Error types for the install and uninstall workflow.
//!
//! One unified error type for the whole run, so orchestration code stays free
//! of error plumbing and the top level can match on the kind.

use std::path::PathBuf;

use thiserror::Error;

use crate::paths::PathError;

/// Errors that can occur while installing the artifact.
#[derive(Debug, Error)]
pub enum SetupError {
    // === Environment ===
    /// A required build tool is absent from the search path.
    #[error("Missing build prerequisite: {tool}\n{remediation}")]
    PrerequisiteMissing { tool: String, remediation: String },

    // === Build ===
    /// The ephemeral build directory could not be created.
    #[error("Failed to create build directory: {reason}")]
    DirectoryCreationFailed { reason: String },

    /// The CMake configure step did not succeed.
    #[error("CMake configuration failed: {0}")]
    ConfigurationFailed(String),

    /// The CMake build step did not succeed.
    #[error("CMake build failed: {0}")]
    BuildFailed(String),

    // === Install ===
    /// The install destination directory is not writable.
    #[error("{path} is not writable: {reason}")]
    TargetNotWritable { path: PathBuf, reason: String },

    /// A pre-existing installed artifact could not be deleted.
    #[error("Could not remove pre-existing {path}: {reason}")]
    RemovalFailed { path: PathBuf, reason: String },

    /// The built artifact could not be moved into place.
    #[error("Failed to move {from} to {to}: {reason}")]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    // === Cleanup ===
    /// The build directory could not be removed. Reported, never fatal.
    #[error("Build directory clean-up failed for {path}: {reason}")]
    CleanupFailed { path: PathBuf, reason: String },

    // === Path & IO ===
    /// Path resolution failed.
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for setup operations.
pub type SetupResult<T> = Result<T, SetupError>;
