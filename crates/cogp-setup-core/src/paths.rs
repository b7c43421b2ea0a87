//! Path resolution and directory checks.
//!
//! Provides the canonical locations the workflow touches (the user's local
//! bin directory, the CMake source tree) and the directory probes the
//! installer and build director rely on.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - callers report outcomes themselves

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Name of the throwaway file used to probe a directory for writability.
const WRITE_PROBE: &str = ".cogp_write_probe";

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// A directory is not writable.
    #[error("{path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    /// No ancestor of the starting directory holds the CMake source tree.
    #[error("No src/CMakeLists.txt found above {0}; run from inside the repository")]
    SourceTreeNotFound(PathBuf),

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}

/// The per-user binary directory, `<home>/.local/bin`.
pub fn home_bin_dir() -> Result<PathBuf, PathError> {
    let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
    Ok(home.join(".local").join("bin"))
}

/// Locate the CMake source tree for the build, starting from the current
/// working directory.
pub fn find_source_dir() -> Result<PathBuf, PathError> {
    let cwd = env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?;
    find_source_dir_from(&cwd)
}

/// Walk up from `start` to the first ancestor containing `src/CMakeLists.txt`
/// and return that `src` directory.
pub fn find_source_dir_from(start: &Path) -> Result<PathBuf, PathError> {
    for dir in start.ancestors() {
        let candidate = dir.join("src");
        if candidate.join("CMakeLists.txt").is_file() {
            return Ok(candidate);
        }
    }
    Err(PathError::SourceTreeNotFound(start.to_path_buf()))
}

/// Ensure the provided path exists as a directory, creating it and any
/// missing parents if absent.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Verify a directory is writable by creating and discarding a probe file.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    let probe = path.join(WRITE_PROBE);
    let result = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&probe);

    match result {
        Ok(mut file) => {
            file.write_all(b"probe").map_err(|e| PathError::NotWritable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            drop(file);
            let _ = fs::remove_file(&probe);
            Ok(())
        }
        Err(err) => Err(PathError::NotWritable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }),
    }
}
