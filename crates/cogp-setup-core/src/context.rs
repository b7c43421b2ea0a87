//! Run configuration, resolved once at process start.
//!
//! Every component takes the context by reference instead of consulting
//! globals or the environment itself, so tests can point the whole workflow
//! at throwaway directories and stub tools.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::paths::{self, PathError};

/// File name of the binary produced by the build.
pub const ARTIFACT_NAME: &str = "cogp";

/// Memory-backed scratch location preferred for build staging.
pub const SHM_DIR: &str = "/dev/shm";

/// Name prefix for ephemeral build directories.
pub const BUILD_DIR_PREFIX: &str = "cogp-build-";

/// Everything the install workflow needs to know about its surroundings.
#[derive(Debug, Clone)]
pub struct SetupContext {
    /// CMake source tree handed to the configure step.
    pub source_dir: PathBuf,
    /// Preferred parent for the ephemeral build directory.
    pub scratch_dir: PathBuf,
    /// Directory that receives the installed artifact.
    pub bin_dir: PathBuf,
    /// File name of the built artifact.
    pub artifact_name: String,
    /// Search path consulted when locating build tools.
    pub search_path: Option<OsString>,
}

impl SetupContext {
    /// Resolve the install-time context from the current environment.
    ///
    /// Fails when the home directory cannot be determined or when no
    /// enclosing repository with a `src/CMakeLists.txt` is found.
    pub fn resolve() -> Result<Self, PathError> {
        Ok(Self {
            source_dir: paths::find_source_dir()?,
            scratch_dir: PathBuf::from(SHM_DIR),
            bin_dir: paths::home_bin_dir()?,
            artifact_name: ARTIFACT_NAME.to_string(),
            search_path: env::var_os("PATH"),
        })
    }

    /// Full path the installed artifact ends up at.
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.bin_dir.join(&self.artifact_name)
    }
}

/// Candidate artifact paths swept by the uninstaller.
///
/// Currently a single entry, the per-user install location; the sweep itself
/// handles any number of candidates.
pub fn uninstall_targets() -> Result<Vec<PathBuf>, PathError> {
    Ok(vec![paths::home_bin_dir()?.join(ARTIFACT_NAME)])
}
