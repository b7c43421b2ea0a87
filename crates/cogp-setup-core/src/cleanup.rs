//! Build directory removal.

use tempfile::TempDir;

use crate::error::{SetupError, SetupResult};
use crate::report;

/// Recursively delete the build directory, consuming its guard.
///
/// The guard would remove the directory on drop anyway; going through
/// `close()` surfaces the deletion error so the caller can report it. A
/// failure here is `CleanupFailed`, which callers treat as non-fatal.
pub fn remove_build_dir(build_dir: TempDir) -> SetupResult<()> {
    let path = build_dir.path().to_path_buf();
    match build_dir.close() {
        Ok(()) => {
            report::success(&format!("Build directory: {} removed.", path.display()));
            Ok(())
        }
        Err(e) => Err(SetupError::CleanupFailed {
            path,
            reason: e.to_string(),
        }),
    }
}
