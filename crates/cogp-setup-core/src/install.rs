//! Artifact installation into the user's local bin directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::context::SetupContext;
use crate::error::{SetupError, SetupResult};
use crate::paths::{self, PathError};
use crate::report;

/// Move the built artifact from `build_dir` into the target bin directory.
///
/// Creates the target directory (and parents) as needed, probes it for
/// writability, removes any pre-existing installed artifact, then relocates
/// the fresh one. Each failure maps to its own error kind; the build
/// directory is left for cleanup either way.
pub fn install_artifact(ctx: &SetupContext, build_dir: &Path) -> SetupResult<()> {
    paths::ensure_directory(&ctx.bin_dir)?;

    match paths::verify_writable(&ctx.bin_dir) {
        Ok(()) => {}
        Err(PathError::NotWritable { path, reason }) => {
            return Err(SetupError::TargetNotWritable { path, reason });
        }
        Err(other) => return Err(other.into()),
    }

    let target = ctx.target_path();
    if target.is_file() {
        fs::remove_file(&target).map_err(|e| SetupError::RemovalFailed {
            path: target.clone(),
            reason: e.to_string(),
        })?;
    }

    let built = build_dir.join(&ctx.artifact_name);
    move_artifact(&built, &target).map_err(|e| SetupError::MoveFailed {
        from: built.clone(),
        to: ctx.bin_dir.clone(),
        reason: e.to_string(),
    })?;

    report::success(&format!(
        "Installed {} in {}",
        ctx.artifact_name,
        ctx.bin_dir.display()
    ));
    report::success("Installation successful.");
    Ok(())
}

/// Relocate `from` to `to`.
///
/// A plain rename cannot cross filesystem boundaries, and the build directory
/// normally sits on tmpfs while the target is on the home filesystem, so a
/// failed rename falls back to copy-then-delete with the executable bit set
/// on the copy.
fn move_artifact(from: &Path, to: &Path) -> io::Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }

    fs::copy(from, to)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(to)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(to, perms)?;
    }

    fs::remove_file(from)?;
    Ok(())
}
