//! Build direction: ephemeral build directory and the two CMake steps.
//!
//! The build directory is handed back as an owning [`TempDir`] guard, so it
//! is removed on every exit path; the workflow consumes the guard through
//! `cleanup` to get a reported removal on the normal path.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use crate::context::{BUILD_DIR_PREFIX, SetupContext};
use crate::error::{SetupError, SetupResult};
use crate::paths;
use crate::probe::BuildTools;
use crate::report;

/// Create the ephemeral build directory.
///
/// Prefers the memory-backed scratch location when a writability probe
/// succeeds there; otherwise falls back to the system temp directory. The
/// directory name carries a unique suffix, so concurrent leftovers from
/// crashed runs never collide.
pub fn prepare_build_dir(ctx: &SetupContext) -> SetupResult<TempDir> {
    let in_scratch = paths::verify_writable(&ctx.scratch_dir).is_ok();
    if !in_scratch {
        tracing::debug!(
            scratch = %ctx.scratch_dir.display(),
            "scratch location not writable, using system temp dir"
        );
    }

    let builder_result = if in_scratch {
        tempfile::Builder::new()
            .prefix(BUILD_DIR_PREFIX)
            .tempdir_in(&ctx.scratch_dir)
    } else {
        tempfile::Builder::new().prefix(BUILD_DIR_PREFIX).tempdir()
    };

    let build_dir = builder_result.map_err(|e| SetupError::DirectoryCreationFailed {
        reason: e.to_string(),
    })?;

    report::success(&format!(
        "Build directory mounted at: {}",
        build_dir.path().display()
    ));
    Ok(build_dir)
}

/// Configure and build the binaries inside `build_dir`.
///
/// Both steps block until the child exits and stream the child's own output;
/// configuration must succeed before the build is attempted.
pub fn build_binaries(ctx: &SetupContext, tools: &BuildTools, build_dir: &Path) -> SetupResult<()> {
    configure_cmake(tools, &ctx.source_dir, build_dir)?;
    build_project(tools, build_dir)?;
    report::success("Binaries successfully built");
    Ok(())
}

/// Run the CMake configure step against the source tree.
fn configure_cmake(tools: &BuildTools, source_dir: &Path, build_dir: &Path) -> SetupResult<()> {
    tracing::debug!(cmake = %tools.cmake.display(), "running cmake configure");
    let status = Command::new(&tools.cmake)
        .arg("-S")
        .arg(source_dir)
        .arg("-B")
        .arg(build_dir)
        .status()
        .map_err(|e| {
            SetupError::ConfigurationFailed(format!(
                "failed to run {}: {e}",
                tools.cmake.display()
            ))
        })?;

    if !status.success() {
        return Err(SetupError::ConfigurationFailed(exit_reason(status)));
    }
    Ok(())
}

/// Run the CMake build step.
fn build_project(tools: &BuildTools, build_dir: &Path) -> SetupResult<()> {
    tracing::debug!(cmake = %tools.cmake.display(), "running cmake build");
    let status = Command::new(&tools.cmake)
        .arg("--build")
        .arg(build_dir)
        .status()
        .map_err(|e| {
            SetupError::BuildFailed(format!("failed to run {}: {e}", tools.cmake.display()))
        })?;

    if !status.success() {
        return Err(SetupError::BuildFailed(exit_reason(status)));
    }
    Ok(())
}

fn exit_reason(status: std::process::ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("cmake exited with status {code}"),
        None => "cmake was terminated by a signal".to_string(),
    }
}
