//! Build prerequisite detection.
//!
//! Locates the external tools a build run needs on the captured search path
//! and hands their resolved locations to the build director, so nothing
//! downstream consults `PATH` again.

use std::path::PathBuf;

use crate::context::SetupContext;
use crate::error::{SetupError, SetupResult};
use crate::instructions::remediation_text;
use crate::report;

/// Build-configuration tool. Exactly one is required.
pub const CONFIG_TOOL: &str = "cmake";

/// Accepted C++ compilers, in preference order.
pub const COMPILERS: [&str; 2] = ["g++", "clang++"];

/// Accepted build backends, in preference order.
pub const BACKENDS: [&str; 2] = ["make", "ninja"];

/// Resolved locations of the tools a build run will use.
#[derive(Debug, Clone)]
pub struct BuildTools {
    pub cmake: PathBuf,
    pub compiler: PathBuf,
    pub backend: PathBuf,
}

/// Locate cmake, at least one compiler and at least one build backend.
///
/// Prints one `Found <tool> at: <path>` line per tool present. Any gap aborts
/// with a `PrerequisiteMissing` error carrying install instructions; nothing
/// is modified on disk either way.
pub fn probe_build_tools(ctx: &SetupContext) -> SetupResult<BuildTools> {
    let Some(cmake) = locate(ctx, CONFIG_TOOL) else {
        return Err(missing(CONFIG_TOOL));
    };
    report::success(&format!("Found {CONFIG_TOOL} at: {}", cmake.display()));

    let compiler = scan(ctx, &COMPILERS);
    let backend = scan(ctx, &BACKENDS);

    let Some(compiler) = compiler else {
        return Err(missing("a C++ compiler (g++ or clang++)"));
    };
    let Some(backend) = backend else {
        return Err(missing("a build backend (make or ninja)"));
    };

    Ok(BuildTools {
        cmake,
        compiler,
        backend,
    })
}

/// Report every tool from `names` present on the search path and return the
/// first hit, preserving preference order.
fn scan(ctx: &SetupContext, names: &[&str]) -> Option<PathBuf> {
    let mut found = None;
    for name in names {
        if let Some(path) = locate(ctx, name) {
            report::success(&format!("Found {name} at: {}", path.display()));
            found.get_or_insert(path);
        }
    }
    found
}

fn locate(ctx: &SetupContext, name: &str) -> Option<PathBuf> {
    which::which_in(name, ctx.search_path.as_ref(), ".").ok()
}

fn missing(tool: &str) -> SetupError {
    SetupError::PrerequisiteMissing {
        tool: tool.to_string(),
        remediation: remediation_text(),
    }
}
