//! Console status reporting.
//!
//! Success and failure lines carry a colored `[ OK ]` / `[ FAIL ]` tag;
//! fatal errors open with a red banner. Diagnostic logging goes through
//! `tracing` instead and never through this module.

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Format a status line tagged `[ OK ]`.
#[must_use]
pub fn ok_line(message: &str) -> String {
    format!("{message} {GREEN}[ OK ]{RESET}")
}

/// Format a status line tagged `[ FAIL ]`.
#[must_use]
pub fn fail_line(message: &str) -> String {
    format!("{message} {RED}[ FAIL ]{RESET}")
}

/// Print a success status line.
pub fn success(message: &str) {
    println!("{}", ok_line(message));
}

/// Print a failure status line.
pub fn failure(message: &str) {
    println!("{}", fail_line(message));
}

/// Print a whole line in green. Used for the final summary banner.
pub fn green_line(message: &str) {
    println!("{GREEN}{message}{RESET}");
}

/// Print a whole line in red.
pub fn red_line(message: &str) {
    println!("{RED}{message}{RESET}");
}

/// Print the fatal error banner followed by the error text.
pub fn error_banner(detail: &str) {
    eprintln!("{RED}{BOLD}*** ERROR ***{RESET}");
    eprintln!("{detail}");
}
