use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress everything except errors.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a success message on stderr.
pub fn success(msg: &str) {
    if !quiet() {
        eprintln!("  {} {}", "✓".green(), msg);
    }
}

/// Print a warning message on stderr.
pub fn warning(msg: &str) {
    if !quiet() {
        eprintln!("  {} {}", "⚠".yellow(), msg);
    }
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line on stderr.
pub fn header(msg: &str) {
    if !quiet() {
        eprintln!("\n{}", msg.bold());
    }
}
