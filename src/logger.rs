//! Logging utilities with colored output.
//!
//! Provides the `log!` macro for formatted terminal output with colored
//! module prefixes, and `debug!` for verbose-only messages.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "descriptor ok: {} locales", count);
//! debug!("query"; "resolved locale {}", key);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "check" => prefix.bright_green().bold().to_string(),
        "query" => prefix.bright_blue().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}
