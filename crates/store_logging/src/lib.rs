#![deny(missing_docs)]
//! Shared logging utilities for the dashboard workspace.
//!
//! This crate provides the `store_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line emitted
//! through the macros is prefixed with the store's current dispatch sequence
//! number (`[d42] ...`) so log output can be correlated with the message that
//! produced it.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current dispatch sequence number.
    static DISPATCH_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Sets the dispatch sequence number for the current thread.
/// The store calls this once per dispatched message.
pub fn set_dispatch_seq(seq: u64) {
    DISPATCH_SEQ.with(|v| v.set(seq));
}

/// Retrieves the dispatch sequence number for the current thread.
/// Returns 0 outside of any dispatch.
pub fn dispatch_seq() -> u64 {
    DISPATCH_SEQ.with(|v| v.get())
}

/// Logs a trace-level message, tagged with the dispatch sequence.
#[macro_export]
macro_rules! store_trace {
    ($($arg:tt)*) => {{
        log::trace!("[d{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message, tagged with the dispatch sequence.
#[macro_export]
macro_rules! store_debug {
    ($($arg:tt)*) => {{
        log::debug!("[d{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message, tagged with the dispatch sequence.
#[macro_export]
macro_rules! store_info {
    ($($arg:tt)*) => {{
        log::info!("[d{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message, tagged with the dispatch sequence.
#[macro_export]
macro_rules! store_warn {
    ($($arg:tt)*) => {{
        log::warn!("[d{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message, tagged with the dispatch sequence.
#[macro_export]
macro_rules! store_error {
    ($($arg:tt)*) => {{
        log::error!("[d{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
