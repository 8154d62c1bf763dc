//! Kernel-style logging
//!
//! `pr_*` macros format into a [`LogEntry`], which is kept in a bounded ring
//! buffer and, when its level passes the console threshold, handed to the
//! installed console sink.
//!
//! Two thresholds are involved:
//!
//! 1. **Global Level**: which logs are recorded at all
//! 2. **Console Level**: which recorded logs are printed immediately

pub mod config;
pub mod entry;
pub mod level;
pub mod log_core;
pub mod macros;

mod buffer;

pub use entry::LogEntry;
pub use level::LogLevel;
pub use log_core::{ConsoleSink, LogCore};

static GLOBAL_LOG: LogCore = LogCore::default();

/// Backend of the `pr_*` macros
pub fn log_impl(level: LogLevel, args: core::fmt::Arguments) {
    GLOBAL_LOG._log(level, args);
}

/// Checks if a log level is enabled for recording
#[inline(always)]
#[doc(hidden)]
pub fn is_level_enabled(level: LogLevel) -> bool {
    GLOBAL_LOG.is_level_enabled(level)
}

/// Sets the global log level threshold
pub fn set_global_level(level: LogLevel) {
    GLOBAL_LOG._set_global_level(level);
}

/// Gets the current global log level
pub fn get_global_level() -> LogLevel {
    GLOBAL_LOG._get_global_level()
}

/// Sets the console output level threshold
pub fn set_console_level(level: LogLevel) {
    GLOBAL_LOG._set_console_level(level);
}

/// Gets the current console output level
pub fn get_console_level() -> LogLevel {
    GLOBAL_LOG._get_console_level()
}

/// Installs the function that prints urgent entries (UART, host stderr...)
pub fn set_console_sink(sink: Option<ConsoleSink>) {
    GLOBAL_LOG._set_console_sink(sink);
}

/// Reads the next entry from the global buffer
pub fn read_log() -> Option<LogEntry> {
    GLOBAL_LOG._read_log()
}

/// Returns the number of unread entries in the global buffer
pub fn log_len() -> usize {
    GLOBAL_LOG._log_len()
}

/// Returns the number of entries the global buffer had to drop
pub fn log_dropped_count() -> usize {
    GLOBAL_LOG._log_dropped_count()
}

#[cfg(test)]
mod tests;
