//! Log sink adapters
//!
//! - [`LogFacadeSink`] - forwards events to the `log` facade
//! - [`ConsoleSink`] - prints `[level][check.id]: message` lines as they happen
//! - [`NullSink`] - discards everything

use colored::Colorize;

use crate::core::models::{CheckId, Level};
use crate::core::ports::LogSink;

/// `log` target used for check events
pub const CHECK_TARGET: &str = "repotidy::check";

/// Forwards check events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacadeSink;

impl LogSink for LogFacadeSink {
    fn emit(&self, check: &CheckId, level: Level, message: &str) {
        log::log!(target: CHECK_TARGET, level.as_log_level(), "[{check}] {message}");
    }
}

/// Prints check events to stdout, coloured by level
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// The line printed for one event, without colour
    #[must_use]
    pub fn format(check: &CheckId, level: Level, message: &str) -> String {
        format!("[{level}][{check}]: {message}")
    }
}

impl LogSink for ConsoleSink {
    fn emit(&self, check: &CheckId, level: Level, message: &str) {
        let line = Self::format(check, level, message);
        match level {
            Level::Error => println!("{}", line.red()),
            Level::Warning => println!("{}", line.yellow()),
            Level::Info => println!("{line}"),
        }
    }
}

/// Discards check events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn emit(&self, _check: &CheckId, _level: Level, _message: &str) {}
}
