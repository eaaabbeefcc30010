//! Log sink port
//!
//! Defines where check events go as they are emitted.

use crate::core::models::{CheckId, Level};

/// Destination for structured check events
///
/// Formatting and destination (console, log facade, CI annotations) are the
/// sink's concern. The framework only calls [`LogSink::emit`].
pub trait LogSink: Send + Sync {
    /// Receive one event emitted by `check`
    fn emit(&self, check: &CheckId, level: Level, message: &str);
}
