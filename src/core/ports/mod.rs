//! Port traits (interfaces) for external collaborators
//!
//! The framework depends only on these traits. Implementations live in
//! the `adapters` module, and tests supply their own.
//!
//! - [`LogSink`] - receives every event a check emits
//! - [`ReferenceLookup`] - resolves bundled reference artifacts

mod log_sink;
mod references;

pub use log_sink::LogSink;
pub use references::ReferenceLookup;
