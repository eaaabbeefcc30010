//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - standard document parsing
//! - `git/` - repository discovery with git2
//! - `references` - reference artifacts in a directory
//! - `sinks` - where check events are delivered

pub mod git;
pub mod references;
pub mod sinks;
pub mod toml;

pub use references::ReferenceDir;
pub use sinks::{ConsoleSink, LogFacadeSink, NullSink};
