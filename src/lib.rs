//! repotidy - check a library repository against a declarative standard
//!
//! A standard is an ordered list of named checks. repotidy binds each entry
//! to a registered rule, runs every rule once against the repository with
//! per-check fault isolation, and reports pass, fail or skipped per check
//! plus an overall status.

// Deny all clippy warnings in this crate
#![deny(clippy::all, unsafe_code)]
#![warn(
    clippy::pedantic,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit code: every check passed or was skipped
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code: at least one check failed
pub const EXIT_FAILURE: i32 = 1;
/// Exit code: the standard, the repository or the command line is unusable
pub const EXIT_CONFIG_ERROR: i32 = 2;

pub mod adapters;
pub mod core;
pub mod output;
pub mod paths;
pub mod repo;
pub mod rules;
