//! Error taxonomy for the framework
//!
//! Configuration errors abort a run before any check executes. File access
//! errors are raised by the file helpers and surface inside a single check's
//! result; they never abort the run on their own.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that make a standard unusable. Fatal to the whole run.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The standard names a check that was never registered
    #[error("unknown check: {0}")]
    UnknownCheck(String),

    /// Two registrations share one identifier
    #[error("check registered twice: {0}")]
    DuplicateIdentifier(String),

    /// The standard lists the same identifier more than once
    #[error("check listed more than once in the standard: {0}")]
    DuplicateEntry(String),

    /// An identifier is not of the form `category.name`
    #[error("invalid check identifier '{0}': expected `category.name` using [a-z0-9_]")]
    InvalidIdentifier(String),

    /// A check needs an option the standard did not provide
    #[error("check {check} requires the `{field}` option")]
    MissingConfig {
        /// Identifier of the check being constructed
        check: String,
        /// Name of the missing option
        field: &'static str,
    },

    /// The standard sets an option the check does not recognize
    #[error("check {check} does not accept the `{option}` option")]
    UnknownOption {
        /// Identifier of the check being configured
        check: String,
        /// Name of the rejected option
        option: &'static str,
    },

    /// An option is present but its value is unusable
    #[error("check {check}: invalid `{field}` option: {reason}")]
    InvalidOption {
        /// Identifier of the check being configured
        check: String,
        /// Name of the offending option
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// The standard document is not valid TOML or has unknown keys
    #[error("failed to parse standard {path}: {source}")]
    Parse {
        /// Path of the standard document
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// The standard document could not be read
    #[error("failed to read standard {path}: {source}")]
    Io {
        /// Path of the standard document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors from reading repository files and reference artifacts
#[derive(Debug, Error)]
pub enum FileAccessError {
    /// The file does not exist
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The name would resolve outside the directory it is looked up in
    #[error("path escapes its root directory: {0}")]
    OutsideRoot(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
