//! Reference artifact port
//!
//! Some checks compare repository content against a canonical artifact
//! shipped with the tool, such as a license text.

use std::path::PathBuf;

use crate::core::error::FileAccessError;

/// Resolves reference artifacts by name
pub trait ReferenceLookup: Send + Sync {
    /// Absolute path of the named artifact
    fn reference_path(&self, name: &str) -> Result<PathBuf, FileAccessError>;
}
