//! Reference artifacts on disk
//!
//! The bundled artifacts are compiled into the binary and written to a
//! private temporary directory on first use, so an installed binary does not
//! depend on the source checkout it was built from.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use crate::core::error::FileAccessError;
use crate::core::ports::ReferenceLookup;
use crate::paths;

/// Resolves reference artifacts by name under one directory
#[derive(Debug, Clone)]
pub struct ReferenceDir {
    root: PathBuf,
    // Keeps a materialized bundle alive as long as any clone exists
    _bundle: Option<Arc<TempDir>>,
}

impl ReferenceDir {
    /// Look up artifacts under `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            _bundle: None,
        }
    }

    /// The artifacts shipped with repotidy, written to a temporary directory
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created or written.
    pub fn bundled() -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("repotidy-references").tempdir()?;
        for (name, content) in paths::BUNDLED_REFERENCES {
            fs::write(dir.path().join(name), content)?;
        }
        log::debug!("bundled references written to {}", dir.path().display());

        Ok(Self {
            root: dir.path().to_path_buf(),
            _bundle: Some(Arc::new(dir)),
        })
    }

    /// Directory the artifacts are resolved under
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ReferenceLookup for ReferenceDir {
    fn reference_path(&self, name: &str) -> Result<PathBuf, FileAccessError> {
        if !paths::is_contained(Path::new(name)) {
            return Err(FileAccessError::OutsideRoot(PathBuf::from(name)));
        }

        let path = self.root.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(FileAccessError::NotFound(path))
        }
    }
}
