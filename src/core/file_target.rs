//! File and directory helpers for checks
//!
//! File-based checks compose a [`FileTarget`] instead of inheriting from a
//! base check. The target is resolved against the repository root when the
//! check is constructed; `precondition` is the usual body of `pre_check`.

use std::fs;
use std::path::{Path, PathBuf};

use super::check::CheckLog;
use super::error::FileAccessError;
use super::models::RepoInfo;

/// A repository file a check reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    relative: PathBuf,
    path: PathBuf,
}

impl FileTarget {
    /// Resolve `relative` against the repository root
    #[must_use]
    pub fn new(repo: &RepoInfo, relative: impl Into<PathBuf>) -> Self {
        let relative = relative.into();
        let path = repo.path(&relative);
        Self { relative, path }
    }

    /// Repository-relative path
    #[must_use]
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Absolute path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file exists
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Full content of the file
    pub fn read(&self) -> Result<String, FileAccessError> {
        if !self.exists() {
            return Err(FileAccessError::NotFound(self.path.clone()));
        }
        fs::read_to_string(&self.path).map_err(|source| FileAccessError::Read {
            path: self.path.clone(),
            source,
        })
    }

    /// Raw bytes of the file
    pub fn read_bytes(&self) -> Result<Vec<u8>, FileAccessError> {
        if !self.exists() {
            return Err(FileAccessError::NotFound(self.path.clone()));
        }
        fs::read(&self.path).map_err(|source| FileAccessError::Read {
            path: self.path.clone(),
            source,
        })
    }

    /// Lines of the file with surrounding whitespace removed
    pub fn read_lines(&self) -> Result<Vec<String>, FileAccessError> {
        Ok(self.read()?.lines().map(|l| l.trim().to_string()).collect())
    }

    /// Whether the file contains `needle`
    pub fn contains(&self, needle: &str) -> Result<bool, FileAccessError> {
        Ok(self.read()?.contains(needle))
    }

    /// Exists, is readable and is not empty. Logs the reason otherwise.
    pub fn precondition(&self, log: &mut CheckLog<'_>) -> bool {
        match self.read() {
            Ok(content) if content.trim().is_empty() => {
                log.report(format!("The file '{}' is empty.", self.relative.display()));
                false
            },
            Ok(_) => true,
            Err(FileAccessError::NotFound(_)) => {
                log.report(format!("The file '{}' does not exist.", self.relative.display()));
                false
            },
            Err(e) => {
                log.report(e.to_string());
                false
            },
        }
    }
}

/// A repository directory a check inspects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirTarget {
    relative: PathBuf,
    path: PathBuf,
}

impl DirTarget {
    /// Resolve `relative` against the repository root
    #[must_use]
    pub fn new(repo: &RepoInfo, relative: impl Into<PathBuf>) -> Self {
        let relative = relative.into();
        let path = repo.path(&relative);
        Self { relative, path }
    }

    /// Repository-relative path
    #[must_use]
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Absolute path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the directory exists
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Exists and is a directory. Logs the reason otherwise.
    pub fn precondition(&self, log: &mut CheckLog<'_>) -> bool {
        if self.exists() {
            return true;
        }
        log.report(format!("The directory '{}' does not exist.", self.relative.display()));
        false
    }
}
