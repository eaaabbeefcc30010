//! Repository scanning
//!
//! Builds a [`RepoInfo`] from a directory tree. Git metadata (remote name,
//! default branch) is layered on top by `adapters::git`.
//!
//! # Examples
//!
//! ```no_run
//! use repotidy::repo::scan;
//!
//! let repo = scan(".").unwrap();
//! println!("{} files", repo.files().len());
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::core::models::RepoInfo;

/// Errors that can occur while scanning a repository
#[derive(Debug, Error)]
pub enum RepoError {
    /// Root path does not exist
    #[error("repository root does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// IO error during file operations
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Scan `root` into repository info named after the directory
pub fn scan(root: impl AsRef<Path>) -> Result<RepoInfo, RepoError> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(RepoError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(RepoError::NotADirectory(root.to_path_buf()));
    }

    let root = root.canonicalize()?;
    let files = list_files(&root)?;
    let name = root
        .file_name()
        .map_or_else(|| "repository".to_string(), |n| n.to_string_lossy().to_string());

    log::debug!("scanned {} files under {}", files.len(), root.display());
    Ok(RepoInfo::new(root, name, files))
}

/// All files under `root`, relative to it, excluding `.git`
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>, RepoError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_git_dir(e)) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        files.push(relative);
    }

    // Sort for deterministic output
    files.sort();
    Ok(files)
}

fn is_git_dir(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name() == ".git"
}
