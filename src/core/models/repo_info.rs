//! Repository info model
//!
//! Built once per run and shared read-only with every check.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Build system detected at the repository root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    /// Top-level `CMakeLists.txt`
    CMake,
    /// Top-level `Cargo.toml`
    Cargo,
    /// Nothing recognized
    Unknown,
}

/// Detected project layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    /// Build system at the root
    pub build_system: BuildSystem,
    /// Whether a top-level `src/` directory holds files
    pub has_sources: bool,
}

impl ProjectLayout {
    fn detect(files: &[PathBuf]) -> Self {
        let at_root = |name: &str| files.iter().any(|f| f == Path::new(name));
        let build_system = if at_root("CMakeLists.txt") {
            BuildSystem::CMake
        } else if at_root("Cargo.toml") {
            BuildSystem::Cargo
        } else {
            BuildSystem::Unknown
        };

        Self {
            build_system,
            has_sources: files.iter().any(|f| f.starts_with("src")),
        }
    }
}

/// The repository under check
#[derive(Debug, Clone, Serialize)]
pub struct RepoInfo {
    root: PathBuf,
    name: String,
    default_branch: Option<String>,
    files: Vec<PathBuf>,
    layout: ProjectLayout,
}

impl RepoInfo {
    /// Create repository info from a root, a name and repository-relative files
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>, mut files: Vec<PathBuf>) -> Self {
        files.sort();
        files.dedup();
        let layout = ProjectLayout::detect(&files);
        Self {
            root: root.into(),
            name: name.into(),
            default_branch: None,
            files,
            layout,
        }
    }

    /// Set the default branch name
    #[must_use]
    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = Some(branch.into());
        self
    }

    /// Override the repository name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Absolute root of the repository
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Short repository name, e.g. `exemplar`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default branch, when known
    #[must_use]
    pub fn default_branch(&self) -> Option<&str> {
        self.default_branch.as_deref()
    }

    /// Repository-relative files, sorted
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Detected layout
    #[must_use]
    pub const fn layout(&self) -> ProjectLayout {
        self.layout
    }

    /// Resolve a repository-relative path against the root
    #[must_use]
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Files below a repository-relative directory
    pub fn files_under<'a>(&'a self, dir: &'a Path) -> impl Iterator<Item = &'a PathBuf> + 'a {
        self.files.iter().filter(move |f| f.starts_with(dir))
    }
}
