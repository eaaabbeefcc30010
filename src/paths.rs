//! Centralized path definitions for repotidy
//!
//! Single source of truth for the filesystem locations repotidy reads.
//!
//! ## Layout
//!
//! ```text
//! repo/                         # Repository under check
//! └── .repotidy.toml            # Optional: repository-local standard
//!
//! <crate>/                      # Both compiled into the binary
//! ├── standard.toml             # Bundled default standard
//! └── references/               # Bundled reference artifacts
//!     └── LICENSE.apache-llvm
//! ```

use std::path::{Component, Path, PathBuf};

/// Repository-local standard filename
pub const STANDARD_TOML: &str = ".repotidy.toml";

/// Default reference artifact for `license.apache_llvm`
pub const APACHE_LLVM_LICENSE: &str = "LICENSE.apache-llvm";

/// The default standard, compiled into the binary
pub const BUNDLED_STANDARD: &str = include_str!("../standard.toml");

/// Get path to the repository-local standard.
#[must_use]
pub fn standard_file(root: &Path) -> PathBuf {
    root.join(STANDARD_TOML)
}

/// Reference artifacts compiled into the binary, by name
pub const BUNDLED_REFERENCES: &[(&str, &[u8])] =
    &[(APACHE_LLVM_LICENSE, include_bytes!("../references/LICENSE.apache-llvm").as_slice())];

/// Whether `path` stays below the directory it is joined onto:
/// relative, and without `..` or root components.
#[must_use]
pub fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
