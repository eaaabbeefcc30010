//! TOML parser for standard documents
//!
//! Handles reading and deserializing a standard, then validating it into
//! the core [`Standard`] shape.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::core::models::{CheckId, CheckKind};
use crate::core::standard::{CheckConfig, Standard, StandardMeta};
use crate::paths;

/// A standard document as written on disk
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StandardFile {
    /// Standard-wide metadata
    #[serde(default)]
    pub standard: StandardHeader,

    /// Checks in the order they must run
    #[serde(default, rename = "check")]
    pub checks: Vec<CheckEntry>,
}

/// The `[standard]` table
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StandardHeader {
    /// Display name
    pub name: String,

    /// Library name prefix, e.g. "beman"
    pub library_prefix: String,

    /// Base URL of the documentation
    pub docs_url: Option<String>,
}

impl Default for StandardHeader {
    fn default() -> Self {
        let meta = StandardMeta::default();
        Self {
            name: meta.name,
            library_prefix: meta.library_prefix,
            docs_url: meta.docs_url,
        }
    }
}

/// A `[[check]]` entry
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckEntry {
    /// Check identifier, e.g. "license.approved"
    pub id: String,

    /// requirement or recommendation
    #[serde(default, rename = "type")]
    pub kind: CheckKind,

    /// Disabled checks are reported as skipped
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Skip the check when this path is absent
    pub skip_unless_exists: Option<PathBuf>,

    /// Free text
    pub description: Option<String>,

    /// Target file override
    pub file: Option<String>,

    /// Accepted values
    pub values: Option<Vec<String>>,

    /// Accepted badges per category
    pub badges: Option<BTreeMap<String, Vec<String>>>,

    /// Reference artifact name
    pub reference: Option<String>,

    /// Expected branch name
    pub branch: Option<String>,
}

const fn default_enabled() -> bool {
    true
}

impl CheckEntry {
    fn into_config(self) -> Result<CheckConfig, ConfigError> {
        let mut config = CheckConfig::new(CheckId::parse(&self.id)?);
        config.kind = self.kind;
        config.enabled = self.enabled;
        config.skip_unless_exists = self.skip_unless_exists;
        config.description = self.description;
        config.file = self.file;
        config.values = self.values;
        config.badges = self.badges;
        config.reference = self.reference;
        config.branch = self.branch;
        Ok(config)
    }
}

impl StandardFile {
    /// Validate into the core shape
    pub fn into_standard(self) -> Result<Standard, ConfigError> {
        let checks = self
            .checks
            .into_iter()
            .map(CheckEntry::into_config)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Standard {
            meta: StandardMeta {
                name: self.standard.name,
                library_prefix: self.standard.library_prefix,
                docs_url: self.standard.docs_url,
            },
            checks,
        })
    }
}

/// Parse a standard from TOML text; `origin` is used in error messages
pub fn parse_str(content: &str, origin: &Path) -> Result<Standard, ConfigError> {
    let file: StandardFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    file.into_standard()
}

/// Load a standard from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_file(path: &Path) -> Result<Standard, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content, path)
}

/// The standard compiled into the binary
pub fn bundled() -> Result<Standard, ConfigError> {
    parse_str(paths::BUNDLED_STANDARD, Path::new("<bundled standard>"))
}

/// Find the standard to use for a repository
///
/// An explicit path wins; otherwise `<root>/.repotidy.toml` if present;
/// otherwise the bundled standard.
pub fn load_for_repo(explicit: Option<&Path>, root: &Path) -> Result<Standard, ConfigError> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    let local = paths::standard_file(root);
    if local.is_file() {
        log::debug!("using standard {}", local.display());
        return load_file(&local);
    }

    log::debug!("using bundled standard");
    bundled()
}
