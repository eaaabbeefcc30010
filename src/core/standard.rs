//! Standard specification model
//!
//! A standard is an ordered list of check configurations plus a little
//! metadata shared by every check. Loading it from disk is the job of
//! `adapters::toml`; this module only holds the validated shape.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use super::error::ConfigError;
use super::models::{CheckId, CheckKind};

/// Metadata shared by every check in a standard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardMeta {
    /// Display name, e.g. "Beman Standard"
    pub name: String,
    /// Prefix of library names, e.g. `beman` for `beman.exemplar`
    pub library_prefix: String,
    /// Base URL of the standard's documentation
    pub docs_url: Option<String>,
}

impl Default for StandardMeta {
    fn default() -> Self {
        Self {
            name: "standard".to_string(),
            library_prefix: "beman".to_string(),
            docs_url: None,
        }
    }
}

/// A per-check option that only some checks recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigOption {
    /// `file`: repository-relative target file
    File,
    /// `values`: list of accepted strings
    Values,
    /// `badges`: accepted badges grouped by category
    Badges,
    /// `reference`: name of a reference artifact
    Reference,
    /// `branch`: expected branch name
    Branch,
}

impl ConfigOption {
    /// Key of the option in the standard document
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Values => "values",
            Self::Badges => "badges",
            Self::Reference => "reference",
            Self::Branch => "branch",
        }
    }
}

impl fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Configuration record for one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Check identifier
    pub id: CheckId,
    /// Requirement or recommendation
    pub kind: CheckKind,
    /// Disabled checks are reported as skipped
    pub enabled: bool,
    /// Skip the check when this repository-relative path is absent
    pub skip_unless_exists: Option<PathBuf>,
    /// Free text from the standard
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

impl CheckConfig {
    /// An enabled requirement with no options set
    #[must_use]
    pub const fn new(id: CheckId) -> Self {
        Self {
            id,
            kind: CheckKind::Requirement,
            enabled: true,
            skip_unless_exists: None,
            description: None,
            file: None,
            values: None,
            badges: None,
            reference: None,
            branch: None,
        }
    }

    /// Options this record sets
    #[must_use]
    pub fn options_set(&self) -> Vec<ConfigOption> {
        [
            (self.file.is_some(), ConfigOption::File),
            (self.values.is_some(), ConfigOption::Values),
            (self.badges.is_some(), ConfigOption::Badges),
            (self.reference.is_some(), ConfigOption::Reference),
            (self.branch.is_some(), ConfigOption::Branch),
        ]
        .into_iter()
        .filter_map(|(set, option)| set.then_some(option))
        .collect()
    }

    /// The `values` option, or `MissingConfig`
    pub fn require_values(&self) -> Result<&[String], ConfigError> {
        self.values.as_deref().ok_or_else(|| self.missing(ConfigOption::Values))
    }

    /// The `badges` option, or `MissingConfig`
    pub fn require_badges(&self) -> Result<&BTreeMap<String, Vec<String>>, ConfigError> {
        self.badges.as_ref().ok_or_else(|| self.missing(ConfigOption::Badges))
    }

    /// Error for a required option the standard did not provide
    #[must_use]
    pub fn missing(&self, option: ConfigOption) -> ConfigError {
        ConfigError::MissingConfig {
            check: self.id.to_string(),
            field: option.key(),
        }
    }

    /// Error for an option whose value cannot be used
    #[must_use]
    pub fn invalid(&self, option: ConfigOption, reason: impl Into<String>) -> ConfigError {
        ConfigError::InvalidOption {
            check: self.id.to_string(),
            field: option.key(),
            reason: reason.into(),
        }
    }
}

/// An ordered standard specification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standard {
    /// Shared metadata
    pub meta: StandardMeta,
    /// Check configurations in the order they must run
    pub checks: Vec<CheckConfig>,
}

impl Standard {
    /// Configuration for one check, if the standard lists it
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CheckConfig> {
        self.checks.iter().find(|c| c.id.as_str() == id)
    }
}
