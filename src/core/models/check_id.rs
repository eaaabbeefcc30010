//! Check identifier
//!
//! A dotted `category.name` key, unique within a registry.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::core::error::ConfigError;

/// Identifier of a check, e.g. `license.approved`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckId(String);

impl CheckId {
    /// Parse and validate an identifier
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let valid_segment = |s: &str| {
            !s.is_empty()
                && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        };

        match raw.split_once('.') {
            Some((category, name)) if valid_segment(category) && valid_segment(name) => {
                Ok(Self(raw.to_string()))
            },
            _ => Err(ConfigError::InvalidIdentifier(raw.to_string())),
        }
    }

    /// The full identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the dot, e.g. `license`
    #[must_use]
    pub fn category(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(c, _)| c)
    }

    /// The part after the dot, e.g. `approved`
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.split_once('.').map_or("", |(_, n)| n)
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CheckId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CheckId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
