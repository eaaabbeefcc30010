//! Event levels and check kinds
//!
//! Levels classify the messages a check emits. Kinds classify checks
//! themselves and pick the level used for their failure messages.

use serde::{Deserialize, Serialize};

/// Level of an emitted log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Informational, e.g. which license was recognized
    Info,
    /// Shown prominently, used for failing recommendations
    Warning,
    /// Used for failing requirements and internal faults
    Error,
}

impl Level {
    /// Equivalent level of the `log` facade
    #[must_use]
    pub const fn as_log_level(self) -> log::Level {
        match self {
            Self::Info => log::Level::Info,
            Self::Warning => log::Level::Warn,
            Self::Error => log::Level::Error,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Whether the standard requires or recommends a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Must be satisfied
    #[default]
    Requirement,
    /// Should be satisfied
    Recommendation,
}

impl CheckKind {
    /// Level used when a check of this kind reports a violation
    #[must_use]
    pub const fn failure_level(self) -> Level {
        match self {
            Self::Requirement => Level::Error,
            Self::Recommendation => Level::Warning,
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Requirement => write!(f, "requirement"),
            Self::Recommendation => write!(f, "recommendation"),
        }
    }
}

impl std::str::FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "requirement" => Ok(Self::Requirement),
            "recommendation" => Ok(Self::Recommendation),
            _ => Err(format!("Invalid check type: {s}. Use: requirement, recommendation")),
        }
    }
}
