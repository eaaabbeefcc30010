//! Check registry
//!
//! Registration is a two-phase affair: every check type is added to a
//! [`RegistryBuilder`] in one explicit pass at startup, then the builder is
//! frozen into an immutable [`Registry`] before any repository is processed.
//!
//! ```
//! use repotidy::core::registry::RegistryBuilder;
//!
//! let registry = RegistryBuilder::new().freeze();
//! assert!(registry.is_empty());
//! ```

use std::collections::BTreeMap;

use super::check::{Check, CheckContext};
use super::error::ConfigError;
use super::models::CheckId;
use super::standard::ConfigOption;

/// Builds a check instance bound to one repository and config record
pub type Constructor = fn(&CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError>;

/// What the registry knows about one check type
#[derive(Debug, Clone, Copy)]
pub struct CheckDescriptor {
    /// Builds an instance
    pub constructor: Constructor,
    /// Per-check options the standard may set
    pub options: &'static [ConfigOption],
    /// One-line summary for listings
    pub summary: &'static str,
}

impl CheckDescriptor {
    /// A descriptor that accepts no per-check options
    #[must_use]
    pub const fn new(constructor: Constructor, summary: &'static str) -> Self {
        Self {
            constructor,
            options: &[],
            summary,
        }
    }

    /// Declare the per-check options this check recognizes
    #[must_use]
    pub const fn with_options(mut self, options: &'static [ConfigOption]) -> Self {
        self.options = options;
        self
    }

    /// Whether the check recognizes `option`
    #[must_use]
    pub fn accepts(&self, option: ConfigOption) -> bool {
        self.options.contains(&option)
    }
}

/// Mutable registry used during the registration pass
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<CheckId, CheckDescriptor>,
}

impl RegistryBuilder {
    /// An empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check type under `id`
    ///
    /// Fails without touching the registry if `id` is malformed or taken.
    pub fn register(&mut self, id: &str, descriptor: CheckDescriptor) -> Result<(), ConfigError> {
        let id = CheckId::parse(id)?;
        if self.entries.contains_key(&id) {
            return Err(ConfigError::DuplicateIdentifier(id.to_string()));
        }
        log::trace!("registered check {id}");
        self.entries.insert(id, descriptor);
        Ok(())
    }

    /// Number of registered checks
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `id` is registered
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.keys().any(|k| k.as_str() == id)
    }

    /// End the registration pass
    #[must_use]
    pub fn freeze(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }
}

/// Immutable map from check identifier to check type
#[derive(Debug, Clone)]
pub struct Registry {
    entries: BTreeMap<CheckId, CheckDescriptor>,
}

impl Registry {
    /// Descriptor registered under `id`
    pub fn resolve(&self, id: &CheckId) -> Result<&CheckDescriptor, ConfigError> {
        self.entries.get(id).ok_or_else(|| ConfigError::UnknownCheck(id.to_string()))
    }

    /// Whether `id` is registered
    #[must_use]
    pub fn contains(&self, id: &CheckId) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered identifiers, sorted
    pub fn ids(&self) -> impl Iterator<Item = &CheckId> {
        self.entries.keys()
    }

    /// Registered identifiers with their descriptors, sorted
    pub fn iter(&self) -> impl Iterator<Item = (&CheckId, &CheckDescriptor)> {
        self.entries.iter()
    }

    /// Number of registered checks
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
