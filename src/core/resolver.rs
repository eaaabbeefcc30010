//! Configuration resolver
//!
//! Turns a [`Standard`] into an ordered list of [`BoundCheck`]s. Every
//! problem found here is a configuration error: nothing runs unless the
//! whole standard resolves.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::check::{Check, CheckContext};
use super::error::ConfigError;
use super::models::{CheckId, CheckKind, RepoInfo};
use super::ports::ReferenceLookup;
use super::registry::Registry;
use super::standard::{CheckConfig, Standard};
use crate::paths;

/// A check instance bound to a repository and its configuration
pub struct BoundCheck {
    /// Identifier of the check
    pub id: CheckId,
    /// Requirement or recommendation
    pub kind: CheckKind,
    /// Disabled checks are reported as skipped
    pub enabled: bool,
    /// Skip when this absolute path is absent
    pub skip_unless_exists: Option<PathBuf>,
    /// The instance the engine drives
    pub instance: Box<dyn Check>,
}

impl BoundCheck {
    /// An enabled check with no skip condition
    #[must_use]
    pub fn new(id: CheckId, kind: CheckKind, instance: Box<dyn Check>) -> Self {
        Self {
            id,
            kind,
            enabled: true,
            skip_unless_exists: None,
            instance,
        }
    }
}

impl std::fmt::Debug for BoundCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundCheck")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("enabled", &self.enabled)
            .field("skip_unless_exists", &self.skip_unless_exists)
            .finish_non_exhaustive()
    }
}

/// Resolves standards against a registry for one repository
pub struct Resolver<'a> {
    registry: &'a Registry,
    repo: Arc<RepoInfo>,
    references: Arc<dyn ReferenceLookup>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver for one repository
    #[must_use]
    pub fn new(
        registry: &'a Registry,
        repo: Arc<RepoInfo>,
        references: Arc<dyn ReferenceLookup>,
    ) -> Self {
        Self {
            registry,
            repo,
            references,
        }
    }

    /// Bind every check of the standard, in standard order
    pub fn bind(&self, standard: &Standard) -> Result<Vec<BoundCheck>, ConfigError> {
        self.bind_selected(standard, None)
    }

    /// Bind the checks of the standard, optionally restricted to `selection`
    ///
    /// The selection only filters; output order is always standard order.
    /// A selected identifier the standard does not list is `UnknownCheck`.
    pub fn bind_selected(
        &self,
        standard: &Standard,
        selection: Option<&[String]>,
    ) -> Result<Vec<BoundCheck>, ConfigError> {
        let mut seen = HashSet::new();
        for config in &standard.checks {
            if !seen.insert(config.id.as_str()) {
                return Err(ConfigError::DuplicateEntry(config.id.to_string()));
            }
        }

        let selected: Option<HashSet<&str>> = match selection {
            Some(ids) => {
                for id in ids {
                    CheckId::parse(id)?;
                    if !seen.contains(id.as_str()) {
                        return Err(ConfigError::UnknownCheck(id.clone()));
                    }
                }
                Some(ids.iter().map(String::as_str).collect())
            },
            None => None,
        };

        let mut bound = Vec::new();
        for config in &standard.checks {
            if selected.as_ref().is_some_and(|s| !s.contains(config.id.as_str())) {
                continue;
            }

            let descriptor = self.registry.resolve(&config.id)?;
            if let Some(option) = config.options_set().into_iter().find(|o| !descriptor.accepts(*o)) {
                return Err(ConfigError::UnknownOption {
                    check: config.id.to_string(),
                    option: option.key(),
                });
            }

            check_contained(config)?;

            let ctx = CheckContext {
                config,
                repo: &self.repo,
                meta: &standard.meta,
                references: &self.references,
            };
            let instance = (descriptor.constructor)(&ctx)?;
            log::debug!("bound check {}", config.id);

            bound.push(BoundCheck {
                id: config.id.clone(),
                kind: config.kind,
                enabled: config.enabled,
                skip_unless_exists: config.skip_unless_exists.as_ref().map(|p| self.repo.path(p)),
                instance,
            });
        }

        Ok(bound)
    }
}

/// Repository paths in a configuration record must stay inside the repository
fn check_contained(config: &CheckConfig) -> Result<(), ConfigError> {
    let entries = [
        ("skip_unless_exists", config.skip_unless_exists.as_deref()),
        ("file", config.file.as_deref().map(Path::new)),
    ];

    match entries.into_iter().find(|(_, p)| p.is_some_and(|p| !paths::is_contained(p))) {
        Some((field, _)) => Err(ConfigError::InvalidOption {
            check: config.id.to_string(),
            field,
            reason: "must be a relative path inside the repository".to_string(),
        }),
        None => Ok(()),
    }
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("registry", self.registry)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}
