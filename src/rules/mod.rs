//! Built-in rules
//!
//! One module per rule category. Every module exposes a `register` function;
//! [`register_all`] calls them in one explicit pass and [`registry`] freezes
//! the result.
//!
//! | Category     | Checks |
//! |--------------|--------|
//! | `license`    | approved, `apache_llvm`, criteria |
//! | `toplevel`   | cmake, license, readme |
//! | `library`    | name |
//! | `repository` | name, `default_branch`, codeowners, `code_review_rules`, `disallow_git_submodules` |
//! | `release`    | github, notes, `godbolt_trunk_version` |
//! | `readme`     | title, badges, purpose, implements, `library_status`, license |
//! | `directory`  | sources, tests, examples, docs, papers |

pub mod directory;
pub mod library;
pub mod license;
pub mod matchers;
pub mod readme;
pub mod release;
pub mod repository;
pub mod toplevel;

use crate::core::check::{Check, CheckContext, CheckLog};
use crate::core::error::ConfigError;
use crate::core::file_target::FileTarget;
use crate::core::registry::{Registry, RegistryBuilder};

/// Register every built-in rule
///
/// # Errors
///
/// Returns an error if two rules claim the same identifier.
pub fn register_all(builder: &mut RegistryBuilder) -> Result<(), ConfigError> {
    license::register(builder)?;
    toplevel::register(builder)?;
    library::register(builder)?;
    repository::register(builder)?;
    release::register(builder)?;
    readme::register(builder)?;
    directory::register(builder)?;
    Ok(())
}

/// The frozen registry of built-in rules
///
/// # Errors
///
/// Returns an error if registration fails.
pub fn registry() -> Result<Registry, ConfigError> {
    let mut builder = RegistryBuilder::new();
    register_all(&mut builder)?;
    log::debug!("registered {} checks", builder.len());
    Ok(builder.freeze())
}

/// Trailer pointing at the documentation of a check
pub(crate) fn see(docs: &str) -> String {
    format!("See {docs} for more information.")
}

/// A rule that cannot be verified from repository content
///
/// Always skipped; logs what a human should review instead.
#[derive(Debug)]
pub(crate) struct Unverifiable {
    guidance: String,
}

impl Unverifiable {
    pub(crate) fn boxed(
        ctx: &CheckContext<'_>,
        guidance: &str,
    ) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            guidance: format!(
                "{} cannot be checked automatically. {guidance} {}",
                ctx.id(),
                see(&ctx.docs_link())
            ),
        }))
    }
}

impl Check for Unverifiable {
    fn should_skip(&mut self, log: &mut CheckLog<'_>) -> bool {
        log.info(self.guidance.clone());
        true
    }

    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        anyhow::bail!("{} has no automatic evaluation", log.id())
    }
}

/// A rule satisfied by a non-empty file
#[derive(Debug)]
pub(crate) struct FileExists {
    file: FileTarget,
    guidance: String,
}

impl FileExists {
    pub(crate) fn boxed(
        ctx: &CheckContext<'_>,
        default: &str,
        what: &str,
    ) -> Result<Box<dyn Check>, ConfigError> {
        let file = FileTarget::new(ctx.repo, ctx.file_or(default));
        let guidance = format!(
            "Please add {what} file '{}' to the repository. {}",
            file.relative().display(),
            see(&ctx.docs_link())
        );
        Ok(Box::new(Self { file, guidance }))
    }
}

impl Check for FileExists {
    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        Ok(self.file.precondition(log))
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(self.guidance.clone());
        Ok(())
    }
}
