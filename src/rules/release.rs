//! `release.*` rules
//!
//! Release data lives on the hosting service, out of reach of an offline
//! check. Only the Compiler Explorer badge can be verified locally.

use std::sync::LazyLock;

use regex::Regex;

use super::matchers::compiled;
use super::{Unverifiable, see};
use crate::core::check::{Check, CheckContext, CheckLog};
use crate::core::error::ConfigError;
use crate::core::file_target::FileTarget;
use crate::core::registry::{CheckDescriptor, RegistryBuilder};
use crate::core::standard::ConfigOption;

static GODBOLT_BADGE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(
        r"\[!\[Compiler Explorer Example\]\(https://img\.shields\.io/badge/Try%20it%20on%20Compiler%20Explorer-grey\?logo=compilerexplorer&logoColor=67c52a\)\]\(https://godbolt\.org/z/([a-zA-Z0-9]+)\)",
    )
});

/// Register the `release` category
pub fn register(builder: &mut RegistryBuilder) -> Result<(), ConfigError> {
    builder.register(
        "release.github",
        CheckDescriptor::new(github, "Releases are published on GitHub (manual)"),
    )?;
    builder.register(
        "release.notes",
        CheckDescriptor::new(notes, "Releases carry release notes (manual)"),
    )?;
    builder.register(
        "release.godbolt_trunk_version",
        CheckDescriptor::new(GodboltTrunk::build, "README links the trunk version on Compiler Explorer")
            .with_options(&[ConfigOption::File]),
    )
}

fn github(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
    Unverifiable::boxed(ctx, "Please publish releases on GitHub.")
}

fn notes(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
    Unverifiable::boxed(ctx, "Please attach release notes to every release.")
}

/// README carries the Compiler Explorer badge
#[derive(Debug)]
pub struct GodboltTrunk {
    file: FileTarget,
    docs: String,
}

impl GodboltTrunk {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            file: FileTarget::new(ctx.repo, ctx.file_or("README.md")),
            docs: ctx.docs_link(),
        }))
    }
}

impl Check for GodboltTrunk {
    fn pre_check(&mut self, log: &mut CheckLog<'_>) -> bool {
        self.file.precondition(log)
    }

    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let content = self.file.read()?;
        if compiled(&GODBOLT_BADGE)?.is_match(&content) {
            return Ok(true);
        }

        log.report(format!(
            "The file '{}' does not contain a Compiler Explorer badge - trunk version assumed to be missing. {}",
            self.file.relative().display(),
            see(&self.docs)
        ));
        Ok(false)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(format!(
            "Please add a Compiler Explorer badge for the trunk version. {}",
            see(&self.docs)
        ));
        Ok(())
    }
}
