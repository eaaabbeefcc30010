//! `repository.*` rules

use std::sync::LazyLock;

use regex::Regex;

use super::matchers::{compiled, is_short_library_name};
use super::{FileExists, Unverifiable, see};
use crate::core::check::{Check, CheckContext, CheckLog};
use crate::core::error::ConfigError;
use crate::core::file_target::FileTarget;
use crate::core::registry::{CheckDescriptor, RegistryBuilder};
use crate::core::standard::ConfigOption;

/// Branch expected when the standard does not name one
pub const DEFAULT_BRANCH: &str = "main";

/// The one submodule libraries may carry: the wg21 paper tooling under `papers/`
static WG21_SUBMODULE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(
        r#"\A\[submodule "(?:.+?/)?wg21"\]\n\tpath = papers/.+?\n\turl = https://github\.com/mpark/wg21\.git\n?\z"#,
    )
});

/// Register the `repository` category
pub fn register(builder: &mut RegistryBuilder) -> Result<(), ConfigError> {
    builder.register(
        "repository.name",
        CheckDescriptor::new(Name::build, "Repository is named after the short library name"),
    )?;
    builder.register(
        "repository.default_branch",
        CheckDescriptor::new(DefaultBranch::build, "Default branch is `main`")
            .with_options(&[ConfigOption::Branch]),
    )?;
    builder.register(
        "repository.codeowners",
        CheckDescriptor::new(codeowners, ".github/CODEOWNERS exists")
            .with_options(&[ConfigOption::File]),
    )?;
    builder.register(
        "repository.code_review_rules",
        CheckDescriptor::new(code_review_rules, "Code review rules are configured (manual)"),
    )?;
    builder.register(
        "repository.disallow_git_submodules",
        CheckDescriptor::new(Submodules::build, "No git submodules except wg21")
            .with_options(&[ConfigOption::File]),
    )
}

fn codeowners(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
    FileExists::boxed(ctx, ".github/CODEOWNERS", "a CODEOWNERS")
}

fn code_review_rules(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
    Unverifiable::boxed(ctx, "Please review the branch protection settings of the repository.")
}

/// Repository name is a short library name
#[derive(Debug)]
pub struct Name {
    name: String,
    prefix: String,
    docs: String,
}

impl Name {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            name: ctx.repo.name().to_string(),
            prefix: ctx.meta.library_prefix.clone(),
            docs: ctx.docs_link(),
        }))
    }
}

impl Check for Name {
    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        if is_short_library_name(&self.name, &self.prefix)? {
            return Ok(true);
        }

        log.report(format!(
            "The repository '{}' should be named after the library name excluding the '{}.' prefix. \
             It should not contain a target C++ version. {}",
            self.name,
            self.prefix,
            see(&self.docs)
        ));
        Ok(false)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(format!("The repository name cannot be fixed automatically. {}", see(&self.docs)));
        Ok(())
    }
}

/// Default branch equals the configured branch
#[derive(Debug)]
pub struct DefaultBranch {
    expected: String,
    actual: Option<String>,
    docs: String,
}

impl DefaultBranch {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        let expected = ctx.config.branch.clone().unwrap_or_else(|| DEFAULT_BRANCH.to_string());
        if expected.trim().is_empty() {
            return Err(ctx.config.invalid(ConfigOption::Branch, "must not be empty"));
        }

        Ok(Box::new(Self {
            expected,
            actual: ctx.repo.default_branch().map(str::to_string),
            docs: ctx.docs_link(),
        }))
    }
}

impl Check for DefaultBranch {
    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        match &self.actual {
            Some(actual) if *actual == self.expected => Ok(true),
            Some(actual) => {
                log.report(format!(
                    "Invalid default branch in repo: '{actual}' vs '{}'. {}",
                    self.expected,
                    see(&self.docs)
                ));
                Ok(false)
            },
            None => {
                log.report(format!(
                    "Cannot determine the default branch of the repository. {}",
                    see(&self.docs)
                ));
                Ok(false)
            },
        }
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(format!(
            "Please set `{}` as default branch in the repository. {}",
            self.expected,
            see(&self.docs)
        ));
        Ok(())
    }
}

/// `.gitmodules` is absent or declares only the wg21 submodule
#[derive(Debug)]
pub struct Submodules {
    file: FileTarget,
    docs: String,
}

impl Submodules {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            file: FileTarget::new(ctx.repo, ctx.file_or(".gitmodules")),
            docs: ctx.docs_link(),
        }))
    }
}

impl Check for Submodules {
    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        if !self.file.exists() {
            return Ok(true);
        }

        let content = self.file.read()?;
        if compiled(&WG21_SUBMODULE)?.is_match(&content) {
            return Ok(true);
        }

        log.report(format!(
            "The repository should not use git submodules. Please remove them. \
             Known exception: wg21. {}",
            see(&self.docs)
        ));
        Ok(false)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(format!("Git submodules cannot be removed automatically. {}", see(&self.docs)));
        Ok(())
    }
}
