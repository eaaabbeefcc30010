//! `readme.*` rules
//!
//! All file-based rules here read `README.md` unless the standard sets
//! `file`, and fail their precondition when it is missing or empty.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::matchers::{License, compiled};
use super::{Unverifiable, see};
use crate::core::check::{Check, CheckContext, CheckLog};
use crate::core::error::ConfigError;
use crate::core::file_target::FileTarget;
use crate::core::registry::{CheckDescriptor, RegistryBuilder};
use crate::core::standard::ConfigOption;

const README: &str = "README.md";

static IMPLEMENTS_LINE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^\*\*Implements\*\*:\s+.*\bP\d{4}R\d+\b.*wg21\.link/\S+"));

static LICENSE_SECTION: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?ms)^## License\n(.*?)(?:\n##|\z)"));

/// Register the `readme` category
pub fn register(builder: &mut RegistryBuilder) -> Result<(), ConfigError> {
    builder.register(
        "readme.title",
        CheckDescriptor::new(Title::build, "First line is `# <library>: <description>`")
            .with_options(&[ConfigOption::File]),
    )?;
    builder.register(
        "readme.badges",
        CheckDescriptor::new(Badges::build, "Exactly one badge of every configured category")
            .with_options(&[ConfigOption::File, ConfigOption::Badges]),
    )?;
    builder.register(
        "readme.purpose",
        CheckDescriptor::new(purpose, "One line summary of the library's purpose (manual)"),
    )?;
    builder.register(
        "readme.implements",
        CheckDescriptor::new(Implements::build, "Exactly one `**Implements**:` line citing a paper")
            .with_options(&[ConfigOption::File]),
    )?;
    builder.register(
        "readme.library_status",
        CheckDescriptor::new(LibraryStatus::build, "Exactly one library status line")
            .with_options(&[ConfigOption::File, ConfigOption::Values]),
    )?;
    builder.register(
        "readme.license",
        CheckDescriptor::new(LicenseSection::build, "`## License` section names an approved license")
            .with_options(&[ConfigOption::File]),
    )
}

fn purpose(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
    Unverifiable::boxed(ctx, "Please add a one line summary describing the library's purpose.")
}

/// The README file plus the documentation link shared by all readme rules
#[derive(Debug)]
struct Readme {
    file: FileTarget,
    docs: String,
}

impl Readme {
    fn new(ctx: &CheckContext<'_>) -> Self {
        Self {
            file: FileTarget::new(ctx.repo, ctx.file_or(README)),
            docs: ctx.docs_link(),
        }
    }

    fn name(&self) -> String {
        self.file.relative().display().to_string()
    }

    fn guide(&self, log: &mut CheckLog<'_>, what: &str) {
        log.info(format!("Please {what} in the {} file. {}", self.name(), see(&self.docs)));
    }
}

/// First line is `# <prefix>.<name>: <short description>`
#[derive(Debug)]
pub struct Title {
    readme: Readme,
    library: String,
}

impl Title {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            readme: Readme::new(ctx),
            library: ctx.library_name(),
        }))
    }
}

impl Check for Title {
    fn pre_check(&mut self, log: &mut CheckLog<'_>) -> bool {
        self.readme.file.precondition(log)
    }

    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let lines = self.readme.file.read_lines()?;
        let first = lines.first().map_or("", String::as_str);
        let title = Regex::new(&format!(r"^# {}: (.*)$", regex::escape(&self.library)))?;

        if title.is_match(first) {
            return Ok(true);
        }

        log.report(format!(
            "The first line of the file '{}' is invalid. It should start with '# {}: <short_description>'. {}",
            self.readme.name(),
            self.library,
            see(&self.readme.docs)
        ));
        Ok(false)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        let line = format!("use '# {}: <short_description>' as the first line", self.library);
        self.readme.guide(log, &line);
        Ok(())
    }
}

/// Exactly one badge of every configured category
#[derive(Debug)]
pub struct Badges {
    readme: Readme,
    badges: BTreeMap<String, Vec<String>>,
}

impl Badges {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        let badges = ctx.config.require_badges()?.clone();
        if badges.is_empty() {
            return Err(ctx.config.invalid(ConfigOption::Badges, "no badge categories given"));
        }
        if let Some((category, _)) = badges.iter().find(|(_, list)| list.is_empty()) {
            return Err(ctx
                .config
                .invalid(ConfigOption::Badges, format!("category '{category}' lists no badges")));
        }

        Ok(Box::new(Self {
            readme: Readme::new(ctx),
            badges,
        }))
    }
}

impl Check for Badges {
    fn pre_check(&mut self, log: &mut CheckLog<'_>) -> bool {
        self.readme.file.precondition(log)
    }

    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let content = self.readme.file.read()?;
        let mut ok = true;

        for (category, badges) in &self.badges {
            let present = badges.iter().filter(|b| content.contains(b.as_str())).count();
            if present != 1 {
                log.report(format!(
                    "The file '{}' does not contain exactly one required badge of category '{category}' (found {present}). {}",
                    self.readme.name(),
                    see(&self.readme.docs)
                ));
                ok = false;
            }
        }

        Ok(ok)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        self.readme.guide(log, "add the required badges");
        Ok(())
    }
}

/// Exactly one `**Implements**:` line citing a paper and its wg21.link URL
#[derive(Debug)]
pub struct Implements {
    readme: Readme,
}

impl Implements {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            readme: Readme::new(ctx),
        }))
    }
}

impl Check for Implements {
    fn pre_check(&mut self, log: &mut CheckLog<'_>) -> bool {
        self.readme.file.precondition(log)
    }

    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let pattern = compiled(&IMPLEMENTS_LINE)?;
        let lines = self.readme.file.read_lines()?;
        let count = lines.iter().filter(|l| pattern.is_match(l)).count();

        if count == 1 {
            return Ok(true);
        }

        log.report(format!(
            "Invalid/missing/duplicate 'Implements:' line in '{}'. {}",
            self.readme.name(),
            see(&self.readme.docs)
        ));
        Ok(false)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        self.readme.guide(log, "write an Implements line");
        Ok(())
    }
}

/// Exactly one of the configured library status lines
#[derive(Debug)]
pub struct LibraryStatus {
    readme: Readme,
    statuses: Vec<String>,
}

impl LibraryStatus {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        let statuses = ctx.config.require_values()?.to_vec();
        if statuses.is_empty() {
            return Err(ctx.config.invalid(ConfigOption::Values, "no statuses given"));
        }

        Ok(Box::new(Self {
            readme: Readme::new(ctx),
            statuses,
        }))
    }
}

impl Check for LibraryStatus {
    fn pre_check(&mut self, log: &mut CheckLog<'_>) -> bool {
        self.readme.file.precondition(log)
    }

    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let content = self.readme.file.read()?;
        let present = self.statuses.iter().filter(|s| content.contains(s.as_str())).count();

        if present == 1 {
            return Ok(true);
        }

        log.report(format!(
            "The file '{}' does not contain exactly one of the required statuses (found {present}). {}",
            self.readme.name(),
            see(&self.readme.docs)
        ));
        Ok(false)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        self.readme.guide(log, "write a Status line");
        Ok(())
    }
}

/// `## License` section names an approved license
#[derive(Debug)]
pub struct LicenseSection {
    readme: Readme,
}

impl LicenseSection {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            readme: Readme::new(ctx),
        }))
    }
}

impl Check for LicenseSection {
    fn pre_check(&mut self, log: &mut CheckLog<'_>) -> bool {
        self.readme.file.precondition(log)
    }

    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let content = self.readme.file.read()?;
        let section = compiled(&LICENSE_SECTION)?
            .captures(&content)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string());

        let Some(section) = section else {
            log.report(format!(
                "The file '{}' does not contain a `## License` section. {}",
                self.readme.name(),
                see(&self.readme.docs)
            ));
            return Ok(false);
        };

        if License::detect(&section)?.is_some() {
            return Ok(true);
        }

        log.report(format!(
            "The file '{}' does not contain the required license. {}",
            self.readme.name(),
            see(&self.readme.docs)
        ));
        Ok(false)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        self.readme.guide(log, "write a License section");
        Ok(())
    }
}
