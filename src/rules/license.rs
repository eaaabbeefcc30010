//! `license.*` rules

use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::matchers::License;
use super::{Unverifiable, see};
use crate::core::check::{Check, CheckContext, CheckLog};
use crate::core::error::ConfigError;
use crate::core::file_target::FileTarget;
use crate::core::ports::ReferenceLookup;
use crate::core::registry::{CheckDescriptor, RegistryBuilder};
use crate::core::standard::ConfigOption;
use crate::paths;

const LICENSE_FILE: &str = "LICENSE";

/// Register the `license` category
pub fn register(builder: &mut RegistryBuilder) -> Result<(), ConfigError> {
    builder.register(
        "license.approved",
        CheckDescriptor::new(Approved::build, "LICENSE names an approved license")
            .with_options(&[ConfigOption::File]),
    )?;
    builder.register(
        "license.apache_llvm",
        CheckDescriptor::new(ApacheLlvm::build, "LICENSE is the reference Apache-2.0 WITH LLVM-exception text")
            .with_options(&[ConfigOption::File, ConfigOption::Reference]),
    )?;
    builder.register(
        "license.criteria",
        CheckDescriptor::new(criteria, "License meets the approval criteria (manual)"),
    )
}

fn criteria(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
    Unverifiable::boxed(ctx, "Please ignore this message if license.approved has passed.")
}

/// LICENSE carries Apache-2.0 with LLVM exceptions, Boost 1.0 or MIT
#[derive(Debug)]
pub struct Approved {
    file: FileTarget,
    docs: String,
}

impl Approved {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            file: FileTarget::new(ctx.repo, ctx.file_or(LICENSE_FILE)),
            docs: ctx.docs_link(),
        }))
    }
}

impl Check for Approved {
    fn pre_check(&mut self, log: &mut CheckLog<'_>) -> bool {
        self.file.precondition(log)
    }

    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let content = self.file.read()?;
        let name = self.file.relative().display();

        if let Some(license) = License::detect(&content)? {
            log.info(format!("Valid {license} found in {name} file."));
            return Ok(true);
        }

        log.report(format!(
            "Invalid license - cannot find approved license in {name} file. {}",
            see(&self.docs)
        ));
        Ok(false)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(format!(
            "Please update the {} file to include an approved license. {}",
            self.file.relative().display(),
            see(&self.docs)
        ));
        Ok(())
    }
}

/// LICENSE is byte-identical to the reference artifact
pub struct ApacheLlvm {
    file: FileTarget,
    reference: String,
    references: Arc<dyn ReferenceLookup>,
    docs: String,
}

impl ApacheLlvm {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        let reference = ctx
            .config
            .reference
            .clone()
            .unwrap_or_else(|| paths::APACHE_LLVM_LICENSE.to_string());
        if reference.trim().is_empty() {
            return Err(ctx.config.invalid(ConfigOption::Reference, "must not be empty"));
        }
        if !paths::is_contained(Path::new(&reference)) {
            return Err(ctx
                .config
                .invalid(ConfigOption::Reference, "must name a file inside the references directory"));
        }

        Ok(Box::new(Self {
            file: FileTarget::new(ctx.repo, ctx.file_or(LICENSE_FILE)),
            reference,
            references: Arc::clone(ctx.references),
            docs: ctx.docs_link(),
        }))
    }

    fn guidance(&self) -> String {
        format!(
            "Please update the {} file to include the Apache License v2.0 with LLVM Exceptions. {}",
            self.file.relative().display(),
            see(&self.docs)
        )
    }
}

impl std::fmt::Debug for ApacheLlvm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApacheLlvm")
            .field("file", &self.file)
            .field("reference", &self.reference)
            .finish_non_exhaustive()
    }
}

impl Check for ApacheLlvm {
    fn pre_check(&mut self, log: &mut CheckLog<'_>) -> bool {
        self.file.precondition(log)
    }

    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let reference = self.references.reference_path(&self.reference)?;
        let expected = fs::read(&reference)?;

        if self.file.read_bytes()? == expected {
            return Ok(true);
        }

        log.report(self.guidance());
        Ok(false)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(self.guidance());
        Ok(())
    }
}
