//! `toplevel.*` rules: required files at the repository root

use super::FileExists;
use crate::core::check::{Check, CheckContext};
use crate::core::error::ConfigError;
use crate::core::registry::{CheckDescriptor, RegistryBuilder};
use crate::core::standard::ConfigOption;

/// Register the `toplevel` category
pub fn register(builder: &mut RegistryBuilder) -> Result<(), ConfigError> {
    let file = &[ConfigOption::File];
    builder.register(
        "toplevel.cmake",
        CheckDescriptor::new(cmake, "CMakeLists.txt exists at the root").with_options(file),
    )?;
    builder.register(
        "toplevel.license",
        CheckDescriptor::new(license, "LICENSE exists at the root").with_options(file),
    )?;
    builder.register(
        "toplevel.readme",
        CheckDescriptor::new(readme, "README.md exists at the root").with_options(file),
    )
}

fn cmake(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
    FileExists::boxed(ctx, "CMakeLists.txt", "a CMake")
}

fn license(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
    FileExists::boxed(ctx, "LICENSE", "a license")
}

fn readme(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
    FileExists::boxed(ctx, "README.md", "a README")
}
