//! `library.*` rules

use super::Unverifiable;
use crate::core::check::{Check, CheckContext};
use crate::core::error::ConfigError;
use crate::core::registry::{CheckDescriptor, RegistryBuilder};

/// Register the `library` category
pub fn register(builder: &mut RegistryBuilder) -> Result<(), ConfigError> {
    builder.register(
        "library.name",
        CheckDescriptor::new(name, "Library is named <prefix>.<short_name> (manual)"),
    )
}

fn name(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
    Unverifiable::boxed(ctx, "Please ignore this message if repository.name has passed.")
}
