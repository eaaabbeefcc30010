//! List registered checks

use std::path::Path;

use repotidy::adapters::toml::load_for_repo;
use repotidy::output::{ListResult, ListedCheck, OutputMode};
use repotidy::{EXIT_SUCCESS, rules};

/// List every registered check and whether the standard uses it
pub fn list(standard: Option<&Path>, mode: OutputMode) -> anyhow::Result<i32> {
    let standard = load_for_repo(standard, Path::new("."))?;
    let registry = rules::registry()?;

    let checks = registry
        .iter()
        .map(|(id, descriptor)| ListedCheck {
            id: id.to_string(),
            summary: descriptor.summary.to_string(),
            options: descriptor.options.iter().map(ToString::to_string).collect(),
            kind: standard.get(id.as_str()).map(|c| c.kind),
        })
        .collect();

    ListResult {
        standard: standard.meta.name.clone(),
        checks,
    }
    .render(mode);

    Ok(EXIT_SUCCESS)
}
