//! Write the bundled standard into a repository

use std::fs;
use std::path::Path;

use anyhow::Context;
use repotidy::output::{OperationResult, OutputMode};
use repotidy::{EXIT_FAILURE, EXIT_SUCCESS, paths};

/// Create `<path>/.repotidy.toml` from the bundled standard
pub fn init(path: &Path, force: bool, mode: OutputMode) -> anyhow::Result<i32> {
    let target = paths::standard_file(path);

    if target.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "{} already exists. Use --force to overwrite it.",
                target.display()
            ),
        }
        .render(mode);
        return Ok(EXIT_FAILURE);
    }

    fs::write(&target, paths::BUNDLED_STANDARD)
        .with_context(|| format!("failed to write {}", target.display()))?;
    log::info!("wrote {}", target.display());

    OperationResult {
        success: true,
        message: format!("Created {}", target.display()),
    }
    .render(mode);
    Ok(EXIT_SUCCESS)
}
