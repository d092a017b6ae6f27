use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::cli::{
    commands::{CommandResult, CommandSummary, InitSummary},
    exit_status::ExitStatus,
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default config file into `dir` unless one already exists.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult {
            summary: CommandSummary::Init(InitSummary { created: false }),
            status: ExitStatus::Failure,
        });
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { created: true }),
        status: ExitStatus::Success,
    })
}
