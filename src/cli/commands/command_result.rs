use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub files_scanned: usize,
    /// Distinct messages written to the catalog.
    pub message_count: usize,
    pub occurrence_count: usize,
    /// Directory entries that could not be read while expanding inputs.
    pub skipped_count: usize,
    /// Output file, `None` for stdout.
    pub destination: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}
