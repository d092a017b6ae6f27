//! Human-readable command summaries.
//!
//! Extraction summaries go to stderr because stdout may carry the catalog.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

/// Print the extraction summary to a custom writer.
pub fn print_extract_to<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let mut msg = format!(
        "Extracted {} {} ({} {}) from {} {}",
        summary.message_count,
        plural(summary.message_count, "message", "messages"),
        summary.occurrence_count,
        plural(summary.occurrence_count, "occurrence", "occurrences"),
        summary.files_scanned,
        plural(summary.files_scanned, "file", "files"),
    );
    if let Some(path) = &summary.destination {
        msg.push_str(&format!(" into {}", path.display()));
    }
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about unreadable directory entries.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            let mut stderr = io::stderr().lock();
            print_extract_to(summary, &mut stderr);
            print_skipped_warning_to(summary.skipped_count, verbose, &mut stderr);
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}
