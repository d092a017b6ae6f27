//! Expansion of command-line inputs into the ordered list of files to scan.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of expanding inputs.
pub struct ScanResult {
    /// Files in scan order.
    pub files: Vec<PathBuf>,
    /// Directory entries that could not be read.
    pub skipped_count: usize,
}

/// Expand `inputs` into files.
///
/// Plain file inputs are kept as given, in order, even if they do not exist
/// (reading them reports the error). Directories are walked in file-name
/// order, keeping files with one of `extensions` that match no `ignores`
/// pattern.
pub fn scan_inputs(
    inputs: &[PathBuf],
    extensions: &[String],
    ignores: &[Pattern],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }

        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if ignores.iter().any(|p| p.matches_path(path)) {
                continue;
            }

            if entry.file_type().is_file() && is_scannable_file(path, extensions) {
                files.push(path.to_path_buf());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_scannable_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
