use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{
    args::ExtractArgs,
    commands::{CommandResult, CommandSummary, ExtractSummary},
    exit_status::ExitStatus,
    file_scanner::scan_inputs,
};
use crate::config::{ConfigLoadResult, load_config};
use crate::core::{Clock, ExtractError, Extractor};

/// Scan every input and write the catalog.
///
/// Settings come from the config file found from `work_dir`, overridden by
/// command-line flags. The catalog is only written once every file has been
/// scanned, so a read or parse error leaves no partial output behind.
pub fn extract(args: &ExtractArgs, work_dir: &Path, clock: &dyn Clock) -> Result<CommandResult> {
    let ConfigLoadResult {
        mut config,
        from_file,
    } = load_config(work_dir)?;
    args.apply_to(&mut config);
    debug!(from_file, "configuration resolved");

    let ignores = config.ignore_patterns()?;
    let scan = scan_inputs(&args.inputs, &config.extensions, &ignores, args.verbose);

    let mut extractor = Extractor::new(config.extract_options());
    for file in &scan.files {
        extractor.scan_file(file)?;
    }

    let pot = extractor.render(clock);
    write_output(args.output.as_deref(), &pot)?;

    let catalog = extractor.catalog();
    info!(
        files = extractor.files_scanned(),
        messages = catalog.len(),
        "extraction finished"
    );

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            files_scanned: extractor.files_scanned(),
            message_count: catalog.len(),
            occurrence_count: catalog.occurrence_count(),
            skipped_count: scan.skipped_count,
            destination: args.output.clone(),
        }),
        status: ExitStatus::Success,
    })
}

fn write_output(output: Option<&Path>, pot: &str) -> Result<(), ExtractError> {
    match output {
        Some(path) => fs::write(path, pot).map_err(|source| ExtractError::Write {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(pot.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| ExtractError::Write {
                    path: "<stdout>".to_string(),
                    source,
                })
        }
    }
}
