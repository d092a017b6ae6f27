//! CLI argument definitions using clap.
//!
//! The default invocation extracts messages, mirroring xgettext:
//!
//! ```text
//! xgettext-ts --keyword i18n.G,i18n.Translate --keyword-plural i18n.NG \
//!     --package-name snappy -o po/snappy.pot src/
//! ```
//!
//! ## Commands
//!
//! - `init`: Write a default `.xgettextrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub extract: ExtractArgs,
}

impl Arguments {
    /// Check that there is something to do, otherwise print help and return None.
    pub fn with_inputs_or_help(self) -> Option<Self> {
        if self.command.is_none() && self.extract.inputs.is_empty() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        self.extract.verbose
    }
}

/// Extraction flags. Unset flags fall back to the config file, then defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct ExtractArgs {
    /// Source files or directories to scan
    pub inputs: Vec<PathBuf>,

    /// Write output to the specified file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not write '#: filename:line' lines
    #[arg(long)]
    pub no_location: bool,

    /// Place comment blocks starting with TAG and preceding marker calls in the output
    #[arg(long, value_name = "TAG")]
    pub add_comments_tag: Option<String>,

    /// Comma-separated names of singular marker functions
    #[arg(short, long, value_name = "NAMES")]
    pub keyword: Option<String>,

    /// Comma-separated names of plural marker functions
    #[arg(long, value_name = "NAMES")]
    pub keyword_plural: Option<String>,

    /// Generate sorted output
    #[arg(short, long)]
    pub sort_output: bool,

    /// Set package name in output
    #[arg(long)]
    pub package_name: Option<String>,

    /// Set report address for msgid bugs
    #[arg(long, value_name = "ADDRESS")]
    pub msgid_bugs_address: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExtractArgs {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if self.no_location {
            config.no_location = true;
        }
        if self.sort_output {
            config.sort_output = true;
        }
        if let Some(tag) = &self.add_comments_tag {
            config.add_comments_tag = tag.clone();
        }
        if let Some(keyword) = &self.keyword {
            config.keywords = vec![keyword.clone()];
        }
        if let Some(keyword_plural) = &self.keyword_plural {
            config.plural_keywords = vec![keyword_plural.clone()];
        }
        if let Some(package_name) = &self.package_name {
            config.package_name = package_name.clone();
        }
        if let Some(address) = &self.msgid_bugs_address {
            config.msgid_bugs_address = address.clone();
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .xgettextrc.json configuration file
    Init,
}
