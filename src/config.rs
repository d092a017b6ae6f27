use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    ExtractOptions,
    extract::{DEFAULT_TRANSLATORS_TAG, MarkerNames},
    options::{DEFAULT_KEYWORD, DEFAULT_KEYWORD_PLURAL, DEFAULT_PACKAGE_NAME},
};

pub const CONFIG_FILE_NAME: &str = ".xgettextrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns excluded when walking input directories.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// File extensions scanned when walking input directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    #[serde(default = "default_plural_keywords")]
    pub plural_keywords: Vec<String>,
    #[serde(default = "default_comments_tag")]
    pub add_comments_tag: String,
    #[serde(default)]
    pub no_location: bool,
    #[serde(default)]
    pub sort_output: bool,
    #[serde(default = "default_package_name")]
    pub package_name: String,
    #[serde(default)]
    pub msgid_bugs_address: String,
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx", "mjs", "cjs"]
        .map(String::from)
        .to_vec()
}

fn default_keywords() -> Vec<String> {
    vec![DEFAULT_KEYWORD.to_string()]
}

fn default_plural_keywords() -> Vec<String> {
    vec![DEFAULT_KEYWORD_PLURAL.to_string()]
}

fn default_comments_tag() -> String {
    DEFAULT_TRANSLATORS_TAG.to_string()
}

fn default_package_name() -> String {
    DEFAULT_PACKAGE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            extensions: default_extensions(),
            keywords: default_keywords(),
            plural_keywords: default_plural_keywords(),
            add_comments_tag: default_comments_tag(),
            no_location: false,
            sort_output: false,
            package_name: default_package_name(),
            msgid_bugs_address: String::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        self.ignore_patterns()?;
        Ok(())
    }

    /// Compiled `ignores` patterns.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }

    /// Extraction options described by this config.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            no_location: self.no_location,
            comments_tag: self.add_comments_tag.clone(),
            markers: MarkerNames::new(&self.keywords.join(","), &self.plural_keywords.join(",")),
            sort_output: self.sort_output,
            package_name: self.package_name.clone(),
            msgid_bugs_address: self.msgid_bugs_address.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!("Loaded configuration from: {:?}", path);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
