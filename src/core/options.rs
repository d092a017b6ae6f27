use crate::core::extract::{DEFAULT_TRANSLATORS_TAG, MarkerNames};

pub const DEFAULT_KEYWORD: &str = "i18n.G";
pub const DEFAULT_KEYWORD_PLURAL: &str = "i18n.NG";
pub const DEFAULT_PACKAGE_NAME: &str = "PACKAGE VERSION";

/// Settings for one extraction run. Read-only once the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Omit `#: file:line` location lines.
    pub no_location: bool,
    /// Translators tag comments must start with; empty disables comments.
    pub comments_tag: String,
    pub markers: MarkerNames,
    /// Order messages by msgid instead of first appearance.
    pub sort_output: bool,
    pub package_name: String,
    pub msgid_bugs_address: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            no_location: false,
            comments_tag: DEFAULT_TRANSLATORS_TAG.to_string(),
            markers: MarkerNames::new(DEFAULT_KEYWORD, DEFAULT_KEYWORD_PLURAL),
            sort_output: false,
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            msgid_bugs_address: String::new(),
        }
    }
}
