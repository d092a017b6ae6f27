//! xgettext-ts - gettext message extraction for JavaScript and TypeScript
//!
//! Scans JS/TS/JSX/TSX sources for calls to configured marker functions
//! (`i18n.G("...")`, `i18n.NG("one", "many", n)`), collects the literal
//! messages with their locations and translator comments, and writes a
//! `.pot` template for translators.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (scan sources, render catalog)

pub mod cli;
pub mod config;
pub mod core;
