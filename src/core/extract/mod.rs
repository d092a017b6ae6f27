//! Marker call extraction from parsed source files.
//!
//! ## Module Structure
//!
//! - `comments`: Translator comment formatting and comment-to-call association
//! - `literal`: String literal and concatenation resolution
//! - `marker`: Marker call matching and format hint inference
//! - `scanner`: AST visitor producing catalog occurrences

pub mod comments;
pub mod literal;
pub mod marker;
pub mod scanner;

pub use comments::{CommentIndex, DEFAULT_TRANSLATORS_TAG, format_comment, translator_comment};
pub use literal::resolve_literal;
pub use marker::{MarkerCall, MarkerKind, MarkerNames, format_hint};
pub use scanner::SourceScanner;
