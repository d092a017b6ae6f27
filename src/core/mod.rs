//! Core extraction engine.
//!
//! The pipeline runs in two phases over an explicitly owned [`Extractor`]:
//!
//! 1. **Scan**: each source file is parsed with swc and walked by
//!    [`extract::SourceScanner`], which appends marker call occurrences to the
//!    [`Catalog`].
//! 2. **Render**: once every file is scanned, [`pot`] turns the catalog into
//!    `.pot` template text.
//!
//! ## Module Structure
//!
//! - `catalog`: Message table and occurrence records
//! - `clock`: Injectable time source for the header date
//! - `error`: Fatal error kinds
//! - `extract`: Literal resolution, marker matching, comments, AST scanner
//! - `extractor`: Session object tying scan and render together
//! - `options`: Run settings
//! - `parsers`: swc parsing of JS/TS sources
//! - `pot`: Catalog serializer

pub mod catalog;
pub mod clock;
mod error;
pub mod extract;
pub mod extractor;
pub mod options;
pub mod parsers;
pub mod pot;

pub use catalog::{Catalog, Occurrence};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ExtractError;
pub use extractor::Extractor;
pub use options::ExtractOptions;
