//! Extraction session: owns the options and the catalog for one run.
//!
//! ```ignore
//! let mut extractor = Extractor::new(ExtractOptions::default());
//! for path in &files {
//!     extractor.scan_file(path)?;
//! }
//! let pot = extractor.render(&SystemClock);
//! ```

use std::{fs, io::Write, path::Path, sync::Arc};

use swc_common::SourceMap;
use tracing::debug;

use crate::core::{
    ExtractError,
    catalog::Catalog,
    clock::Clock,
    extract::SourceScanner,
    options::ExtractOptions,
    parsers::source::parse_source,
    pot::{render_pot, write_pot},
};

pub struct Extractor {
    options: ExtractOptions,
    catalog: Catalog,
    source_map: Arc<SourceMap>,
    files_scanned: usize,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            catalog: Catalog::new(),
            source_map: Arc::new(SourceMap::default()),
            files_scanned: 0,
        }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    /// Read and scan one file. The path is recorded as given.
    pub fn scan_file(&mut self, path: &Path) -> Result<usize, ExtractError> {
        let file_path = path.display().to_string();
        let code = fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: file_path.clone(),
            source,
        })?;
        self.scan_source(&file_path, code)
    }

    /// Parse `code` and add its marker calls to the catalog.
    ///
    /// Returns the number of occurrences recorded. A parse failure leaves the
    /// catalog untouched.
    pub fn scan_source(&mut self, file_path: &str, code: String) -> Result<usize, ExtractError> {
        let parsed = parse_source(code, file_path, self.source_map.clone())?;
        let recorded = SourceScanner::new(
            file_path,
            &parsed,
            &self.options.markers,
            &self.options.comments_tag,
            &mut self.catalog,
        )
        .scan();

        self.files_scanned += 1;
        debug!(file = file_path, recorded, "scanned");
        Ok(recorded)
    }

    /// Render the catalog text with the creation date taken from `clock`.
    pub fn render(&self, clock: &dyn Clock) -> String {
        render_pot(&self.catalog, &self.options, &clock.now())
    }

    /// Write the catalog text to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W, clock: &dyn Clock) -> std::io::Result<()> {
        write_pot(writer, &self.catalog, &self.options, &clock.now())
    }
}
