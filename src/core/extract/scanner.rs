//! Source scanner: walks one file's AST and records marker call occurrences.
//!
//! For every call expression the scanner:
//! 1. asks [`MarkerNames`] whether it is a marker call,
//! 2. resolves the message (and plural) argument to literal text,
//! 3. attaches the translator comment immediately preceding the call,
//! 4. infers the format hint from the message text,
//!
//! and appends an [`Occurrence`] to the catalog. Calls whose arguments are not
//! literals are skipped without error.

use swc_ecma_ast::CallExpr;
use swc_ecma_visit::{Visit, VisitWith};
use tracing::debug;

use crate::core::{
    catalog::{Catalog, Occurrence},
    extract::{
        comments::{CommentIndex, translator_comment},
        literal::resolve_literal,
        marker::{MarkerCall, MarkerNames, format_hint},
    },
    parsers::source::ParsedSource,
};

pub struct SourceScanner<'a> {
    /// Path recorded in occurrence locations.
    file_path: &'a str,
    parsed: &'a ParsedSource,
    comments: CommentIndex,
    markers: &'a MarkerNames,
    comments_tag: &'a str,
    catalog: &'a mut Catalog,
    /// Occurrences added by this scan.
    recorded: usize,
}

impl<'a> SourceScanner<'a> {
    pub fn new(
        file_path: &'a str,
        parsed: &'a ParsedSource,
        markers: &'a MarkerNames,
        comments_tag: &'a str,
        catalog: &'a mut Catalog,
    ) -> Self {
        Self {
            file_path,
            parsed,
            comments: CommentIndex::build(parsed),
            markers,
            comments_tag,
            catalog,
            recorded: 0,
        }
    }

    /// Walk the whole module in source order. Returns the number of
    /// occurrences recorded.
    pub fn scan(mut self) -> usize {
        let parsed = self.parsed;
        parsed.module.visit_with(&mut self);
        self.recorded
    }

    fn record(&mut self, call: &CallExpr, marker: MarkerCall<'_>) {
        let line = self.parsed.line_of(call.span.lo);

        let Some(msgid) = resolve_literal(marker.msgid) else {
            debug!(
                file = self.file_path,
                line, "skipping marker call with non-literal message"
            );
            return;
        };
        let plural = match marker.plural.map(resolve_literal) {
            None => None,
            Some(Some(plural)) => Some(plural),
            Some(None) => {
                debug!(
                    file = self.file_path,
                    line, "skipping plural marker call with non-literal plural"
                );
                return;
            }
        };

        let comment = if self.comments_tag.is_empty() {
            String::new()
        } else {
            self.comments
                .preceding(self.parsed, call.span.lo)
                .map(|group| translator_comment(&group.raw, self.comments_tag))
                .unwrap_or_default()
        };

        let occurrence = Occurrence {
            comment,
            file: self.file_path.to_string(),
            line,
            plural,
            format_hint: format_hint(&msgid),
        };
        self.catalog.add(msgid, occurrence);
        self.recorded += 1;
    }
}

impl Visit for SourceScanner<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some(marker) = self.markers.match_call(node) {
            self.record(node, marker);
        }

        // Marker calls may be nested inside other calls' arguments
        node.visit_children_with(self);
    }
}
