use std::sync::Arc;

use swc_common::{
    BytePos, FileName, Globals, SourceMap, Spanned,
    comments::{Comment, SingleThreadedComments},
};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::ExtractError;

/// A parsed source file together with everything the scanner needs to map
/// AST positions back to text and lines.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    /// Every comment in the file, ordered by start position.
    pub comments: Vec<Comment>,
    /// Full source text.
    pub code: String,
    /// Position of the first byte of `code` inside `source_map`.
    pub start_pos: BytePos,
}

impl ParsedSource {
    /// Slice the source text between two positions of this file.
    ///
    /// Returns `None` when the positions fall outside the file or are reversed.
    pub fn text_between(&self, lo: BytePos, hi: BytePos) -> Option<&str> {
        let start = lo.0.checked_sub(self.start_pos.0)? as usize;
        let end = hi.0.checked_sub(self.start_pos.0)? as usize;
        self.code.get(start..end)
    }

    /// Whether only whitespace precedes `pos` on its line.
    pub fn starts_line(&self, pos: BytePos) -> bool {
        let Some(offset) = pos.0.checked_sub(self.start_pos.0) else {
            return false;
        };
        let Some(before) = self.code.get(..offset as usize) else {
            return false;
        };
        let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
        before[line_start..].trim().is_empty()
    }

    /// 1-based line number of a position.
    pub fn line_of(&self, pos: BytePos) -> usize {
        self.source_map.lookup_char_pos(pos).line
    }
}

/// Flatten swc's leading/trailing comment maps into a single ordered list.
///
/// This must be called before `SingleThreadedComments` is dropped.
fn collect_comments(comments: &SingleThreadedComments) -> Vec<Comment> {
    let (leading, trailing) = comments.borrow_all();
    let mut all: Vec<Comment> = leading
        .values()
        .chain(trailing.values())
        .flat_map(|cmts| cmts.iter().cloned())
        .collect();
    all.sort_by_key(|cmt| cmt.span.lo);
    all.dedup_by_key(|cmt| cmt.span.lo);
    all
}

/// Parse a JavaScript/TypeScript source string into an AST.
///
/// TSX syntax is used for every file since it accepts plain JS and JSX too.
/// Any syntax error, including ones the parser recovers from, fails the file.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource, ExtractError> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let parse_error = |error: swc_ecma_parser::error::Error| ExtractError::Parse {
            path: file_path.to_string(),
            line: source_map.lookup_char_pos(error.span().lo).line,
            message: error.kind().msg().into_owned(),
        };

        let module = parser.parse_module().map_err(parse_error)?;
        if let Some(error) = parser.take_errors().into_iter().next() {
            return Err(parse_error(error));
        }

        Ok(ParsedSource {
            module,
            comments: collect_comments(&comments),
            code,
            start_pos: source_file.start_pos,
            source_map: source_map.clone(),
        })
    })
}
