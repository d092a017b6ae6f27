//! Translator comments.
//!
//! A comment is attached to a marker call when it immediately precedes the
//! call and starts with the translators tag:
//!
//! ```ts
//! // TRANSLATORS: shown on the login page
//! //              keep it short
//! i18n.G("Sign in")
//! ```
//!
//! yields the catalog comment lines `#. shown on the login page` and
//! `#. keep it short`. Consecutive line comments are treated as one group, the
//! same way a block comment spanning several lines is.

use swc_common::{
    BytePos,
    comments::{Comment, CommentKind},
};

use crate::core::parsers::source::ParsedSource;

/// Tag a comment must start with to be copied into the catalog.
pub const DEFAULT_TRANSLATORS_TAG: &str = "TRANSLATORS:";

/// Strip comment delimiters and decoration, one entry per non-empty line.
///
/// Accepts `// ...` (possibly several, newline-separated), `/* ... */` and
/// JSDoc-style `/** ... */` comments.
pub fn comment_lines(raw: &str) -> Vec<String> {
    let is_block = raw.trim_start().starts_with("/*");

    raw.lines()
        .filter_map(|line| {
            let mut line = line.trim();
            if let Some(rest) = line.strip_prefix("//").or_else(|| line.strip_prefix("/*")) {
                line = rest;
            }
            line = line.strip_suffix("*/").unwrap_or(line);
            if is_block {
                line = line.trim_start();
                line = line.strip_prefix('*').unwrap_or(line);
            }
            let line = line.trim();
            (!line.is_empty()).then(|| line.to_string())
        })
        .collect()
}

/// Render every line of a comment as a `#. ` catalog comment line.
pub fn format_comment(raw: &str) -> String {
    render_lines(comment_lines(raw).iter().map(String::as_str))
}

/// Render a comment as catalog comment lines if it carries the translators tag.
///
/// The tag is stripped from the first line. Returns an empty string for
/// untagged comments or when `tag` is empty.
pub fn translator_comment(raw: &str, tag: &str) -> String {
    if tag.is_empty() {
        return String::new();
    }
    let lines = comment_lines(raw);
    let Some((first, rest)) = lines.split_first() else {
        return String::new();
    };
    let Some(first) = first.strip_prefix(tag) else {
        return String::new();
    };

    let first = first.trim();
    let head = (!first.is_empty()).then_some(first);
    render_lines(head.into_iter().chain(rest.iter().map(String::as_str)))
}

fn render_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines.map(|line| format!("#. {line}\n")).collect()
}

/// A run of adjacent comments treated as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup {
    pub lo: BytePos,
    pub hi: BytePos,
    /// Line of the group's last character (1-based).
    pub end_line: usize,
    /// Source form, delimiters included; line comments joined by `\n`.
    pub raw: String,
    /// Line comments that each start their own line; only these groups grow.
    is_own_line: bool,
}

/// Comment groups of one file, ordered by end position.
#[derive(Debug, Default)]
pub struct CommentIndex {
    groups: Vec<CommentGroup>,
}

impl CommentIndex {
    /// Index all comments of a parsed file once.
    pub fn build(parsed: &ParsedSource) -> Self {
        let mut groups: Vec<CommentGroup> = Vec::new();

        for cmt in &parsed.comments {
            let is_own_line = cmt.kind == CommentKind::Line && parsed.starts_line(cmt.span.lo);
            let start_line = parsed.line_of(cmt.span.lo);
            let end_line = parsed.line_of(last_char(cmt));
            let raw = match cmt.kind {
                CommentKind::Line => format!("//{}", cmt.text),
                CommentKind::Block => format!("/*{}*/", cmt.text),
            };

            if let Some(group) = groups.last_mut()
                && group.is_own_line
                && is_own_line
                && group.end_line + 1 == start_line
                && is_blank(parsed.text_between(group.hi, cmt.span.lo))
            {
                group.raw.push('\n');
                group.raw.push_str(&raw);
                group.hi = cmt.span.hi;
                group.end_line = end_line;
                continue;
            }

            groups.push(CommentGroup {
                lo: cmt.span.lo,
                hi: cmt.span.hi,
                end_line,
                raw,
                is_own_line,
            });
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[CommentGroup] {
        &self.groups
    }

    /// Find the comment group immediately preceding a position.
    ///
    /// The nearest group ending before `pos` qualifies if only whitespace
    /// separates it from `pos`, or if it ends on the line just above `pos`.
    pub fn preceding(&self, parsed: &ParsedSource, pos: BytePos) -> Option<&CommentGroup> {
        let idx = self.groups.partition_point(|g| g.hi <= pos);
        let group = self.groups.get(idx.checked_sub(1)?)?;

        let adjacent_line = group.end_line + 1 == parsed.line_of(pos);
        (adjacent_line || is_blank(parsed.text_between(group.hi, pos))).then_some(group)
    }
}

fn last_char(cmt: &Comment) -> BytePos {
    BytePos(cmt.span.hi.0.saturating_sub(1).max(cmt.span.lo.0))
}

fn is_blank(text: Option<&str>) -> bool {
    text.is_some_and(|t| t.trim().is_empty())
}
