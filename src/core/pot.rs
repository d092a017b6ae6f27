//! Rendering of the catalog into `.pot` template text.
//!
//! Output layout:
//!
//! ```text
//! <header>
//!
//! #. translator comment
//! #: src/app.ts:12 src/other.ts:3
//! #, c-format
//! msgid   "first line\n"
//!         "second line"
//! msgstr  ""
//!
//! ...
//! ```

use std::io::{self, Write};

use crate::core::{
    catalog::{Catalog, Occurrence},
    extract::literal::escape_catalog,
    options::ExtractOptions,
};

fn header(options: &ExtractOptions, timestamp: &str) -> String {
    format!(
        r#"# SOME DESCRIPTIVE TITLE.
# Copyright (C) YEAR THE PACKAGE'S COPYRIGHT HOLDER
# This file is distributed under the same license as the PACKAGE package.
# FIRST AUTHOR <EMAIL@ADDRESS>, YEAR.
#
#, fuzzy
msgid   ""
msgstr  "Project-Id-Version: {package}\n"
        "Report-Msgid-Bugs-To: {bugs}\n"
        "POT-Creation-Date: {timestamp}\n"
        "PO-Revision-Date: YEAR-MO-DA HO:MI+ZONE\n"
        "Last-Translator: FULL NAME <EMAIL@ADDRESS>\n"
        "Language-Team: LANGUAGE <LL@li.org>\n"
        "Language: \n"
        "MIME-Version: 1.0\n"
        "Content-Type: text/plain; charset=CHARSET\n"
        "Content-Transfer-Encoding: 8bit\n"
"#,
        package = escape_catalog(&options.package_name),
        bugs = escape_catalog(&options.msgid_bugs_address),
    )
}

/// Split escaped text after every `\n` escape sequence.
///
/// Each segment keeps its own `\n`; a trailing `\n` does not produce an empty
/// final segment. Joining the segments gives back the input.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\' {
            if bytes.get(i + 1) == Some(&b'n') {
                segments.push(&text[start..i + 2]);
                start = i + 2;
            }
            // Skip the escaped character so `\\n` is not taken for `\n`
            i += 2;
        } else {
            i += 1;
        }
    }
    if start < text.len() || segments.is_empty() {
        segments.push(&text[start..]);
    }

    segments
}

/// Render a keyword line, wrapping at newline escapes.
///
/// Continuation lines are indented so their quote lines up under the first one.
fn quoted(keyword: &str, text: &str) -> String {
    let indent = " ".repeat(keyword.len());
    let mut out = String::new();
    for (i, segment) in split_lines(text).into_iter().enumerate() {
        let lead = if i == 0 { keyword } else { indent.as_str() };
        out.push_str(&format!("{lead}\"{segment}\"\n"));
    }
    out
}

fn render_message(out: &mut String, msgid: &str, occurrences: &[Occurrence], no_location: bool) {
    for occurrence in occurrences {
        out.push_str(&occurrence.comment);
    }

    if !no_location {
        out.push_str("#:");
        for occurrence in occurrences {
            out.push_str(&format!(" {}:{}", occurrence.file, occurrence.line));
        }
        out.push('\n');
    }

    if let Some(hint) = occurrences.iter().find_map(|o| o.format_hint) {
        out.push_str(&format!("#, {hint}\n"));
    }

    out.push_str(&quoted("msgid   ", msgid));
    match occurrences.iter().find_map(|o| o.plural.as_deref()) {
        Some(plural) => {
            out.push_str(&quoted("msgid_plural   ", plural));
            out.push_str("msgstr[0]  \"\"\n");
            out.push_str("msgstr[1]  \"\"\n");
        }
        None => out.push_str("msgstr  \"\"\n"),
    }
    out.push('\n');
}

/// Render the complete catalog text: the header followed by one block per message.
pub fn render_pot(catalog: &Catalog, options: &ExtractOptions, timestamp: &str) -> String {
    let mut out = header(options, timestamp);
    out.push('\n');

    for (msgid, occurrences) in catalog.entries(options.sort_output) {
        render_message(&mut out, msgid, occurrences, options.no_location);
    }

    out
}

/// Write the rendered catalog to `writer`.
pub fn write_pot<W: Write>(
    writer: &mut W,
    catalog: &Catalog,
    options: &ExtractOptions,
    timestamp: &str,
) -> io::Result<()> {
    writer.write_all(render_pot(catalog, options, timestamp).as_bytes())?;
    writer.flush()
}
