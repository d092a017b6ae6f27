//! String literal resolution for marker call arguments.
//!
//! Resolved values are already escaped for a double-quoted catalog string, so
//! they can be used directly as catalog keys and written out verbatim.
//!
//! ```ignore
//! i18n.G("foo\n" + 'bar')  → foo\nbar
//! i18n.G(`say "hi"`)      → say \"hi\"
//! i18n.G(name)            → not a literal
//! ```

use std::{iter::Peekable, str::Chars};

use swc_ecma_ast::{BinaryOp, Expr, Lit, Str, Tpl};

/// Resolve an expression to its catalog text.
///
/// Only string literals, substitution-free template literals, parenthesized
/// literals and `+` chains of those resolve. Anything else returns `None`.
pub fn resolve_literal(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => resolve_str(s),
        Expr::Tpl(tpl) => resolve_template(tpl),
        Expr::Paren(paren) => resolve_literal(&paren.expr),
        Expr::Bin(bin) if bin.op == BinaryOp::Add => {
            let mut text = resolve_literal(&bin.left)?;
            text.push_str(&resolve_literal(&bin.right)?);
            Some(text)
        }
        _ => None,
    }
}

/// Quoted string: keep escapes as written, adjusted for double quotes.
fn resolve_str(s: &Str) -> Option<String> {
    let Some(raw) = &s.raw else {
        return s.value.as_str().map(escape_catalog);
    };
    let raw: &str = raw;
    let quote = raw.chars().next()?;
    let body = raw.get(1..raw.len().checked_sub(1)?)?;
    Some(normalize_quoted(body, quote))
}

/// Template literal without substitutions: escape its cooked value.
fn resolve_template(tpl: &Tpl) -> Option<String> {
    if !tpl.exprs.is_empty() {
        return None;
    }
    let quasi = tpl.quasis.first()?;
    let cooked = quasi.cooked.as_ref()?.as_str()?;
    Some(escape_catalog(cooked))
}

/// Escape text for use inside a double-quoted catalog string.
pub fn escape_catalog(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '"' => out.push_str("\\\""),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        _ => out.push(c),
    }
}

/// Rewrite the body of a quoted JS string so it reads as a catalog string.
fn normalize_quoted(body: &str, quote: char) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\'') => out.push('\''),
                // Line continuation
                Some('\n') => {}
                Some('\r') => {
                    chars.next_if_eq(&'\n');
                }
                Some('u') => {
                    let mut lookahead = chars.clone();
                    match decode_unicode_escape(&mut lookahead) {
                        Some(decoded) => {
                            chars = lookahead;
                            push_escaped(&mut out, decoded);
                        }
                        None => out.push_str("\\u"),
                    }
                }
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            '"' if quote != '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }

    out
}

/// Decode the part of `\uXXXX` or `\u{X...}` that follows the `u`.
///
/// A high surrogate followed by a `\u` low surrogate decodes as one character.
fn decode_unicode_escape(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    let code = read_code_unit(chars)?;
    if (0xD800..0xDC00).contains(&code) {
        let mut rest = chars.clone();
        if rest.next() == Some('\\')
            && rest.next() == Some('u')
            && let Some(low) = read_code_unit(&mut rest).filter(|c| (0xDC00..0xE000).contains(c))
        {
            *chars = rest;
            return char::from_u32(0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00));
        }
    }
    char::from_u32(code)
}

fn read_code_unit(chars: &mut Peekable<Chars<'_>>) -> Option<u32> {
    let hex: String = if chars.next_if_eq(&'{').is_some() {
        let mut digits = String::new();
        loop {
            match chars.next()? {
                '}' => break,
                c => digits.push(c),
            }
        }
        digits
    } else {
        (0..4).map(|_| chars.next()).collect::<Option<String>>()?
    };
    u32::from_str_radix(&hex, 16).ok()
}
