//! Recognition of translation marker calls.
//!
//! A marker is any callee whose dotted name matches a configured singular or
//! plural keyword, e.g. `i18n.G("msg")` or `i18n.NG("one", "many", n)`.

use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, MemberProp};

/// Format hint attached to messages that embed `%` directives.
pub const C_FORMAT: &str = "c-format";

/// Which shape of marker a call is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `G(msgid, ...)`
    Singular,
    /// `NG(msgid, msgid_plural, ...)`
    Plural,
}

/// A call classified as a marker, with the argument expressions holding its text.
#[derive(Debug)]
pub struct MarkerCall<'a> {
    pub kind: MarkerKind,
    pub msgid: &'a Expr,
    /// Only present for plural markers.
    pub plural: Option<&'a Expr>,
}

/// Configured singular and plural marker names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerNames {
    singular: Vec<String>,
    plural: Vec<String>,
}

impl MarkerNames {
    /// Build from comma-separated keyword lists, e.g. `"i18n.G,i18n.Translate"`.
    pub fn new(singular: &str, plural: &str) -> Self {
        Self {
            singular: split_keywords(singular),
            plural: split_keywords(plural),
        }
    }

    pub fn singular(&self) -> &[String] {
        &self.singular
    }

    pub fn plural(&self) -> &[String] {
        &self.plural
    }

    /// Classify a callee name. Plural wins when a name is configured as both.
    pub fn kind_of(&self, name: &str) -> Option<MarkerKind> {
        if self.plural.iter().any(|k| k == name) {
            Some(MarkerKind::Plural)
        } else if self.singular.iter().any(|k| k == name) {
            Some(MarkerKind::Singular)
        } else {
            None
        }
    }

    /// Match a call expression against the configured markers.
    ///
    /// Returns `None` when the callee is not a marker or the call lacks the
    /// arguments its kind requires. Extra arguments are ignored.
    pub fn match_call<'a>(&self, call: &'a CallExpr) -> Option<MarkerCall<'a>> {
        let Callee::Expr(callee) = &call.callee else {
            return None;
        };
        let kind = self.kind_of(&qualified_name(callee)?)?;

        let msgid = plain_arg(call.args.first())?;
        let plural = match kind {
            MarkerKind::Singular => None,
            MarkerKind::Plural => Some(plain_arg(call.args.get(1))?),
        };

        Some(MarkerCall {
            kind,
            msgid,
            plural,
        })
    }
}

fn split_keywords(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

/// Spread arguments never carry message text.
fn plain_arg(arg: Option<&ExprOrSpread>) -> Option<&Expr> {
    arg.filter(|a| a.spread.is_none()).map(|a| &*a.expr)
}

/// Dotted name of a callee: `G`, `i18n.G`, `this.i18n.G`.
///
/// Computed members (`i18n["G"]`) and other expressions have no name.
pub fn qualified_name(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::This(_) => Some("this".to_string()),
        Expr::Member(member) => {
            let MemberProp::Ident(prop) = &member.prop else {
                return None;
            };
            let mut name = qualified_name(&member.obj)?;
            name.push('.');
            name.push_str(&prop.sym);
            Some(name)
        }
        _ => None,
    }
}

/// Infer the format hint from resolved message text.
pub fn format_hint(msgid: &str) -> Option<&'static str> {
    msgid.contains('%').then_some(C_FORMAT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use swc_common::SourceMap;
    use swc_ecma_ast::{ModuleItem, Stmt};

    use super::*;
    use crate::core::extract::literal::resolve_literal;
    use crate::core::parsers::source::parse_source;

    fn names() -> MarkerNames {
        MarkerNames::new("i18n.G, i18n.Translate,,G", "i18n.NG,i18n.TranslatePlural")
    }

    /// Parse a single call statement and run the matcher on it.
    fn classify(code: &str) -> Option<(MarkerKind, Option<String>, Option<String>)> {
        let parsed =
            parse_source(code.to_string(), "test.ts", Arc::new(SourceMap::default())).unwrap();
        let Some(ModuleItem::Stmt(Stmt::Expr(stmt))) = parsed.module.body.first() else {
            panic!("expected an expression statement");
        };
        let Expr::Call(call) = &*stmt.expr else {
            panic!("expected a call");
        };
        names().match_call(call).map(|m| {
            (
                m.kind,
                resolve_literal(m.msgid),
                m.plural.and_then(resolve_literal),
            )
        })
    }

    #[test]
    fn test_split_keywords() {
        let names = names();
        assert_eq!(names.singular(), ["i18n.G", "i18n.Translate", "G"]);
        assert_eq!(names.plural(), ["i18n.NG", "i18n.TranslatePlural"]);
    }

    #[test]
    fn test_singular_marker() {
        assert_eq!(
            classify(r#"i18n.G("foo", extra)"#),
            Some((MarkerKind::Singular, Some("foo".to_string()), None))
        );
        assert_eq!(
            classify(r#"G("bare")"#),
            Some((MarkerKind::Singular, Some("bare".to_string()), None))
        );
    }

    #[test]
    fn test_alternate_marker_names() {
        assert_eq!(
            classify(r#"i18n.Translate("goo")"#).map(|m| m.0),
            Some(MarkerKind::Singular)
        );
        assert_eq!(
            classify(r#"i18n.TranslatePlural("one", "many", 3)"#),
            Some((
                MarkerKind::Plural,
                Some("one".to_string()),
                Some("many".to_string())
            ))
        );
    }

    #[test]
    fn test_plural_requires_two_arguments() {
        assert!(classify(r#"i18n.NG("one")"#).is_none());
    }

    #[test]
    fn test_not_a_marker() {
        assert!(classify(r#"i18n.X("foo")"#).is_none());
        assert!(classify(r#"other.i18n.G("foo")"#).is_none());
        assert!(classify(r#"i18n["G"]("foo")"#).is_none());
        assert!(classify(r#"i18n.G(...args)"#).is_none());
        assert!(classify(r#"i18n.G()"#).is_none());
    }

    #[test]
    fn test_plural_wins_over_singular() {
        let names = MarkerNames::new("tr", "tr");
        assert_eq!(names.kind_of("tr"), Some(MarkerKind::Plural));
        assert_eq!(names.kind_of("nope"), None);
    }

    #[test]
    fn test_format_hint() {
        assert_eq!(format_hint("zz %s"), Some(C_FORMAT));
        assert_eq!(format_hint("100%"), Some(C_FORMAT));
        assert_eq!(format_hint("plain"), None);
    }
}
