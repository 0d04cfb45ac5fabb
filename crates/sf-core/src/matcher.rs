//! Inferred dependency discovery
//!
//! Finding which stored snippets a query refers to is a heuristic over
//! unparsed SQL. It sits behind [`ReferenceMatcher`] so the resolver's graph
//! logic does not depend on how references are found.

use crate::lexer::{Lexer, TokenKind};
use std::collections::HashSet;

/// Finds references to known snippet names in SQL text.
pub trait ReferenceMatcher: Send + Sync {
    /// Return the entries of `candidates` referenced by `sql`, each at most
    /// once, in order of first occurrence in the text.
    fn find_references(&self, sql: &str, candidates: &[&str]) -> Vec<String>;

    /// Matcher name for logging
    fn name(&self) -> &'static str;
}

/// Matches candidates that appear as standalone identifiers.
///
/// Bare words, `"double quoted"` and `` `backtick quoted` `` identifiers are
/// considered. String literals and comments are skipped, and a name that is
/// only a substring of a longer identifier never matches. An identifier
/// directly after a `.` is the trailing part of a qualified name (for example
/// `analytics.orders`) and is not treated as a snippet reference.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentifierMatcher;

impl ReferenceMatcher for IdentifierMatcher {
    fn find_references(&self, sql: &str, candidates: &[&str]) -> Vec<String> {
        if candidates.is_empty() {
            return Vec::new();
        }
        let wanted: HashSet<&str> = candidates.iter().copied().collect();
        let mut found: Vec<String> = Vec::new();
        let mut after_dot = false;

        for token in Lexer::new(sql) {
            if token.is_comment() || token.is_whitespace() {
                continue;
            }
            if token.kind == TokenKind::Other {
                after_dot = token.text == ".";
                continue;
            }
            let qualified = std::mem::replace(&mut after_dot, false);
            if qualified {
                continue;
            }
            if let Some(ident) = token.ident_value() {
                if wanted.contains(ident.as_ref()) && !found.iter().any(|f| f == ident.as_ref()) {
                    found.push(ident.into_owned());
                }
            }
        }

        found
    }

    fn name(&self) -> &'static str {
        "identifier"
    }
}
