//! AST-backed snippet reference matching

use crate::dialect::{dialect_for, SqlDialect};
use crate::extractor::extract_unqualified;
use sf_core::{Dialect as DialectKind, IdentifierMatcher, ReferenceMatcher};

/// Finds snippet references as relations in the parsed AST.
///
/// Only names used as tables count, so a column or alias that happens to
/// share a snippet's name is not a dependency. Text the dialect cannot parse
/// is scanned with [`IdentifierMatcher`] instead.
pub struct AstReferenceMatcher {
    dialect: Box<dyn SqlDialect>,
    fallback: IdentifierMatcher,
}

impl AstReferenceMatcher {
    /// Matcher parsing with the given dialect
    pub fn new(kind: DialectKind) -> Self {
        Self {
            dialect: dialect_for(kind),
            fallback: IdentifierMatcher,
        }
    }
}

impl ReferenceMatcher for AstReferenceMatcher {
    fn find_references(&self, sql: &str, candidates: &[&str]) -> Vec<String> {
        if candidates.is_empty() || sql.trim().is_empty() {
            return Vec::new();
        }
        match self.dialect.parse(sql) {
            Ok(statements) => extract_unqualified(&statements)
                .into_iter()
                .filter(|name| candidates.contains(&name.as_str()))
                .collect(),
            Err(e) => {
                log::debug!(
                    "{} parser rejected snippet text, scanning identifiers instead: {}",
                    self.dialect.name(),
                    e
                );
                self.fallback.find_references(sql, candidates)
            }
        }
    }

    fn name(&self) -> &'static str {
        "ast"
    }
}
