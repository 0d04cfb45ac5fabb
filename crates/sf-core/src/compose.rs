//! CTE composition
//!
//! Renders resolved snippets as a single `WITH` clause in front of a final
//! query. Bodies are inserted exactly as stored.

use crate::snippet_name::SnippetName;
use crate::store::Snippet;
use crate::suggest::quoted_list;
use serde::{Deserialize, Serialize};

/// Identifier quoting used for CTE names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// `` `name` ``
    #[default]
    Backtick,
    /// `"name"`
    DoubleQuote,
}

impl QuoteStyle {
    /// The quote character
    pub fn quote_char(self) -> char {
        match self {
            QuoteStyle::Backtick => '`',
            QuoteStyle::DoubleQuote => '"',
        }
    }

    /// Quote an identifier, doubling embedded quote characters.
    ///
    /// # Examples
    /// ```
    /// use sf_core::QuoteStyle;
    /// assert_eq!(QuoteStyle::Backtick.quote("select"), "`select`");
    /// assert_eq!(QuoteStyle::DoubleQuote.quote(r#"my"cte"#), r#""my""cte""#);
    /// ```
    pub fn quote(self, ident: &str) -> String {
        let q = self.quote_char();
        let escaped = ident.replace(q, &format!("{q}{q}"));
        format!("{q}{escaped}{q}")
    }
}

/// Renders `WITH` clauses
#[derive(Debug, Clone, Copy, Default)]
pub struct CteComposer {
    quote_style: QuoteStyle,
}

impl CteComposer {
    /// Create a composer with the given quote style
    pub fn new(quote_style: QuoteStyle) -> Self {
        Self { quote_style }
    }

    /// Quote style in use
    pub fn quote_style(&self) -> QuoteStyle {
        self.quote_style
    }

    /// Render `WITH "n1" AS (\nbody1), "n2" AS (\nbody2)\n<final_query>`.
    ///
    /// With no CTEs the final query is returned unchanged.
    pub fn compose(&self, ctes: &[(&str, &str)], final_query: &str) -> String {
        if ctes.is_empty() {
            return final_query.to_string();
        }

        let definitions: Vec<String> = ctes
            .iter()
            .map(|(name, body)| format!("{} AS (\n{})", self.quote_style.quote(name), body))
            .collect();

        format!("WITH {}\n{}", definitions.join(", "), final_query)
    }

    /// Render stored snippets (already in resolver order) as CTEs
    pub fn compose_snippets(&self, snippets: &[&Snippet], final_query: &str) -> String {
        let ctes: Vec<(&str, &str)> = snippets
            .iter()
            .map(|s| (s.name().as_str(), s.body()))
            .collect();
        self.compose(&ctes, final_query)
    }
}

/// The executable text of a query plus the snippets it was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedQuery {
    /// Final executable SQL
    pub sql: String,
    /// Snippets emitted as CTEs, in order
    pub dependencies: Vec<SnippetName>,
    /// Stored snippet being rendered, if the query came from one
    pub target: Option<SnippetName>,
    /// Dependencies (or the target) saved without execution
    pub unverified: Vec<SnippetName>,
}

impl ComposedQuery {
    /// True when at least one CTE was emitted
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    /// Log line describing the generated CTE, if any
    pub fn summary(&self) -> Option<String> {
        if self.dependencies.is_empty() {
            return None;
        }
        Some(format!(
            "Generating CTE with stored snippets: {}",
            quoted_list(&self.dependencies, "and")
        ))
    }
}
