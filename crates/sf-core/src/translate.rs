//! Error translation
//!
//! Turns raw execution failures into tagged, user-facing errors. The friendly
//! explanation comes first, the driver's message is always kept verbatim at
//! the end.

use crate::classify::{ChainClassifier, Classification, DriverFailure, ErrorClassifier, ErrorKind};
use crate::compose::ComposedQuery;
use crate::suggest::{close_matches, did_you_mean, quoted_list, DEFAULT_CUTOFF, DEFAULT_MAX_SUGGESTIONS};
use thiserror::Error;

/// Header placed in front of the driver's own message
pub const ORIGINAL_ERROR: &str = "\nOriginal error message from DB driver:\n";

/// Advisory appended when the failing query was composed from snippets.
/// `<name>` is replaced with the rendered snippet when known.
pub const CTE_MSG: &str = "If using snippets, you may pass the --with argument explicitly.\n\
To debug, check the compiled query with `%sqlcmd snippets <name>`.";

/// Names the translator may suggest when an identifier is not found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownNames {
    pub snippets: Vec<String>,
    pub tables: Vec<String>,
    pub columns: Vec<String>,
}

impl KnownNames {
    pub fn with_snippets<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.snippets.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_tables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(names.into_iter().map(Into::into));
        self
    }

    /// Candidates for table-like identifiers: snippets, then real tables
    fn relations(&self) -> impl Iterator<Item = &str> {
        self.snippets
            .iter()
            .chain(self.tables.iter())
            .map(String::as_str)
    }
}

/// A translated execution error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TranslatedError {
    kind: ErrorKind,
    message: String,
    original: String,
}

impl TranslatedError {
    /// Error category
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Stable tag, e.g. `TableNotFoundError`
    pub fn error_type(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Full user-facing message, original driver message included
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Driver message, verbatim
    pub fn original(&self) -> &str {
        &self.original
    }
}

/// Translates driver failures
pub struct ErrorTranslator {
    classifier: Box<dyn ErrorClassifier>,
    cutoff: f32,
    max_suggestions: usize,
}

impl ErrorTranslator {
    /// Translator with the default classifier chain and suggestion settings
    pub fn new() -> Self {
        Self {
            classifier: Box::new(ChainClassifier::default()),
            cutoff: DEFAULT_CUTOFF,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Replace the classifier
    pub fn with_classifier(mut self, classifier: Box<dyn ErrorClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Suggestion similarity cutoff and cap
    pub fn with_suggestions(mut self, cutoff: f32, max_suggestions: usize) -> Self {
        self.cutoff = cutoff;
        self.max_suggestions = max_suggestions;
        self
    }

    /// Translate a failure from a query that used no snippets
    pub fn translate(&self, failure: &DriverFailure, known: &KnownNames) -> TranslatedError {
        self.translate_with_context(failure, known, None)
    }

    /// Translate a failure, adding the CTE advisory when `composed` used
    /// snippets
    pub fn translate_with_context(
        &self,
        failure: &DriverFailure,
        known: &KnownNames,
        composed: Option<&ComposedQuery>,
    ) -> TranslatedError {
        let classification = self.classifier.classify(failure).unwrap_or(Classification {
            kind: ErrorKind::Unknown,
            identifier: None,
        });
        let kind = classification.kind;

        let mut message = explanation(&classification);
        if let Some(suggestion) = self.suggestion(&classification, known) {
            message.push('\n');
            message.push_str(&suggestion);
        }
        if let Some(advisory) = composed.and_then(cte_advisory) {
            message.push_str("\n\n");
            message.push_str(&advisory);
        }
        message.push_str("\n\n");
        message.push_str(ORIGINAL_ERROR);
        message.push_str(&failure.message);

        log::debug!("Translated driver failure as {}", kind);

        TranslatedError {
            kind,
            message,
            original: failure.message.clone(),
        }
    }

    fn suggestion(&self, classification: &Classification, known: &KnownNames) -> Option<String> {
        let identifier = classification.identifier.as_deref()?;
        let matches = match classification.kind {
            ErrorKind::TableNotFound => {
                close_matches(identifier, known.relations(), self.max_suggestions, self.cutoff)
            }
            ErrorKind::ColumnNotFound => close_matches(
                identifier,
                known.columns.iter().map(String::as_str),
                self.max_suggestions,
                self.cutoff,
            ),
            _ => return None,
        };
        did_you_mean(&matches)
    }
}

impl Default for ErrorTranslator {
    fn default() -> Self {
        Self::new()
    }
}

fn explanation(classification: &Classification) -> String {
    let identifier = classification.identifier.as_deref();
    match (classification.kind, identifier) {
        (ErrorKind::TableNotFound, Some(name)) => format!("There is no table with name '{name}'."),
        (ErrorKind::TableNotFound, None) => "A table referenced by the query does not exist.".into(),
        (ErrorKind::ColumnNotFound, Some(name)) => format!("There is no column with name '{name}'."),
        (ErrorKind::ColumnNotFound, None) => {
            "A column referenced by the query does not exist.".into()
        }
        (ErrorKind::Syntax, _) => "There is a syntax error in the query.".into(),
        (ErrorKind::Runtime, _) => "An error occurred while executing the query.".into(),
        (ErrorKind::Unknown, _) => "An unexpected error occurred.".into(),
    }
}

fn cte_advisory(composed: &ComposedQuery) -> Option<String> {
    if !composed.has_dependencies() {
        return None;
    }
    let mut advisory = match &composed.target {
        Some(target) => CTE_MSG.replace("<name>", target.as_str()),
        None => CTE_MSG.to_string(),
    };
    if !composed.unverified.is_empty() {
        advisory.push_str(&format!(
            "\nSnippets saved without execution: {}",
            quoted_list(&composed.unverified, "and")
        ));
    }
    Some(advisory)
}

#[cfg(test)]
#[path = "translate_test.rs"]
mod tests;
