//! Driver error classification
//!
//! Structured SQLSTATE codes are used when the driver exposes them; message
//! heuristics for the common drivers are the fallback.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// A raw failure surfaced by query execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverFailure {
    /// Driver message, verbatim
    pub message: String,
    /// SQLSTATE or driver-specific code, when exposed
    pub code: Option<String>,
    /// Statement that failed, when known
    pub sql: Option<String>,
}

impl DriverFailure {
    /// Failure with only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            sql: None,
        }
    }

    /// Attach a structured error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the failing statement
    pub fn with_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = Some(sql.into());
        self
    }
}

/// Category of a translated execution error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    TableNotFound,
    ColumnNotFound,
    Syntax,
    Runtime,
    Unknown,
}

impl ErrorKind {
    /// Stable tag for programmatic branching
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::TableNotFound => "TableNotFoundError",
            ErrorKind::ColumnNotFound => "ColumnNotFoundError",
            ErrorKind::Syntax => "SyntaxError",
            ErrorKind::Runtime => "RuntimeError",
            ErrorKind::Unknown => "UnknownError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: ErrorKind,
    /// Offending table or column name, when it could be extracted
    pub identifier: Option<String>,
}

/// Maps a driver failure to an error category
pub trait ErrorClassifier: Send + Sync {
    /// `None` when this classifier does not recognise the failure
    fn classify(&self, failure: &DriverFailure) -> Option<Classification>;
}

/// Classifies by SQLSTATE code
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlStateClassifier;

impl ErrorClassifier for SqlStateClassifier {
    fn classify(&self, failure: &DriverFailure) -> Option<Classification> {
        let kind = match failure.code.as_deref()? {
            "42P01" | "42S02" => ErrorKind::TableNotFound,
            "42703" | "42S22" => ErrorKind::ColumnNotFound,
            "42601" | "42000" => ErrorKind::Syntax,
            code if code.starts_with("42") || code.starts_with("22") => ErrorKind::Runtime,
            _ => return None,
        };
        Some(Classification {
            kind,
            identifier: extract_identifier(kind, &failure.message),
        })
    }
}

/// Classifies by matching known driver message shapes (SQLite, DuckDB,
/// PostgreSQL, MySQL, SQL Server)
#[derive(Debug, Default, Clone, Copy)]
pub struct MessagePatternClassifier;

impl ErrorClassifier for MessagePatternClassifier {
    fn classify(&self, failure: &DriverFailure) -> Option<Classification> {
        let message = failure.message.as_str();
        for kind in [ErrorKind::TableNotFound, ErrorKind::ColumnNotFound] {
            if let Some(identifier) = extract_identifier(kind, message) {
                return Some(Classification {
                    kind,
                    identifier: Some(identifier),
                });
            }
        }

        let kind = if syntax_pattern().is_match(message) {
            ErrorKind::Syntax
        } else if runtime_pattern().is_match(message) {
            ErrorKind::Runtime
        } else {
            return None;
        };
        Some(Classification {
            kind,
            identifier: None,
        })
    }
}

/// Tries each classifier in turn
pub struct ChainClassifier {
    classifiers: Vec<Box<dyn ErrorClassifier>>,
}

impl ChainClassifier {
    pub fn new(classifiers: Vec<Box<dyn ErrorClassifier>>) -> Self {
        Self { classifiers }
    }
}

impl Default for ChainClassifier {
    /// Codes first, message heuristics second
    fn default() -> Self {
        Self::new(vec![
            Box::new(SqlStateClassifier),
            Box::new(MessagePatternClassifier),
        ])
    }
}

impl ErrorClassifier for ChainClassifier {
    fn classify(&self, failure: &DriverFailure) -> Option<Classification> {
        self.classifiers.iter().find_map(|c| c.classify(failure))
    }
}

/// Pull the missing table or column name out of a driver message
pub fn extract_identifier(kind: ErrorKind, message: &str) -> Option<String> {
    let patterns = match kind {
        ErrorKind::TableNotFound => table_patterns(),
        ErrorKind::ColumnNotFound => column_patterns(),
        _ => return None,
    };
    patterns
        .iter()
        .find_map(|re| re.captures(message))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_matches(|c| c == '"' || c == '`' || c == '\'').to_string())
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid regex literal"))
        .collect()
}

fn table_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        compile(&[
            // SQLite
            r"no such table: ([^\s;\]]+)",
            // DuckDB
            r"Table with name ([^\s!]+) does not exist",
            // PostgreSQL
            r#"relation "([^"]+)" does not exist"#,
            // MySQL
            r"Table '(?:[^'.]+\.)?([^']+)' doesn't exist",
            // SQL Server
            r"Invalid object name '([^']+)'",
        ])
    })
}

fn column_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        compile(&[
            r"no such column: ([^\s;\]]+)",
            r#"Referenced column "([^"]+)" not found"#,
            r#"column "?([^"\s]+)"? does not exist"#,
            r"Unknown column '([^']+)'",
            r"Invalid column name '([^']+)'",
        ])
    })
}

fn syntax_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)syntax error|parser error|error in your sql syntax|sql parser error")
            .expect("valid regex literal")
    })
}

fn runtime_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)binder error|catalog error|conversion error|invalid input error|operationalerror|programmingerror|expecting|does not exist",
        )
        .expect("valid regex literal")
    })
}
