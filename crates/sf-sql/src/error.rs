//! Error types for sf-sql

use sf_core::DriverFailure;
use thiserror::Error;

/// SQL parsing errors
#[derive(Error, Debug)]
pub enum SqlError {
    /// SQL parse error (S001)
    #[error("[S001] SQL parse error at line {line}, column {column}: {message}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    /// Empty SQL (S002)
    #[error("[S002] SQL is empty")]
    EmptySql,
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;

/// SQLSTATE for syntax errors
const SYNTAX_ERROR_STATE: &str = "42601";

impl From<SqlError> for DriverFailure {
    /// Parse failures enter error translation as syntax errors
    fn from(err: SqlError) -> Self {
        DriverFailure::new(err.to_string()).with_code(SYNTAX_ERROR_STATE)
    }
}
