//! Error types for sf-db

use sf_core::DriverFailure;
use thiserror::Error;

/// Database operation errors
///
/// Execution variants keep the driver's message verbatim so it can be handed
/// to error translation unchanged.
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Table not found (D003)
    #[error("[D003] Table or view not found: {0}")]
    TableNotFound(String),

    /// Column not found (D004)
    #[error("[D004] Column not found: {0}")]
    ColumnNotFound(String),

    /// Mutex poisoned (D005)
    #[error("[D005] Database mutex poisoned: {0}")]
    MutexPoisoned(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// The driver's own message, without the error code prefix
    pub fn driver_message(&self) -> &str {
        match self {
            DbError::ConnectionError(msg)
            | DbError::ExecutionError(msg)
            | DbError::TableNotFound(msg)
            | DbError::ColumnNotFound(msg)
            | DbError::MutexPoisoned(msg) => msg,
        }
    }

    /// Failure record for error translation. Classified variants carry the
    /// matching SQLSTATE; the rest are left to message heuristics.
    pub fn to_failure(&self, sql: &str) -> DriverFailure {
        let failure = DriverFailure::new(self.driver_message()).with_sql(sql);
        match self {
            DbError::TableNotFound(_) => failure.with_code("42P01"),
            DbError::ColumnNotFound(_) => failure.with_code("42703"),
            _ => failure,
        }
    }
}

impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        // duckdb::Error exposes no structured error class, so the message is
        // inspected with narrow patterns
        let msg = err.to_string();
        if msg.contains("Table with name")
            || msg.contains("View with name")
            || msg.contains("Table or view with name")
            || (msg.contains("Catalog Error") && msg.contains("Table") && msg.contains("not found"))
        {
            DbError::TableNotFound(msg)
        } else if msg.contains("Referenced column")
            || (msg.contains("Binder Error") && msg.contains("column") && msg.contains("not found"))
        {
            DbError::ColumnNotFound(msg)
        } else {
            DbError::ExecutionError(msg)
        }
    }
}
