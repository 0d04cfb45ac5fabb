//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// Result set rendered as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    /// Row values in column order; SQL NULL renders as `NULL`
    pub rows: Vec<Vec<String>>,
}

impl QueryOutput {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Database abstraction trait for Snipflow
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute one or more statements without returning rows
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Run a query and collect its rows
    async fn query(&self, sql: &str) -> DbResult<QueryOutput>;

    /// Names of user tables and views, sorted
    async fn table_names(&self) -> DbResult<Vec<String>>;

    /// Distinct column names across user tables and views, sorted
    async fn column_names(&self) -> DbResult<Vec<String>>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
