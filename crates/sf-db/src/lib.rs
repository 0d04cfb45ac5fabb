//! sf-db - Database layer for Snipflow
//!
//! This crate provides the `Database` trait, the DuckDB backend used to run
//! composed queries, and the mapping from driver errors to the failure
//! records consumed by error translation.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::{Database, QueryOutput};
