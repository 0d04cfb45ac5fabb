//! sf-sql - SQL parsing layer for Snipflow
//!
//! This crate provides SQL parsing using sqlparser-rs with dialect support,
//! relation extraction, an AST-backed snippet reference matcher and syntax
//! checks for composed queries.

pub mod dialect;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod parser;

pub use dialect::{dialect_for, SqlDialect};
pub use error::{SqlError, SqlResult};
pub use extractor::{extract_dependencies, extract_unqualified};
pub use matcher::AstReferenceMatcher;
pub use parser::SqlParser;
