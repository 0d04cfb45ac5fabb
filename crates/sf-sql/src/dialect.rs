//! SQL dialect abstraction

use sf_core::Dialect as DialectKind;
use sqlparser::ast::Statement;
use sqlparser::dialect::{
    Dialect, DuckDbDialect as SqlParserDuckDb, GenericDialect as SqlParserGeneric,
    MySqlDialect as SqlParserMySql, PostgreSqlDialect as SqlParserPostgres,
    SQLiteDialect as SqlParserSqlite,
};
use sqlparser::parser::Parser;

use crate::error::{SqlError, SqlResult};

/// Trait for SQL dialect implementations
pub trait SqlDialect: Send + Sync {
    /// Get the underlying sqlparser dialect
    fn parser_dialect(&self) -> &dyn Dialect;

    /// Parse SQL into AST statements
    fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        Parser::parse_sql(self.parser_dialect(), sql).map_err(|e| {
            let msg = e.to_string();
            let (line, column) = parse_location_from_error(&msg);
            SqlError::ParseError {
                message: msg,
                line,
                column,
            }
        })
    }

    /// Get the dialect name
    fn name(&self) -> &'static str;
}

/// Parse line and column from a sqlparser error message.
///
/// `ParserError` carries no structured location, so "Line: N, Column: M" is
/// read back out of the message text. Returns `(0, 0)` when absent.
fn parse_location_from_error(msg: &str) -> (usize, usize) {
    let Some(line_idx) = msg.find("Line: ") else {
        return (0, 0);
    };
    let line_start = line_idx + 6;
    let Some(comma_idx) = msg[line_start..].find(',') else {
        return (0, 0);
    };
    let Ok(line) = msg[line_start..line_start + comma_idx]
        .trim()
        .parse::<usize>()
    else {
        return (0, 0);
    };
    let Some(col_idx) = msg.find("Column: ") else {
        return (0, 0);
    };
    let col_start = col_idx + 8;
    let col_end = msg[col_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|i| col_start + i)
        .unwrap_or(msg.len());
    let Ok(column) = msg[col_start..col_end].trim().parse::<usize>() else {
        return (0, 0);
    };
    (line, column)
}

macro_rules! sql_dialect {
    ($(#[$meta:meta])* $name:ident, $inner:ident, $label:literal) => {
        $(#[$meta])*
        pub struct $name {
            dialect: $inner,
        }

        impl $name {
            pub fn new() -> Self {
                Self { dialect: $inner {} }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl SqlDialect for $name {
            fn parser_dialect(&self) -> &dyn Dialect {
                &self.dialect
            }

            fn name(&self) -> &'static str {
                $label
            }
        }
    };
}

sql_dialect!(
    /// DuckDB SQL dialect
    DuckDbDialect,
    SqlParserDuckDb,
    "duckdb"
);

sql_dialect!(
    /// SQLite SQL dialect
    SqliteDialect,
    SqlParserSqlite,
    "sqlite"
);

sql_dialect!(
    /// PostgreSQL dialect
    PostgresDialect,
    SqlParserPostgres,
    "postgres"
);

sql_dialect!(
    /// MySQL dialect
    MySqlDialect,
    SqlParserMySql,
    "mysql"
);

sql_dialect!(
    /// Generic ANSI dialect
    GenericDialect,
    SqlParserGeneric,
    "generic"
);

/// Dialect implementation for a configured dialect kind
pub fn dialect_for(kind: DialectKind) -> Box<dyn SqlDialect> {
    match kind {
        DialectKind::DuckDb => Box::new(DuckDbDialect::new()),
        DialectKind::Sqlite => Box::new(SqliteDialect::new()),
        DialectKind::Postgres => Box::new(PostgresDialect::new()),
        DialectKind::MySql => Box::new(MySqlDialect::new()),
        DialectKind::Generic => Box::new(GenericDialect::new()),
    }
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
