//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use sf_core::{Config, KnownNames, SessionSettings, SnippetSession, TranslatedError};
use sf_db::{Database, DuckDbBackend};
use sf_sql::AstReferenceMatcher;
use std::fmt;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Commands return `Err(ExitCode(N).into())` after printing their own
/// diagnostics; `main` exits with `N` and prints nothing more.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; must never reach stderr as text
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Load the project configuration, honoring `--config`
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let config = match &global.config {
        Some(path) => Config::load(Path::new(path)),
        None => Config::load_from_dir(Path::new(&global.project_dir)),
    };
    config.context("Failed to load project")
}

/// Build a session holding every snippet the project declares
pub(crate) fn load_session(config: &Config) -> Result<SnippetSession> {
    let mut session = SnippetSession::with_settings(SessionSettings::from(config));
    session.set_matcher(Box::new(AstReferenceMatcher::new(config.dialect)));
    session
        .load_snippets(&config.snippets)
        .context("Failed to register project snippets")?;
    log::debug!(
        "Loaded {} snippets for project '{}'",
        session.store().len(),
        config.name
    );
    Ok(session)
}

/// Open the configured database and run the `on_run_start` statements
pub(crate) async fn open_database(config: &Config, global: &GlobalArgs) -> Result<DuckDbBackend> {
    let path = database_path(config, global);
    let db = DuckDbBackend::new(&path)
        .with_context(|| format!("Failed to open database at {}", path))?;

    for (i, sql) in config.on_run_start.iter().enumerate() {
        log::debug!("Running on_run_start statement {}", i + 1);
        db.execute_batch(sql)
            .await
            .with_context(|| format!("on_run_start statement {} failed", i + 1))?;
    }
    Ok(db)
}

/// Relative database paths are taken from the project directory
fn database_path(config: &Config, global: &GlobalArgs) -> String {
    let path = &config.database.path;
    if path == ":memory:" || Path::new(path).is_absolute() {
        return path.clone();
    }
    Path::new(&global.project_dir)
        .join(path)
        .display()
        .to_string()
}

/// Snippet names plus whatever tables and columns the database reports.
/// Catalog lookups are best effort; a failure only narrows suggestions.
pub(crate) async fn known_names(session: &SnippetSession, db: &dyn Database) -> KnownNames {
    let mut known = session.known_names();
    match db.table_names().await {
        Ok(tables) => known = known.with_tables(tables),
        Err(e) => log::warn!("Could not list tables for suggestions: {}", e),
    }
    match db.column_names().await {
        Ok(columns) => known = known.with_columns(columns),
        Err(e) => log::warn!("Could not list columns for suggestions: {}", e),
    }
    known
}

/// Print a translated error and turn it into a failing exit code
pub(crate) fn report_translated(err: &TranslatedError) -> anyhow::Error {
    log::debug!("Query failed with {}", err.error_type());
    eprintln!("{}", err);
    ExitCode(1).into()
}

/// Calculate column widths for a table given headers and row data.
///
/// For each column, returns the maximum width across the header and all
/// row values so that data aligns when printed with left-padding.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

/// Print a left-aligned table to stdout: header, dashes, then rows.
/// Columns are separated by two spaces.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = calculate_column_widths(headers, rows);

    let header_parts: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_parts.join("  ").trim_end());

    let sep_parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep_parts.join("  "));

    for row in rows {
        let row_parts: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", row_parts.join("  ").trim_end());
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
