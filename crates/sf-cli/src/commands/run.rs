//! Run command implementation

use anyhow::{Context, Result};
use sf_core::ComposedQuery;
use sf_db::Database;

use crate::cli::{GlobalArgs, RunArgs};
use crate::commands::common::{
    known_names, load_config, load_session, open_database, print_table, report_translated,
};

/// Execute the run command
pub async fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let session = load_session(&config)?;

    let composed: ComposedQuery = match (&args.name, &args.sql) {
        (Some(name), _) => session
            .compose_snippet(name)
            .with_context(|| format!("Failed to compose snippet '{}'", name))?,
        (None, Some(sql)) => session
            .resolve_and_compose(sql, args.with.as_slice())
            .context("Failed to compose query")?,
        (None, None) => anyhow::bail!("Nothing to run: pass a snippet name or --sql"),
    };

    let db = open_database(&config, global).await?;
    log::debug!("Executing on {}:\n{}", db.db_type(), composed.sql);

    let output = match db.query(&composed.sql).await {
        Ok(output) => output,
        Err(err) => {
            let failure = err.to_failure(&composed.sql);
            let known = known_names(&session, &db).await;
            let translated = session.translate_composed_error(&failure, &known, &composed);
            return Err(report_translated(&translated));
        }
    };

    let headers: Vec<&str> = output.columns.iter().map(String::as_str).collect();
    print_table(&headers, &output.rows);
    let count = output.row_count();
    println!("\n{} {}", count, if count == 1 { "row" } else { "rows" });
    Ok(())
}
