//! List command implementation

use anyhow::{Context, Result};
use serde::Serialize;
use sf_core::SnippetSession;
use sf_sql::{extract_dependencies, SqlParser};

use crate::cli::{GlobalArgs, LsArgs, LsOutput};
use crate::commands::common::{load_config, load_session, print_table};

/// Execute the ls command
pub async fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let session = load_session(&config)?;
    let parser = SqlParser::from_dialect(config.dialect);
    let snippets = collect_snippets(&session, &parser);

    match args.output {
        LsOutput::Table => {
            if snippets.is_empty() {
                println!("No snippets stored.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = snippets
                .iter()
                .map(|s| {
                    let mut deps = s.depends_on.clone();
                    deps.extend(s.external_deps.iter().map(|d| format!("{} (external)", d)));
                    let deps = if deps.is_empty() {
                        "-".to_string()
                    } else {
                        deps.join(", ")
                    };
                    let status = if s.unverified { "not executed" } else { "ok" };
                    vec![s.name.clone(), status.to_string(), deps]
                })
                .collect();
            print_table(&["NAME", "STATUS", "DEPENDS_ON"], &rows);
            println!("\n{} snippets", snippets.len());
        }
        LsOutput::Json => {
            let json =
                serde_json::to_string_pretty(&snippets).context("Failed to serialize snippets")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Snippet information for display
#[derive(Debug, Serialize)]
struct SnippetInfo {
    name: String,
    depends_on: Vec<String>,
    /// Tables read directly, not provided by any snippet
    external_deps: Vec<String>,
    unverified: bool,
    sql: String,
}

fn collect_snippets(session: &SnippetSession, parser: &SqlParser) -> Vec<SnippetInfo> {
    let store = session.store();
    store
        .snippets()
        .map(|snippet| {
            let depends_on: Vec<String> = store
                .direct_dependencies(snippet)
                .into_iter()
                .map(String::from)
                .collect();
            let external_deps = match parser.parse(snippet.body()) {
                Ok(statements) => extract_dependencies(&statements)
                    .into_iter()
                    .filter(|name| !store.contains(name))
                    .collect(),
                Err(e) => {
                    log::debug!("Skipping table scan for '{}': {}", snippet.name(), e);
                    Vec::new()
                }
            };
            SnippetInfo {
                name: snippet.name().to_string(),
                depends_on,
                external_deps,
                unverified: snippet.is_unverified(),
                sql: snippet.body().to_string(),
            }
        })
        .collect()
}
