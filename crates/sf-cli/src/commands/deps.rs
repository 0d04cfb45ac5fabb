//! Deps command implementation

use anyhow::{Context, Result};
use sf_core::suggest::quoted_list;
use sf_core::{Resolver, SnippetGraph};

use crate::cli::{DepsArgs, GlobalArgs};
use crate::commands::common::{load_config, load_session};

/// Execute the deps command
pub async fn execute(args: &DepsArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let session = load_session(&config)?;
    let store = session.store();

    let order = Resolver::new(store)
        .resolve_snippet(&args.name)
        .with_context(|| format!("Failed to resolve snippet '{}'", args.name))?;

    let graph = SnippetGraph::from_store(store);
    let direct = graph.dependents(&args.name);
    let all = graph.descendants(&args.name);

    println!("{}", args.name);
    println!("  requires:    {}", or_none(&order));
    println!("  used by:     {}", or_none(&direct));
    println!("  deletes too: {}", or_none(&all));
    Ok(())
}

fn or_none<S: AsRef<str>>(names: &[S]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        quoted_list(names, "and")
    }
}
