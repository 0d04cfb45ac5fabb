//! Delete command implementation
//!
//! The project file is never rewritten; the delete runs against a session
//! loaded from it and reports what would remain.

use anyhow::{Context, Result};
use sf_core::suggest::quoted_list;
use sf_core::DeleteMode;

use crate::cli::{DeleteArgs, GlobalArgs};
use crate::commands::common::{load_config, load_session};

/// Execute the delete command
pub async fn execute(args: &DeleteArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let mut session = load_session(&config)?;

    let mode = if args.force_all {
        DeleteMode::ForceAll
    } else if args.force {
        DeleteMode::Force
    } else {
        DeleteMode::Strict
    };

    let report = session
        .delete_with(&args.name, mode)
        .with_context(|| format!("Failed to delete snippet '{}'", args.name))?;
    println!("{}", report);

    let remaining = session.list_names();
    if remaining.is_empty() {
        println!("No stored snippets remain.");
    } else {
        println!("Stored snippets: {}", quoted_list(&remaining, "and"));
    }
    Ok(())
}
