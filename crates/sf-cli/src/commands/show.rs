//! Show command implementation

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, ShowArgs};
use crate::commands::common::{load_config, load_session};

/// Execute the show command
pub async fn execute(args: &ShowArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let session = load_session(&config)?;

    let sql = session
        .render_snippet(&args.name)
        .with_context(|| format!("Failed to render snippet '{}'", args.name))?;
    println!("{}", sql);
    Ok(())
}
