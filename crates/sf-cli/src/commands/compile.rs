//! Compile command implementation

use anyhow::{Context, Result};
use sf_core::DriverFailure;
use sf_sql::SqlParser;

use crate::cli::{CompileArgs, GlobalArgs};
use crate::commands::common::{load_config, load_session, report_translated};

/// Execute the compile command
pub async fn execute(args: &CompileArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let session = load_session(&config)?;

    let composed = session
        .resolve_and_compose(&args.sql, args.with.as_slice())
        .context("Failed to compose query")?;

    if args.check {
        let parser = SqlParser::from_dialect(config.dialect);
        if let Err(err) = parser.validate(&composed.sql) {
            let failure = DriverFailure::from(err).with_sql(composed.sql.clone());
            let translated =
                session.translate_composed_error(&failure, &session.known_names(), &composed);
            return Err(report_translated(&translated));
        }
        log::debug!("Composed query parses as {}", parser.dialect_name());
    }

    println!("{}", composed.sql);
    Ok(())
}
