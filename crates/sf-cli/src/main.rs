//! Snipflow CLI - compose stored SQL snippets into CTE queries and run them

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, GlobalArgs};
use commands::common::ExitCode;
use commands::{compile, delete, deps, ls, run, show};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli.global);

    if let Err(err) = dispatch(&cli).await {
        if let Some(ExitCode(code)) = err.downcast_ref::<ExitCode>() {
            std::process::exit(*code);
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        cli::Commands::Ls(args) => ls::execute(args, &cli.global).await,
        cli::Commands::Show(args) => show::execute(args, &cli.global).await,
        cli::Commands::Compile(args) => compile::execute(args, &cli.global).await,
        cli::Commands::Run(args) => run::execute(args, &cli.global).await,
        cli::Commands::Deps(args) => deps::execute(args, &cli.global).await,
        cli::Commands::Delete(args) => delete::execute(args, &cli.global).await,
    }
}

/// `RUST_LOG` wins over `--verbose`
fn init_logging(global: &GlobalArgs) {
    let level = if global.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
