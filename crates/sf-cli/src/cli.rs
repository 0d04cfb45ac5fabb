//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Snipflow - compose stored SQL snippets into CTE queries
#[derive(Parser, Debug)]
#[command(name = "sf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stored snippets
    Ls(LsArgs),

    /// Print the full composed query for a snippet
    Show(ShowArgs),

    /// Expand a query with the snippets it references
    Compile(CompileArgs),

    /// Compose and execute a snippet or query
    Run(RunArgs),

    /// Show what a snippet requires and what requires it
    Deps(DepsArgs),

    /// Delete a snippet from the session and list what remains
    Delete(DeleteArgs),
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: LsOutput,
}

/// List output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsOutput {
    /// Table format
    Table,
    /// JSON output
    Json,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Snippet name
    pub name: String,
}

/// Arguments for the compile command
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Final query text
    pub sql: String,

    /// Snippets to include explicitly (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub with: Vec<String>,

    /// Parse the composed query with the project dialect
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the run command
#[derive(Args, Debug)]
#[command(group(clap::ArgGroup::new("target").required(true).args(["name", "sql"])))]
pub struct RunArgs {
    /// Stored snippet to run
    pub name: Option<String>,

    /// Ad-hoc query to run instead of a stored snippet
    #[arg(long)]
    pub sql: Option<String>,

    /// Snippets to include explicitly with --sql (comma-separated)
    #[arg(short, long, value_delimiter = ',', requires = "sql")]
    pub with: Vec<String>,
}

/// Arguments for the deps command
#[derive(Args, Debug)]
pub struct DepsArgs {
    /// Snippet name
    pub name: String,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Snippet name
    pub name: String,

    /// Delete only this snippet, leaving dependents with a dangling reference
    #[arg(long, conflicts_with = "force_all")]
    pub force: bool,

    /// Delete this snippet and every snippet that depends on it
    #[arg(long)]
    pub force_all: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
