use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed todo manager CLI.
/// Storage defaults to ~/.todo_cli.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "todo", version, about = "Command-line todo manager with nested subtasks")]
pub struct Cli {
    /// Path to the JSON data file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
