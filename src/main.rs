//! # Todo CLI
//!
//! A simple command-line todo manager with nested subtasks, a completion
//! archive, and local JSON file storage.
//!
//! ## Key Features
//!
//! - **Nested Subtasks**: todos form a forest; completing or deleting a todo
//!   removes its whole subtree.
//! - **Completion Archive**: `done` moves a todo into an append-only history
//!   with a subtask snapshot; `stats` shows the total and recent entries.
//! - **Renumbering**: `renumber` compacts IDs depth-first after deletions.
//! - **Local File Storage**: a single pretty-printed JSON file, backward
//!   compatible with data files written before the archive existed.
//!
//! ## Quick Start
//!
//! ```bash
//! todo add "Buy groceries"
//! todo sub 1 "Buy milk"
//! todo list
//! todo done 1
//! todo stats
//! ```
//!
//! Data is stored in `~/.todo_cli.json` by default; pass `--db <path>` to use
//! a different file.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::*;
use store::TodoStore;

fn main() {
    let cli = Cli::parse();

    // Completions need no data file.
    if let Commands::Completions { shell } = &cli.command {
        cmd_completions(*shell);
        return;
    }

    let db_path = cli.db.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".todo_cli.json")
    });

    let mut store = TodoStore::load(&db_path);

    match cli.command {
        Commands::Completions { .. } => unreachable!("completions handled above"),
        Commands::Add { text } => cmd_add(&mut store, &db_path, text),
        Commands::Sub { parent_id, text } => cmd_sub(&mut store, &db_path, parent_id, text),
        Commands::Done { id } => cmd_done(&mut store, &db_path, id),
        Commands::Delete { id } => cmd_delete(&mut store, &db_path, id),
        Commands::List => cmd_list(&store),
        Commands::Stats => cmd_stats(&store),
        Commands::Renumber => cmd_renumber(&mut store, &db_path),
    }
}
