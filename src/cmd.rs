//! Command implementations for the CLI interface.
//!
//! This module contains the command handlers for each subcommand. Every
//! mutating handler saves the store back to disk on success; `list` and
//! `stats` are read-only.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use std::path::Path;

use crate::store::TodoStore;
use crate::task::Task;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new todo.
    Add {
        /// Todo text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1.., value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Add a sub-todo under an existing todo.
    Sub {
        /// ID of the parent todo.
        parent_id: u32,
        /// Sub-todo text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1.., value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Mark a todo done, archiving it and removing it with all its sub-todos.
    Done {
        /// ID of the todo to complete.
        id: u32,
    },

    /// Delete a todo and all its sub-todos without archiving.
    #[command(visible_alias = "rm")]
    Delete {
        /// ID of the todo to delete.
        id: u32,
    },

    /// List all todos as an indented tree.
    #[command(visible_alias = "ls")]
    List,

    /// Show the completion total and recent completion history.
    Stats,

    /// Reassign dense sequential IDs in depth-first order.
    Renumber,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Add a new root todo.
pub fn cmd_add(store: &mut TodoStore, path: &Path, text: Vec<String>) {
    let text = text.join(" ");
    let id = match store.add_item(text.clone(), None) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    save_or_exit(store, path);
    println!("Added todo [{}]: {}", id, text);
}

/// Add a sub-todo under an existing parent.
pub fn cmd_sub(store: &mut TodoStore, path: &Path, parent_id: u32, text: Vec<String>) {
    let text = text.join(" ");
    let id = match store.add_item(text.clone(), Some(parent_id)) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    save_or_exit(store, path);
    println!("Added sub-todo [{}] under [{}]: {}", id, parent_id, text);
}

/// Complete a todo, archiving it and cascading removal to its subtree.
pub fn cmd_done(store: &mut TodoStore, path: &Path, id: u32) {
    let (text, subtask_count) = match store.complete_item(id) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    save_or_exit(store, path);
    if subtask_count > 0 {
        println!(
            "Completed todo [{}]: {} ({} direct subtask(s) archived with it)",
            id, text, subtask_count
        );
    } else {
        println!("Completed todo [{}]: {}", id, text);
    }
}

/// Delete a todo and its whole subtree.
pub fn cmd_delete(store: &mut TodoStore, path: &Path, id: u32) {
    if !store.delete_item(id) {
        eprintln!("Error: todo with ID {} not found", id);
        std::process::exit(1);
    }
    save_or_exit(store, path);
    println!("Deleted todo [{}] and all its sub-todos", id);
}

/// Print the todo forest as an indented tree.
pub fn cmd_list(store: &TodoStore) {
    let root_items = store.get_root_items();
    if root_items.is_empty() {
        println!("No todos found. Use 'todo add <text>' to add a new todo.");
        return;
    }
    for item in root_items {
        print_item(store, item, 0);
    }
}

fn print_item(store: &TodoStore, item: &Task, indent_level: usize) {
    let indent = "  ".repeat(indent_level);
    println!("{}[{}] {}", indent, item.id, item.text);
    for sub_item in store.get_children(item.id) {
        print_item(store, sub_item, indent_level + 1);
    }
}

/// Print the completion total and the ten most recent completions.
pub fn cmd_stats(store: &TodoStore) {
    println!("Completed todos: {}", store.completed_count);
    let recent = store.recent_completions(10);
    if recent.is_empty() {
        return;
    }
    println!();
    println!("Recent completions:");
    for rec in recent {
        if rec.had_subtasks {
            println!(
                "  [{}] {} ({}, {} subtask(s))",
                rec.id, rec.text, rec.completed_at, rec.subtask_count
            );
        } else {
            println!("  [{}] {} ({})", rec.id, rec.text, rec.completed_at);
        }
    }
}

/// Renumber all todos depth-first from 1.
pub fn cmd_renumber(store: &mut TodoStore, path: &Path) {
    store.renumber_items();
    save_or_exit(store, path);
    println!("Renumbered {} todo(s).", store.items.len());
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

fn save_or_exit(store: &TodoStore, path: &Path) {
    if let Err(e) = store.save(path) {
        eprintln!("Failed to save todos: {e}");
        std::process::exit(1);
    }
}
