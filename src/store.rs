//! Store operations for the todo forest and completion archive.
//!
//! This module provides the `TodoStore` struct holding all active todos in a
//! flat id-keyed map, plus the append-only archive of completed todos. All
//! mutation goes through the methods here; each public operation either fully
//! succeeds or leaves the store unchanged.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::task::{timestamp_now, CompletedRecord, Task};

/// In-memory store for active todos and the completion archive.
///
/// `items` is keyed by todo id; a `BTreeMap` keeps iteration (and therefore
/// serialization) in ascending id order. `next_id` only ever grows, except
/// when `renumber_items` compacts the id space. `completed_count` and
/// `completed_history` default on load so data files written before the
/// archive existed still open cleanly.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoStore {
    pub items: BTreeMap<u32, Task>,
    pub next_id: u32,
    #[serde(default)]
    pub completed_count: u64,
    #[serde(default)]
    pub completed_history: Vec<CompletedRecord>,
}

impl Default for TodoStore {
    fn default() -> Self {
        TodoStore {
            items: BTreeMap::new(),
            next_id: 1,
            completed_count: 0,
            completed_history: Vec::new(),
        }
    }
}

impl TodoStore {
    /// Load the store from a JSON file, starting fresh if the file is
    /// missing, unreadable, or malformed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return TodoStore::default();
        }
        let mut buf = String::new();
        match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Error parsing todo file, starting fresh: {e}");
                    TodoStore::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading todo file, starting fresh: {e}");
                TodoStore::default()
            }
        }
    }

    /// Save the store to a JSON file using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        // Atomic-ish write via temp + rename.
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(self).expect("store serializes");
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Add a todo, optionally as a subtask of an existing one.
    ///
    /// Fails with `InvalidParent` (leaving the store untouched) if
    /// `parent_id` does not name a live todo. Returns the new id.
    pub fn add_item(&mut self, text: String, parent_id: Option<u32>) -> Result<u32, StoreError> {
        if let Some(pid) = parent_id {
            if !self.items.contains_key(&pid) {
                return Err(StoreError::InvalidParent(pid));
            }
        }
        let id = self.next_id;
        let item = Task {
            id,
            text,
            parent_id,
            created_at: timestamp_now(),
        };
        self.items.insert(id, item);
        self.next_id += 1;
        Ok(id)
    }

    /// Mark a todo done: archive it, then remove it and its whole subtree.
    ///
    /// The archive record captures only the direct-child count, but the
    /// cascade removes every descendant, grandchildren included. Returns the
    /// completed todo's text and its direct-child count.
    pub fn complete_item(&mut self, id: u32) -> Result<(String, usize), StoreError> {
        let Some(item) = self.items.get(&id) else {
            return Err(StoreError::NotFound(id));
        };
        let text = item.text.clone();
        let subtask_count = self.get_children(id).len();
        self.completed_history.push(CompletedRecord {
            id,
            text: text.clone(),
            completed_at: timestamp_now(),
            had_subtasks: subtask_count > 0,
            subtask_count: subtask_count as u32,
        });
        self.completed_count += 1;
        self.delete_item(id);
        Ok((text, subtask_count))
    }

    /// Delete a todo and all of its descendants, children first.
    ///
    /// Returns false (and changes nothing) if the id is not present. No
    /// archive record is written.
    pub fn delete_item(&mut self, id: u32) -> bool {
        if !self.items.contains_key(&id) {
            return false;
        }
        let sub_ids: Vec<u32> = self
            .items
            .values()
            .filter(|item| item.parent_id == Some(id))
            .map(|item| item.id)
            .collect();
        for sub_id in sub_ids {
            self.delete_item(sub_id);
        }
        self.items.remove(&id).is_some()
    }

    /// All root todos (no parent), ascending by id.
    pub fn get_root_items(&self) -> Vec<&Task> {
        // BTreeMap iteration is already id-ordered.
        self.items
            .values()
            .filter(|item| item.parent_id.is_none())
            .collect()
    }

    /// Direct children of a todo, ascending by id.
    pub fn get_children(&self, parent_id: u32) -> Vec<&Task> {
        self.items
            .values()
            .filter(|item| item.parent_id == Some(parent_id))
            .collect()
    }

    /// Reassign dense sequential ids to all live todos, starting at 1.
    ///
    /// Walks the forest depth-first in pre-order (roots by current id, then
    /// each todo's children by current id), preserving structure, text, and
    /// creation timestamps. `next_id` becomes one past the highest new id.
    /// The completion archive is left alone, so archived ids go stale.
    pub fn renumber_items(&mut self) {
        let mut order: Vec<u32> = Vec::with_capacity(self.items.len());
        for root in self.get_root_items() {
            self.collect_preorder(root.id, &mut order);
        }

        let mapping: BTreeMap<u32, u32> = order
            .iter()
            .enumerate()
            .map(|(i, &old)| (old, i as u32 + 1))
            .collect();

        let old_items = std::mem::take(&mut self.items);
        for (old_id, mut item) in old_items {
            let new_id = mapping[&old_id];
            item.id = new_id;
            item.parent_id = item.parent_id.map(|p| mapping[&p]);
            self.items.insert(new_id, item);
        }
        self.next_id = order.len() as u32 + 1;
    }

    fn collect_preorder(&self, id: u32, out: &mut Vec<u32>) {
        out.push(id);
        for child in self.get_children(id) {
            self.collect_preorder(child.id, out);
        }
    }

    /// The most recent completions, newest first.
    pub fn recent_completions(&self, limit: usize) -> Vec<&CompletedRecord> {
        self.completed_history.iter().rev().take(limit).collect()
    }
}
