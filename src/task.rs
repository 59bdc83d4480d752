//! Task data structures and timestamp formatting.
//!
//! This module defines the `Task` struct for a single todo entry and the
//! `CompletedRecord` struct for archived completions, along with the shared
//! timestamp format used by both.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Timestamp format used for `created_at` and `completed_at` fields.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single todo entry, active until completed or deleted.
///
/// Todos form a forest: an entry with no `parent_id` is a root item, and an
/// entry whose `parent_id` references another todo is a subtask. The parent
/// link is fixed at creation and only ever rewritten by renumbering.
///
/// Older data files carry a per-task `completed` flag; the current schema
/// drops it (completion moves the todo into the archive instead), and the
/// stale field is ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub parent_id: Option<u32>,
    pub created_at: String,
}

/// An archived completion, appended when a todo is marked done.
///
/// `subtask_count` counts only the direct children the todo had at
/// completion time, even though the whole subtree is removed with it.
/// Records are immutable and never pruned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedRecord {
    pub id: u32,
    pub text: String,
    pub completed_at: String,
    pub had_subtasks: bool,
    pub subtask_count: u32,
}

/// Current UTC time in the shared timestamp format.
pub fn timestamp_now() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
