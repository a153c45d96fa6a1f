//! Task manager view state.
//!
//! [`TaskManager`] sits between the commands and task storage. It owns the
//! in-memory task list, which is an authoritative snapshot of storage: the
//! cache is never patched piecemeal, the only way it changes is a full
//! [`TaskManager::refresh`]. Every mutation that reaches storage is
//! followed by a refresh rather than a local edit, so what the user sees
//! always matches a complete read.
//!
//! Besides the cache it holds the transient view state: the free-text
//! search filter (applied in memory against titles, storage is never
//! queried for searches) and the pending delete confirmation. The pending
//! delete flag is cleared on every outcome of the confirmation, including
//! storage faults, so a failed delete can never leave the view stuck.
//!
//! Mutations report a [`MutationOutcome`] instead of panicking or hiding
//! results: commands decide how to present rejected input, missing rows,
//! and applied changes.

use crate::db::tasks::Tasks;
use crate::libs::task::{Task, TaskPatch, TaskStatus};
use anyhow::Result;

/// Result of a task mutation, surfaced to the command layer.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The row was written; carries the stored row as returned by storage.
    Applied(Task),
    /// No row matched the id. A valid outcome, not a fault.
    NotFound,
    /// Client-side validation failed; storage was never contacted.
    Rejected,
}

pub struct TaskManager {
    tasks: Tasks,
    cache: Vec<Task>,
    search: String,
    pending_delete: Option<i64>,
}

impl TaskManager {
    /// Opens storage and performs the initial load.
    pub fn new() -> Result<Self> {
        let mut manager = Self {
            tasks: Tasks::new()?,
            cache: Vec::new(),
            search: String::new(),
            pending_delete: None,
        };
        manager.refresh()?;
        Ok(manager)
    }

    /// Re-reads the complete task list from storage. This is the only
    /// place the cache is written.
    pub fn refresh(&mut self) -> Result<()> {
        self.cache = self.tasks.list()?;
        Ok(())
    }

    /// The cached task list, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.cache
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Cached tasks whose title contains the search term,
    /// case-insensitively. An empty term matches everything.
    pub fn filtered(&self) -> Vec<Task> {
        let needle = self.search.to_lowercase();
        self.cache.iter().filter(|task| task.title.to_lowercase().contains(&needle)).cloned().collect()
    }

    /// Looks a task up in the cache.
    pub fn find(&self, id: i64) -> Option<&Task> {
        self.cache.iter().find(|task| task.id == id)
    }

    /// Creates a task. A title that is empty after trimming is rejected
    /// without contacting storage; a missing status defaults to pending.
    pub fn add(&mut self, title: &str, status: Option<TaskStatus>) -> Result<MutationOutcome> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(MutationOutcome::Rejected);
        }

        let task = self.tasks.create(title, status)?;
        self.refresh()?;
        Ok(MutationOutcome::Applied(task))
    }

    /// Updates title and status together. An empty trimmed title is
    /// rejected without contacting storage. The cache is refreshed even
    /// when no row matched.
    pub fn edit(&mut self, id: i64, title: &str, status: TaskStatus) -> Result<MutationOutcome> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(MutationOutcome::Rejected);
        }

        let updated = self.tasks.update(id, &TaskPatch::new().title(title).status(status))?;
        self.refresh()?;
        Ok(match updated {
            Some(task) => MutationOutcome::Applied(task),
            None => MutationOutcome::NotFound,
        })
    }

    /// Flips a task between pending and complete, submitting only the
    /// status field. The complement is computed from the cached row; an
    /// id absent from the cache is a `NotFound` without a storage call.
    pub fn toggle(&mut self, id: i64) -> Result<MutationOutcome> {
        let current = match self.find(id) {
            Some(task) => task.status,
            None => return Ok(MutationOutcome::NotFound),
        };

        let updated = self.tasks.update_status(id, current.toggled())?;
        self.refresh()?;
        Ok(match updated {
            Some(task) => MutationOutcome::Applied(task),
            None => MutationOutcome::NotFound,
        })
    }

    /// Marks a task as awaiting delete confirmation.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Abandons the pending delete without touching storage.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the task awaiting confirmation. The pending flag is
    /// cleared on every path, including storage faults, before the error
    /// propagates. With no pending delete this is a `Rejected`.
    pub fn confirm_delete(&mut self) -> Result<MutationOutcome> {
        let id = match self.pending_delete {
            Some(id) => id,
            None => return Ok(MutationOutcome::Rejected),
        };

        let result = self.tasks.delete(id);
        self.pending_delete = None;
        let deleted = result?;
        self.refresh()?;
        Ok(match deleted {
            Some(task) => MutationOutcome::Applied(task),
            None => MutationOutcome::NotFound,
        })
    }
}
