//! Task storage operations.
//!
//! Every operation is a single round trip against the `tasks` table. A
//! lookup or mutation that matches no row is a valid empty result
//! (`Ok(None)`), never an error; only real storage faults surface as
//! errors. Listing returns tasks newest first.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskPatch, TaskStatus};
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    title TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_TASK: &str = "INSERT INTO tasks (title, status, created_at) VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const UPDATE_TASK_TITLE: &str = "UPDATE tasks SET title = ?2 WHERE id = ?1";
const UPDATE_TASK_STATUS: &str = "UPDATE tasks SET status = ?2 WHERE id = ?1";
const UPDATE_TASK_TITLE_AND_STATUS: &str = "UPDATE tasks SET title = ?2, status = ?3 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
// The id tie-break keeps newest-first exact when two rows share a
// second-granularity timestamp.
const SELECT_ALL_TASKS: &str = "SELECT id, title, status, created_at FROM tasks ORDER BY created_at DESC, id DESC";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, status, created_at FROM tasks WHERE id = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // Ensure the table exists (migration v1 creates it, but we ensure here too)
        db.conn.execute(SCHEMA_TASKS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Get all tasks, newest first
    pub fn list(&mut self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TASKS)?;
        let task_iter = stmt.query_map([], |row| {
            Ok(Task {
                id: row.get(0)?,
                title: row.get(1)?,
                status: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Insert a new task and return the stored row. The database assigns
    /// the id and creation timestamp; a missing status defaults to pending.
    pub fn create(&mut self, title: &str, status: Option<TaskStatus>) -> Result<Task> {
        self.conn.execute(INSERT_TASK, params![title, status.unwrap_or_default()])?;
        let id = self.conn.last_insert_rowid();
        self.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(id)))
    }

    /// Get a task by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    status: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Apply the fields present in the patch and return the updated row.
    /// Absent fields are left untouched; an empty patch reads the row
    /// back without issuing an update.
    pub fn update(&mut self, id: i64, patch: &TaskPatch) -> Result<Option<Task>> {
        let affected = match (&patch.title, patch.status) {
            (Some(title), Some(status)) => self.conn.execute(UPDATE_TASK_TITLE_AND_STATUS, params![id, title, status])?,
            (Some(title), None) => self.conn.execute(UPDATE_TASK_TITLE, params![id, title])?,
            (None, Some(status)) => self.conn.execute(UPDATE_TASK_STATUS, params![id, status])?,
            (None, None) => return self.get_by_id(id),
        };

        if affected == 0 {
            return Ok(None);
        }
        self.get_by_id(id)
    }

    /// Set only the status of a task and return the updated row.
    pub fn update_status(&mut self, id: i64, status: TaskStatus) -> Result<Option<Task>> {
        let affected = self.conn.execute(UPDATE_TASK_STATUS, params![id, status])?;
        if affected == 0 {
            return Ok(None);
        }
        self.get_by_id(id)
    }

    /// Delete a task and return the deleted row, or `None` when no row
    /// matched.
    pub fn delete(&mut self, id: i64) -> Result<Option<Task>> {
        let task = self.get_by_id(id)?;
        if task.is_some() {
            self.conn.execute(DELETE_TASK, params![id])?;
        }
        Ok(task)
    }
}
