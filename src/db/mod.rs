//! Database layer for the taskpad application.
//!
//! A small persistence layer built on SQLite: connection management with
//! layered path resolution, a versioned migration system, and the task
//! storage operations themselves.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpad::db::tasks::Tasks;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! let task = tasks.create("Review PR #123", None)?;
//! let all = tasks.list()?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that resolves the database location, manages
/// the SQLite connection, and applies migrations on open.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes, tracks migration history, and provides
/// development-time migration management commands.
pub mod migrations;

/// Task storage operations.
///
/// The six storage operations behind the task manager: list, create,
/// read-by-id, patch update, status update, and delete.
pub mod tasks;
