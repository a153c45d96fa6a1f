//! Core library modules for the taskpad application.
//!
//! Serves as the main entry point for all taskpad library components:
//! domain types, the task manager view state, configuration, messaging,
//! and console rendering.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpad::libs::manager::TaskManager;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut manager = TaskManager::new()?;
//! manager.add("Write release notes", None)?;
//! manager.set_search("release");
//! let matches = manager.filtered();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod manager;
pub mod messages;
pub mod task;
pub mod view;
