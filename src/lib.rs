//! # Taskpad
//!
//! A command-line task manager with persistent storage and an interactive
//! management mode.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, toggle, and delete tasks
//! - **Status Tracking**: Tasks move between pending and complete
//! - **Search**: Case-insensitive title filtering across all views
//! - **Interactive Mode**: A menu-driven session over the full task list
//! - **Versioned Storage**: SQLite database with automatic migrations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpad::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
