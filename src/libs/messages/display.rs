//! Display implementation for taskpad application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent and messages with parameters are formatted type-safely.
//! The message macros feed every variant through this implementation.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created successfully", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated successfully", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted successfully", title),
            Message::TaskStatusChanged(title, status) => format!("Task '{}' marked as {}", title, status),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskTitleEmpty => "Task title cannot be empty.".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks yet. Create your first task to get started.".to_string(),
            Message::NoMatchingTasks(term) => format!("No tasks match '{}'. Try adjusting your search.", term),

            // === PROMPT MESSAGES ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptSearchTerm => "Search".to_string(),
            Message::SelectAction => "What would you like to do?".to_string(),
            Message::SelectTaskToEdit => "Select task to edit".to_string(),
            Message::SelectTaskToToggle => "Select task to toggle".to_string(),
            Message::SelectTaskToDelete => "Select task to delete".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::OperationCancelled => "Operation cancelled.".to_string(),
            Message::SearchApplied(term) => format!("Showing tasks matching '{}'", term),
            Message::SearchCleared => "Search cleared.".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageFault(error) => format!("Storage operation failed: {}", error),
            Message::DatabasePathEmpty(setting) => format!("Database path is set but empty ({})", setting),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted.".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptDatabasePath => "Database file path".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Database version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration!".to_string(),
            Message::DatabaseUpToDate => "Database is up to date.".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NothingToRollback => "Nothing to roll back.".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from version {} to {}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to version {}", version),
        };
        write!(f, "{}", text)
    }
}
