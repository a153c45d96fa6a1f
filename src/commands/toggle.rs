//! Task status toggle command.
//!
//! Flips a task between pending and complete. When no id is given the
//! task is picked interactively from the current list.

use crate::{
    libs::{
        manager::{MutationOutcome, TaskManager},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// ID of the task to toggle
    id: Option<i64>,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let mut manager = TaskManager::new()?;

    let id = match args.id {
        Some(id) => id,
        None => match select_task(&manager)? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    match manager.toggle(id) {
        Ok(MutationOutcome::Applied(task)) => {
            msg_success!(Message::TaskStatusChanged(task.title.clone(), task.status.to_string()));
            msg_print!(Message::TasksHeader, true);
            View::tasks(manager.tasks())?;
        }
        Ok(MutationOutcome::NotFound) => msg_error!(Message::TaskNotFoundWithId(id)),
        Ok(MutationOutcome::Rejected) => {}
        Err(e) => msg_error!(Message::StorageFault(e.to_string())),
    }

    Ok(())
}

fn select_task(manager: &TaskManager) -> Result<Option<i64>> {
    let tasks = manager.filtered();
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(None);
    }

    let labels: Vec<String> = tasks.iter().map(|task| format!("{}: {} [{}]", task.id, task.title, task.status)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTaskToToggle.to_string())
        .items(&labels)
        .interact()?;
    Ok(Some(tasks[selection].id))
}
