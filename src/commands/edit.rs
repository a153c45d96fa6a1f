//! Task editing command.
//!
//! Edits a task's title and status together. When no id is given the task
//! is picked interactively from the current list; prompts are pre-filled
//! with the task's current values.

use crate::{
    libs::{
        manager::{MutationOutcome, TaskManager},
        messages::Message,
        task::TaskStatus,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    id: Option<i64>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut manager = TaskManager::new()?;

    let id = match args.id {
        Some(id) => id,
        None => match select_task(&manager)? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    let (current_title, current_status) = match manager.find(id) {
        Some(task) => (task.title.clone(), task.status),
        None => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(current_title)
        .allow_empty(true)
        .interact_text()?;
    let status = select_status(current_status)?;

    match manager.edit(id, &title, status) {
        Ok(MutationOutcome::Applied(task)) => {
            msg_success!(Message::TaskUpdated(task.title));
            msg_print!(Message::TasksHeader, true);
            View::tasks(manager.tasks())?;
        }
        Ok(MutationOutcome::NotFound) => msg_error!(Message::TaskNotFoundWithId(id)),
        Ok(MutationOutcome::Rejected) => msg_warning!(Message::TaskTitleEmpty),
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
        .with_prompt(Message::SelectTaskToEdit.to_string())
        .items(&labels)
        .interact()?;
    Ok(Some(tasks[selection].id))
}

fn select_status(current: TaskStatus) -> Result<TaskStatus> {
    let options = [TaskStatus::Pending, TaskStatus::Complete];
    let labels: Vec<String> = options.iter().map(|status| status.to_string()).collect();
    let default_index = options.iter().position(|status| *status == current).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&labels)
        .default(default_index)
        .interact()?;
    Ok(options[selection])
}
