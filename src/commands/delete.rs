//! Task deletion command.
//!
//! Deletion is a two-step flow: the task is marked for deletion, then the
//! user confirms. Declining leaves the task untouched.

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
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: Option<i64>,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut manager = TaskManager::new()?;

    let id = match args.id {
        Some(id) => id,
        None => match select_task(&manager)? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    let title = match manager.find(id) {
        Some(task) => {
            View::task(task)?;
            task.title.clone()
        }
        None => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    manager.request_delete(id);
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(title).to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        manager.cancel_delete();
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match manager.confirm_delete() {
        Ok(MutationOutcome::Applied(task)) => {
            msg_success!(Message::TaskDeleted(task.title));
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
        .with_prompt(Message::SelectTaskToDelete.to_string())
        .items(&labels)
        .interact()?;
    Ok(Some(tasks[selection].id))
}
