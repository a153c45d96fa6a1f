//! Interactive task management session.
//!
//! Runs a menu loop over a single [`TaskManager`]: the task list is
//! re-rendered after every action, a search filter narrows what is shown,
//! and mutations go through the manager so the list always reflects
//! storage. Storage faults are reported and the session keeps running;
//! only prompt failures end it.

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
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

pub fn cmd() -> Result<()> {
    let mut manager = TaskManager::new()?;

    loop {
        render(&manager)?;

        let options = vec![
            "Add task",
            "Edit task",
            "Toggle status",
            "Delete task",
            "Search",
            "Clear search",
            "Quit",
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&options)
            .interact()?;

        match selection {
            0 => add_task(&mut manager)?,
            1 => edit_task(&mut manager)?,
            2 => toggle_task(&mut manager)?,
            3 => delete_task(&mut manager)?,
            4 => search_tasks(&mut manager)?,
            5 => {
                manager.clear_search();
                msg_info!(Message::SearchCleared);
            }
            _ => break,
        }
    }

    Ok(())
}

fn render(manager: &TaskManager) -> Result<()> {
    if manager.tasks().is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    if !manager.search().is_empty() {
        msg_info!(Message::SearchApplied(manager.search().to_string()));
    }

    let tasks = manager.filtered();
    if tasks.is_empty() {
        msg_info!(Message::NoMatchingTasks(manager.search().to_string()));
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)?;
    Ok(())
}

fn add_task(manager: &mut TaskManager) -> Result<()> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .allow_empty(true)
        .interact_text()?;

    match manager.add(&title, None) {
        Ok(MutationOutcome::Applied(task)) => msg_success!(Message::TaskCreated(task.title)),
        Ok(_) => msg_warning!(Message::TaskTitleEmpty),
        Err(e) => msg_error!(Message::StorageFault(e.to_string())),
    }
    Ok(())
}

fn edit_task(manager: &mut TaskManager) -> Result<()> {
    let id = match pick_task(manager, Message::SelectTaskToEdit)? {
        Some(id) => id,
        None => return Ok(()),
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
        Ok(MutationOutcome::Applied(task)) => msg_success!(Message::TaskUpdated(task.title)),
        Ok(MutationOutcome::NotFound) => msg_error!(Message::TaskNotFoundWithId(id)),
        Ok(MutationOutcome::Rejected) => msg_warning!(Message::TaskTitleEmpty),
        Err(e) => msg_error!(Message::StorageFault(e.to_string())),
    }
    Ok(())
}

fn toggle_task(manager: &mut TaskManager) -> Result<()> {
    let id = match pick_task(manager, Message::SelectTaskToToggle)? {
        Some(id) => id,
        None => return Ok(()),
    };

    match manager.toggle(id) {
        Ok(MutationOutcome::Applied(task)) => {
            msg_success!(Message::TaskStatusChanged(task.title.clone(), task.status.to_string()))
        }
        Ok(MutationOutcome::NotFound) => msg_error!(Message::TaskNotFoundWithId(id)),
        Ok(MutationOutcome::Rejected) => {}
        Err(e) => msg_error!(Message::StorageFault(e.to_string())),
    }
    Ok(())
}

fn delete_task(manager: &mut TaskManager) -> Result<()> {
    let id = match pick_task(manager, Message::SelectTaskToDelete)? {
        Some(id) => id,
        None => return Ok(()),
    };

    let title = match manager.find(id) {
        Some(task) => task.title.clone(),
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
        Ok(MutationOutcome::Applied(task)) => msg_success!(Message::TaskDeleted(task.title)),
        Ok(MutationOutcome::NotFound) => msg_error!(Message::TaskNotFoundWithId(id)),
        Ok(MutationOutcome::Rejected) => {}
        Err(e) => msg_error!(Message::StorageFault(e.to_string())),
    }
    Ok(())
}

fn search_tasks(manager: &mut TaskManager) -> Result<()> {
    let term: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSearchTerm.to_string())
        .allow_empty(true)
        .interact_text()?;

    if term.is_empty() {
        manager.clear_search();
        msg_info!(Message::SearchCleared);
    } else {
        msg_info!(Message::SearchApplied(term.clone()));
        manager.set_search(&term);
    }
    Ok(())
}

fn pick_task(manager: &TaskManager, prompt: Message) -> Result<Option<i64>> {
    let tasks = manager.filtered();
    if tasks.is_empty() {
        if manager.search().is_empty() {
            msg_info!(Message::NoTasksFound);
        } else {
            msg_info!(Message::NoMatchingTasks(manager.search().to_string()));
        }
        return Ok(None);
    }

    let labels: Vec<String> = tasks.iter().map(|task| format!("{}: {} [{}]", task.id, task.title, task.status)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
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
