//! Task creation command.
//!
//! Adds a single task from the command line, prompting for the title when
//! it is not supplied as an argument. Whitespace-only titles are rejected
//! before storage is touched.

use crate::{
    libs::{
        manager::{MutationOutcome, TaskManager},
        messages::Message,
        task::TaskStatus,
        view::View,
    },
    msg_error, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: Option<String>,
    /// Initial status (defaults to pending)
    #[arg(short, long, value_enum)]
    status: Option<TaskStatus>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut manager = TaskManager::new()?;

    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    match manager.add(&title, args.status) {
        Ok(MutationOutcome::Applied(task)) => {
            msg_success!(Message::TaskCreated(task.title));
            msg_print!(Message::TasksHeader, true);
            View::tasks(manager.tasks())?;
        }
        Ok(_) => msg_warning!(Message::TaskTitleEmpty),
        Err(e) => msg_error!(Message::StorageFault(e.to_string())),
    }

    Ok(())
}
