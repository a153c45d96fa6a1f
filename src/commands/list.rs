//! Task listing command.
//!
//! Renders the task table, newest first. The optional search term filters
//! in memory against titles, case-insensitively, the same way the
//! interactive session does.

use crate::{
    libs::{manager::TaskManager, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only tasks whose title contains this term
    #[arg(short, long)]
    search: Option<String>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let mut manager = TaskManager::new()?;

    if let Some(term) = &args.search {
        manager.set_search(term);
    }

    if manager.tasks().is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let filtered = manager.filtered();
    if filtered.is_empty() {
        msg_info!(Message::NoMatchingTasks(manager.search().to_string()));
        return Ok(());
    }

    if !manager.search().is_empty() {
        msg_info!(Message::SearchApplied(manager.search().to_string()));
    }
    msg_print!(Message::TasksHeader, true);
    View::tasks(&filtered)?;
    Ok(())
}
