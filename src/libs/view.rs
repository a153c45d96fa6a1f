use super::formatter::{format_created, format_status};
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "CREATED"]);
        for task in tasks {
            table.add_row(row![task.id, task.title, format_status(&task.status), format_created(&task.created_at)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task) -> Result<()> {
        Self::tasks(std::slice::from_ref(task))
    }
}
