pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod manage;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod toggle;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally filtered by a search term")]
    List(list::ListArgs),
    #[command(about = "Edit a task's title and status")]
    Edit(edit::EditArgs),
    #[command(about = "Toggle a task between pending and complete")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Manage tasks interactively")]
    Manage,
    #[cfg(debug_assertions)]
    #[command(about = "Database migration management (debug builds)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Manage => manage::cmd(),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
