//! Configuration management for the taskpad application.
//!
//! Settings are stored as JSON in the platform application data directory
//! and loaded with sensible defaults when no file exists, so the
//! application runs without any setup. An interactive wizard
//! ([`Config::init`]) guides users through the optional modules.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\taskpad\config.json`
//! - **macOS**: `~/Library/Application Support/taskpad/config.json`
//! - **Linux**: `~/.local/share/taskpad/config.json`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpad::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! if let Some(database) = &config.database {
//!     println!("Database path: {}", database.path);
//! }
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Database location settings.
///
/// When present, `path` points at the SQLite file holding the tasks. An
/// empty value is rejected at startup rather than silently falling back
/// to the default location.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,
}

impl DatabaseConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "database".to_string(),
            name: "Database".to_string(),
        }
    }

    /// Prompts for the database settings, pre-filling current values.
    pub fn init(config: &Option<DatabaseConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or_else(|| DatabaseConfig {
            path: String::new(),
        });
        msg_print!(Message::ConfigModuleDatabase);
        Ok(Self {
            path: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDatabasePath.to_string())
                .default(default.path)
                .interact_text()?,
        })
    }
}

/// Root configuration object.
///
/// Every module is optional; unconfigured modules are omitted from the
/// JSON output and the application falls back to its defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Database location settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Reads the configuration file, returning defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, creating the data
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the available modules, prompts for each selected one with
    /// current values as defaults, and returns the updated configuration
    /// for saving.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![DatabaseConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "database" => config.database = Some(DatabaseConfig::init(&config.database)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
