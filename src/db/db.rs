//! Database connection management.
//!
//! `Db::new()` resolves the database location, opens the connection, and
//! brings the schema up to date before handing it out. The location is
//! resolved in order:
//!
//! 1. The `TASKPAD_DB` environment variable (loaded from `.env` at startup);
//! 2. `database.path` from the configuration file;
//! 3. `taskpad.db` inside the platform application data directory.
//!
//! A value that is set but empty is a configuration error and aborts the
//! command before any task operation runs.

use crate::db::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use rusqlite::Connection;
use std::env;
use std::path::PathBuf;

pub const DB_FILE_NAME: &str = "taskpad.db";

/// Environment variable overriding the database path.
pub const DB_ENV_VAR: &str = "TASKPAD_DB";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database and applies any pending migrations.
    pub fn new() -> Result<Db> {
        let mut conn = Connection::open(Self::resolve_path()?)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Opens the database without touching the schema. Used by the
    /// migrations command to inspect state as-is.
    pub fn new_without_migrations() -> Result<Connection> {
        Ok(Connection::open(Self::resolve_path()?)?)
    }

    /// Resolves the database file path from environment, configuration,
    /// or the platform default, in that order.
    pub fn resolve_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_ENV_VAR) {
            if path.trim().is_empty() {
                msg_bail_anyhow!(Message::DatabasePathEmpty(DB_ENV_VAR.to_string()));
            }
            return Ok(PathBuf::from(path));
        }

        if let Some(database) = Config::read()?.database {
            if database.path.trim().is_empty() {
                msg_bail_anyhow!(Message::DatabasePathEmpty("database.path".to_string()));
            }
            return Ok(PathBuf::from(database.path));
        }

        DataStorage::new().get_path(DB_FILE_NAME)
    }
}
