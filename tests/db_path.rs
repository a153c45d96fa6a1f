#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskpad::db::db::{Db, DB_ENV_VAR};
    use taskpad::libs::config::{Config, DatabaseConfig};

    // Path resolution reads process-global state (environment and the
    // config file), so the precedence chain is exercised in one test.
    #[test]
    fn test_database_path_resolution_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());
        std::env::set_var("LOCALAPPDATA", temp_dir.path());
        std::env::remove_var(DB_ENV_VAR);

        // 1. No overrides: the platform data directory is used
        let path = Db::resolve_path().unwrap();
        assert!(path.starts_with(temp_dir.path()));
        assert!(path.ends_with("taskpad.db"));

        // 2. A configured path wins over the default
        Config {
            database: Some(DatabaseConfig { path: "/custom/tasks.db".to_string() }),
        }
        .save()
        .unwrap();
        assert_eq!(Db::resolve_path().unwrap(), PathBuf::from("/custom/tasks.db"));

        // 3. A configured path that is empty is an error, not a fallback
        Config {
            database: Some(DatabaseConfig { path: "".to_string() }),
        }
        .save()
        .unwrap();
        let err = Db::resolve_path().unwrap_err();
        assert!(err.to_string().contains("database.path"));

        // 4. The environment variable wins over everything
        std::env::set_var(DB_ENV_VAR, "/env/override.db");
        assert_eq!(Db::resolve_path().unwrap(), PathBuf::from("/env/override.db"));

        // 5. Present but blank is an error as well
        std::env::set_var(DB_ENV_VAR, "   ");
        let err = Db::resolve_path().unwrap_err();
        assert!(err.to_string().contains(DB_ENV_VAR));

        std::env::remove_var(DB_ENV_VAR);
    }
}
