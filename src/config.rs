//! Startup configuration. Built once in `main` and handed to the database
//! layer; nothing here is global.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".library-desk";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "library.sqlite";
/// Log file written next to the database; the TUI owns stdout.
const LOG_FILE_NAME: &str = "library-desk.log";
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5_000);

const DB_PATH_VAR: &str = "LIBRARY_DB_PATH";
const LOG_PATH_VAR: &str = "LIBRARY_LOG_PATH";
const BUSY_TIMEOUT_VAR: &str = "LIBRARY_BUSY_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    pub log_path: PathBuf,
    /// How long SQLite waits on a locked database file before giving up.
    pub busy_timeout: Duration,
}

impl Config {
    /// Resolve the configuration from the environment, falling back to the
    /// per-user data directory.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Configuration for an explicit database file, with the log placed
    /// beside it.
    pub fn at(database_path: impl Into<PathBuf>) -> Self {
        let database_path = database_path.into();
        let log_path = sibling(&database_path, LOG_FILE_NAME);
        Self {
            database_path,
            log_path,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match non_empty(lookup(DB_PATH_VAR)) {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        let mut config = Self::at(database_path);

        if let Some(path) = non_empty(lookup(LOG_PATH_VAR)) {
            config.log_path = PathBuf::from(path);
        }

        if let Some(raw) = non_empty(lookup(BUSY_TIMEOUT_VAR)) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{BUSY_TIMEOUT_VAR} must be a number of milliseconds"))?;
            config.busy_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn sibling(path: &Path, file_name: &str) -> PathBuf {
    match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn default_db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
