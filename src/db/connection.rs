use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::debug;

use crate::config::Config;
use crate::error::{self, ResultExt};

/// Handle to the on-disk store. It holds only the location and connection
/// settings; every operation opens its own connection through [`connect`]
/// and drops it before returning.
///
/// [`connect`]: Database::connect
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    busy_timeout: Duration,
}

impl Database {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.database_path.clone(),
            busy_timeout: config.busy_timeout,
        }
    }

    /// Open a fresh connection for a single statement. The connection closes
    /// when the returned value is dropped, on success and error paths alike.
    pub fn connect(&self) -> error::Result<Connection> {
        debug!(path = %self.path.display(), "opening connection");
        let conn = Connection::open(&self.path).db_context("failed to open SQLite database")?;
        conn.busy_timeout(self.busy_timeout)
            .db_context("failed to set busy timeout")?;
        Ok(conn)
    }

    /// Ensure the database file exists and the tables are in place. Safe to
    /// run on every start.
    pub fn ensure_schema(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("failed to create data directory")?;
            }
        }

        let conn = self.connect().context("failed to open SQLite database")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS books (
                code TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                author TEXT NOT NULL,
                price REAL NOT NULL CHECK (price >= 0),
                publisher TEXT NOT NULL,
                quantity INTEGER NOT NULL CHECK (quantity >= 0),
                purchased_on TEXT NOT NULL
            )",
            [],
        )
        .context("failed to create books table")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS members (
                code TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                joined_on TEXT NOT NULL,
                address TEXT NOT NULL,
                mobile TEXT NOT NULL
            )",
            [],
        )
        .context("failed to create members table")?;

        // No foreign keys: issue history outlives deleted books and members,
        // and a book may be issued to a code that was never registered.
        conn.execute(
            "CREATE TABLE IF NOT EXISTS issues (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                book_code TEXT NOT NULL,
                member_code TEXT NOT NULL,
                issued_on TEXT NOT NULL,
                returned_on TEXT
            )",
            [],
        )
        .context("failed to create issues table")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS issues_member_idx ON issues (member_code)",
            [],
        )
        .context("failed to create issues member index")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS issues_issued_on_idx ON issues (issued_on)",
            [],
        )
        .context("failed to create issues date index")?;

        Ok(())
    }
}
