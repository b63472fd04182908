//! Error type shared by the entity services and the persistence layer.
//!
//! The front-end only needs to tell two situations apart: the librarian typed
//! something incomplete (fix the form and retry) or the database refused the
//! statement (show the message and stop). "Nothing matched" is a normal result
//! and never reaches this type.

use rusqlite::{Error as SqlError, ErrorCode};

pub type Result<T, E = LibraryError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// Required input was missing or malformed. Raised before any database
    /// access happens.
    #[error("{0}")]
    Validation(String),

    /// Anything the SQLite layer reported: open failures, constraint
    /// violations, a busy database file.
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: SqlError,
    },
}

impl LibraryError {
    pub fn validation(message: impl Into<String>) -> Self {
        LibraryError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, LibraryError::Validation(_))
    }

    /// True when SQLite rejected the statement because of a constraint, e.g.
    /// a duplicate primary key.
    pub fn is_conflict(&self) -> bool {
        match self {
            LibraryError::Persistence { source, .. } => matches!(
                source.sqlite_error_code(),
                Some(ErrorCode::ConstraintViolation)
            ),
            LibraryError::Validation(_) => false,
        }
    }
}

/// Attach an operation label to raw SQLite errors, mirroring `anyhow`'s
/// `context` but keeping the typed error.
pub(crate) trait ResultExt<T> {
    fn db_context(self, context: &str) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, SqlError> {
    fn db_context(self, context: &str) -> Result<T> {
        self.map_err(|source| LibraryError::Persistence {
            message: format!("{context}: {source}"),
            source,
        })
    }
}

/// Rephrase a primary-key violation on insert into something a librarian can
/// act on. Other errors keep the generic context.
pub(crate) fn map_unique_constraint(err: SqlError, entity: &str, code: &str) -> LibraryError {
    if matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::ConstraintViolation)
    ) {
        LibraryError::Persistence {
            message: format!("{entity} code {code} already exists."),
            source: err,
        }
    } else {
        LibraryError::Persistence {
            message: format!("failed to insert {}: {err}", entity.to_lowercase()),
            source: err,
        }
    }
}
