//! Core library surface for the Library Desk terminal application.
//!
//! The entity services in [`library`] are usable without the terminal front
//! end, which is how the integration tests drive them.
pub mod config;
pub mod db;
pub mod error;
pub mod library;
pub mod logging;
pub mod models;
pub mod ui;
pub mod validate;

pub use config::Config;
pub use db::Database;
pub use error::LibraryError;
pub use library::{Library, DEFAULT_RECENT_LIMIT};

/// The domain types other layers manipulate.
pub use models::{Book, BookDraft, DashboardStats, Issue, IssueState, Member, MemberDraft};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
