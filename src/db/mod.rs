//! Persistence module split across logical submodules. Every function runs a
//! single parameterized statement against a borrowed connection.

mod books;
mod connection;
mod issues;
mod members;
mod reports;

pub use books::{create_book, delete_book, fetch_books, find_books, update_book};
pub use connection::Database;
pub use issues::{close_issue, create_issue, fetch_issues_for_member};
pub use members::{create_member, delete_member, fetch_members, find_members, update_member};
pub use reports::{fetch_dashboard_stats, fetch_recent_issues};
