use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::error::{Result, ResultExt};
use crate::models::{DashboardStats, Issue};

use super::issues::map_issue;

/// Recompute the dashboard counters. Each figure is its own COUNT so the
/// numbers stay independent of one another.
pub fn fetch_dashboard_stats(conn: &Connection, today: NaiveDate) -> Result<DashboardStats> {
    let total_books: i64 = conn
        .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        .db_context("failed to count books")?;

    let total_members: i64 = conn
        .query_row("SELECT COUNT(*) FROM members", [], |row| row.get(0))
        .db_context("failed to count members")?;

    let active_issues: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM issues WHERE returned_on IS NULL",
            [],
            |row| row.get(0),
        )
        .db_context("failed to count active issues")?;

    let returned_today: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM issues WHERE returned_on = ?1",
            params![today],
            |row| row.get(0),
        )
        .db_context("failed to count returns")?;

    Ok(DashboardStats {
        total_books,
        total_members,
        active_issues,
        returned_today,
    })
}

/// Latest issues by issue date, newest first.
pub fn fetch_recent_issues(conn: &Connection, limit: usize) -> Result<Vec<Issue>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let mut stmt = conn
        .prepare(
            "SELECT id, book_code, member_code, issued_on, returned_on
             FROM issues
             ORDER BY issued_on DESC, id DESC
             LIMIT ?1",
        )
        .db_context("failed to prepare recent issues query")?;

    let issues = stmt
        .query_map([limit], map_issue)
        .db_context("failed to load recent issues")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("failed to collect recent issues")?;

    Ok(issues)
}
