use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use crate::error::{Result, ResultExt};
use crate::models::Issue;

pub(super) fn map_issue(row: &Row<'_>) -> rusqlite::Result<Issue> {
    Ok(Issue {
        id: row.get(0)?,
        book_code: row.get(1)?,
        member_code: row.get(2)?,
        issued_on: row.get(3)?,
        returned_on: row.get(4)?,
    })
}

/// Record a new lending in the active state and return its surrogate id.
pub fn create_issue(
    conn: &Connection,
    book_code: &str,
    member_code: &str,
    issued_on: NaiveDate,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO issues (book_code, member_code, issued_on) VALUES (?1, ?2, ?3)",
        params![book_code, member_code, issued_on],
    )
    .db_context("failed to insert issue")?;
    Ok(conn.last_insert_rowid())
}

/// Close one open issue for the pair, stamping `returned_on`. When several
/// are open the oldest goes first, so at most one row is ever affected.
pub fn close_issue(
    conn: &Connection,
    book_code: &str,
    member_code: &str,
    returned_on: NaiveDate,
) -> Result<usize> {
    conn.execute(
        "UPDATE issues SET returned_on = ?1
         WHERE id = (
             SELECT id FROM issues
             WHERE book_code = ?2 AND member_code = ?3 AND returned_on IS NULL
             ORDER BY issued_on, id
             LIMIT 1
         )",
        params![returned_on, book_code, member_code],
    )
    .db_context("failed to record return")
}

/// Every issue for a member, open and closed, oldest first.
pub fn fetch_issues_for_member(conn: &Connection, member_code: &str) -> Result<Vec<Issue>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, book_code, member_code, issued_on, returned_on
             FROM issues
             WHERE member_code = ?1
             ORDER BY issued_on, id",
        )
        .db_context("failed to prepare member issues query")?;

    let issues = stmt
        .query_map([member_code], map_issue)
        .db_context("failed to search issues")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("failed to collect issues")?;

    Ok(issues)
}
