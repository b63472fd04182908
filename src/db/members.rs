use rusqlite::{params, Connection, Row};

use crate::error::{map_unique_constraint, Result, ResultExt};
use crate::models::Member;

fn map_member(row: &Row<'_>) -> rusqlite::Result<Member> {
    Ok(Member {
        code: row.get(0)?,
        name: row.get(1)?,
        joined_on: row.get(2)?,
        address: row.get(3)?,
        mobile: row.get(4)?,
    })
}

pub fn fetch_members(conn: &Connection) -> Result<Vec<Member>> {
    let mut stmt = conn
        .prepare("SELECT code, name, joined_on, address, mobile FROM members ORDER BY code")
        .db_context("failed to prepare member query")?;

    let members = stmt
        .query_map([], map_member)
        .db_context("failed to load members")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("failed to collect members")?;

    Ok(members)
}

pub fn find_members(conn: &Connection, code: &str) -> Result<Vec<Member>> {
    let mut stmt = conn
        .prepare("SELECT code, name, joined_on, address, mobile FROM members WHERE code = ?1")
        .db_context("failed to prepare member search")?;

    let members = stmt
        .query_map([code], map_member)
        .db_context("failed to search members")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("failed to collect members")?;

    Ok(members)
}

pub fn create_member(conn: &Connection, member: &Member) -> Result<()> {
    conn.execute(
        "INSERT INTO members (code, name, joined_on, address, mobile) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            member.code,
            member.name,
            member.joined_on,
            member.address,
            member.mobile
        ],
    )
    .map_err(|err| map_unique_constraint(err, "Member", &member.code))?;
    Ok(())
}

/// Rewrite the non-key columns. Zero rows means the code was not found.
pub fn update_member(conn: &Connection, member: &Member) -> Result<usize> {
    conn.execute(
        "UPDATE members SET name = ?1, joined_on = ?2, address = ?3, mobile = ?4 WHERE code = ?5",
        params![
            member.name,
            member.joined_on,
            member.address,
            member.mobile,
            member.code
        ],
    )
    .db_context("failed to update member")
}

/// Remove a member. Their issue history stays in the `issues` table.
pub fn delete_member(conn: &Connection, code: &str) -> Result<usize> {
    conn.execute("DELETE FROM members WHERE code = ?1", params![code])
        .db_context("failed to delete member")
}
