//! Entity services: the operations the front-end calls. Each one validates
//! its raw string input, opens a connection, runs a single statement and lets
//! the connection drop before returning.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::db::{self, Database};
use crate::error::Result;
use crate::models::{Book, BookDraft, DashboardStats, Issue, Member, MemberDraft};
use crate::validate;

/// How many rows the dashboard's "Recent Issues" table shows.
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// Service facade over the three tables.
#[derive(Debug, Clone)]
pub struct Library {
    db: Database,
}

/// Log the outcome of an operation at the level its error kind deserves.
fn traced<T>(operation: &str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        if err.is_validation() {
            debug!(operation, error = %err, "rejected input");
        } else {
            warn!(operation, error = %err, "database error");
        }
    }
    result
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl Library {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    // ---- books ----------------------------------------------------------

    pub fn add_book(&self, code: &str, draft: &BookDraft) -> Result<()> {
        traced("add_book", self.try_add_book(code, draft))
    }

    fn try_add_book(&self, code: &str, draft: &BookDraft) -> Result<()> {
        let book = parse_book(code, draft)?;
        let conn = self.db.connect()?;
        db::create_book(&conn, &book)?;
        info!(code = %book.code, name = %book.name, "book added");
        Ok(())
    }

    /// Delete a book by code. Returns how many rows went away; zero is a
    /// normal outcome for an unknown code.
    pub fn delete_book(&self, code: &str) -> Result<usize> {
        traced("delete_book", self.try_delete_book(code))
    }

    fn try_delete_book(&self, code: &str) -> Result<usize> {
        let code = validate::required("Book code", code)?;
        let conn = self.db.connect()?;
        let deleted = db::delete_book(&conn, &code)?;
        info!(%code, deleted, "book delete");
        Ok(deleted)
    }

    pub fn search_book(&self, code: &str) -> Result<Vec<Book>> {
        traced("search_book", self.try_search_book(code))
    }

    fn try_search_book(&self, code: &str) -> Result<Vec<Book>> {
        let code = validate::required("Book code", code)?;
        let conn = self.db.connect()?;
        db::find_books(&conn, &code)
    }

    /// Replace every field except the code. Returns the updated row count.
    pub fn update_book(&self, code: &str, draft: &BookDraft) -> Result<usize> {
        traced("update_book", self.try_update_book(code, draft))
    }

    fn try_update_book(&self, code: &str, draft: &BookDraft) -> Result<usize> {
        let book = parse_book(code, draft)?;
        let conn = self.db.connect()?;
        let updated = db::update_book(&conn, &book)?;
        info!(code = %book.code, updated, "book update");
        Ok(updated)
    }

    pub fn list_books(&self) -> Result<Vec<Book>> {
        traced("list_books", self.db.connect().and_then(|conn| db::fetch_books(&conn)))
    }

    // ---- members --------------------------------------------------------

    pub fn add_member(&self, code: &str, draft: &MemberDraft) -> Result<()> {
        traced("add_member", self.try_add_member(code, draft))
    }

    fn try_add_member(&self, code: &str, draft: &MemberDraft) -> Result<()> {
        let member = parse_member(code, draft)?;
        let conn = self.db.connect()?;
        db::create_member(&conn, &member)?;
        info!(code = %member.code, name = %member.name, "member added");
        Ok(())
    }

    pub fn delete_member(&self, code: &str) -> Result<usize> {
        traced("delete_member", self.try_delete_member(code))
    }

    fn try_delete_member(&self, code: &str) -> Result<usize> {
        let code = validate::required("Member code", code)?;
        let conn = self.db.connect()?;
        let deleted = db::delete_member(&conn, &code)?;
        info!(%code, deleted, "member delete");
        Ok(deleted)
    }

    pub fn search_member(&self, code: &str) -> Result<Vec<Member>> {
        traced("search_member", self.try_search_member(code))
    }

    fn try_search_member(&self, code: &str) -> Result<Vec<Member>> {
        let code = validate::required("Member code", code)?;
        let conn = self.db.connect()?;
        db::find_members(&conn, &code)
    }

    pub fn update_member(&self, code: &str, draft: &MemberDraft) -> Result<usize> {
        traced("update_member", self.try_update_member(code, draft))
    }

    fn try_update_member(&self, code: &str, draft: &MemberDraft) -> Result<usize> {
        let member = parse_member(code, draft)?;
        let conn = self.db.connect()?;
        let updated = db::update_member(&conn, &member)?;
        info!(code = %member.code, updated, "member update");
        Ok(updated)
    }

    pub fn list_members(&self) -> Result<Vec<Member>> {
        traced(
            "list_members",
            self.db.connect().and_then(|conn| db::fetch_members(&conn)),
        )
    }

    // ---- issues ---------------------------------------------------------

    /// Lend a book. Neither the book nor the member has to exist, and the
    /// book's quantity is left alone.
    pub fn issue_book(&self, book_code: &str, member_code: &str, issue_date: &str) -> Result<()> {
        traced(
            "issue_book",
            self.try_issue_book(book_code, member_code, issue_date),
        )
    }

    fn try_issue_book(&self, book_code: &str, member_code: &str, issue_date: &str) -> Result<()> {
        let book_code = validate::required("Book code", book_code)?;
        let member_code = validate::required("Member code", member_code)?;
        let issued_on = validate::date("Issue date", issue_date)?;
        let conn = self.db.connect()?;
        let id = db::create_issue(&conn, &book_code, &member_code, issued_on)?;
        info!(id, %book_code, %member_code, %issued_on, "book issued");
        Ok(())
    }

    /// Close the oldest open issue for the pair with today's date. Returns 0
    /// when nothing was open, which callers report as "no matching active
    /// issue".
    pub fn return_book(&self, book_code: &str, member_code: &str) -> Result<usize> {
        self.return_book_on(book_code, member_code, today())
    }

    /// [`return_book`](Self::return_book) with an explicit return date.
    pub fn return_book_on(
        &self,
        book_code: &str,
        member_code: &str,
        returned_on: NaiveDate,
    ) -> Result<usize> {
        traced(
            "return_book",
            self.try_return_book(book_code, member_code, returned_on),
        )
    }

    fn try_return_book(
        &self,
        book_code: &str,
        member_code: &str,
        returned_on: NaiveDate,
    ) -> Result<usize> {
        let book_code = validate::required("Book code", book_code)?;
        let member_code = validate::required("Member code", member_code)?;
        let conn = self.db.connect()?;
        let closed = db::close_issue(&conn, &book_code, &member_code, returned_on)?;
        info!(%book_code, %member_code, %returned_on, closed, "book return");
        Ok(closed)
    }

    pub fn search_issues_by_member(&self, member_code: &str) -> Result<Vec<Issue>> {
        traced(
            "search_issues_by_member",
            self.try_search_issues_by_member(member_code),
        )
    }

    fn try_search_issues_by_member(&self, member_code: &str) -> Result<Vec<Issue>> {
        let member_code = validate::required("Member code", member_code)?;
        let conn = self.db.connect()?;
        db::fetch_issues_for_member(&conn, &member_code)
    }

    // ---- reporting ------------------------------------------------------

    pub fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.dashboard_stats_on(today())
    }

    /// Dashboard counters with "returned today" evaluated against `today`.
    pub fn dashboard_stats_on(&self, today: NaiveDate) -> Result<DashboardStats> {
        traced(
            "dashboard_stats",
            self.db
                .connect()
                .and_then(|conn| db::fetch_dashboard_stats(&conn, today)),
        )
    }

    pub fn recent_issues(&self, limit: usize) -> Result<Vec<Issue>> {
        traced(
            "recent_issues",
            self.db
                .connect()
                .and_then(|conn| db::fetch_recent_issues(&conn, limit)),
        )
    }
}

fn parse_book(code: &str, draft: &BookDraft) -> Result<Book> {
    Ok(Book {
        code: validate::required("Book code", code)?,
        name: validate::required("Book name", &draft.name)?,
        author: validate::required("Author", &draft.author)?,
        price: validate::price("Price", &draft.price)?,
        publisher: validate::required("Publisher", &draft.publisher)?,
        quantity: validate::quantity("Quantity", &draft.quantity)?,
        purchased_on: validate::date("Purchase date", &draft.purchase_date)?,
    })
}

fn parse_member(code: &str, draft: &MemberDraft) -> Result<Member> {
    Ok(Member {
        code: validate::required("Member code", code)?,
        name: validate::required("Member name", &draft.name)?,
        joined_on: validate::date("Membership date", &draft.membership_date)?,
        address: validate::required("Address", &draft.address)?,
        mobile: validate::required("Mobile number", &draft.mobile)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    /// Points at a directory that cannot exist, so any database access fails.
    /// Validation errors must still surface first.
    fn unreachable_library() -> Library {
        let config = Config::at("/nonexistent-library-desk-dir/sub/library.sqlite");
        Library::new(Database::new(&config))
    }

    #[test]
    fn empty_fields_fail_before_touching_the_database() {
        let library = unreachable_library();
        let draft = BookDraft {
            name: "Dune".into(),
            author: "".into(),
            price: "499".into(),
            publisher: "Ace".into(),
            quantity: "3".into(),
            purchase_date: "2024-01-01".into(),
        };

        let err = library.add_book("B1", &draft).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Author is required.");

        assert!(library.delete_book("  ").unwrap_err().is_validation());
        assert!(library.search_member("").unwrap_err().is_validation());
        assert!(library.return_book("B1", "").unwrap_err().is_validation());
        assert!(library
            .issue_book("B1", "M1", "")
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn unreachable_database_is_a_persistence_error() {
        let library = unreachable_library();
        let err = library.search_book("B1").unwrap_err();
        assert!(!err.is_validation());
        assert!(err.to_string().starts_with("failed to open SQLite database"));
    }
}
