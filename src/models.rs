//! Domain records that mirror the SQLite schema. Rows are mapped into these
//! structs at the data access boundary so the rest of the crate never deals
//! with positional column tuples.

use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
/// A title held by the library. `code` is the primary key and never changes
/// after the book is added.
pub struct Book {
    pub code: String,
    pub name: String,
    pub author: String,
    /// Purchase price. Stored as a SQLite REAL, always non-negative.
    pub price: f64,
    pub publisher: String,
    /// Copies on the shelf. Issuing does not touch this number.
    pub quantity: i64,
    pub purchased_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A registered borrower, keyed by an immutable member code.
pub struct Member {
    pub code: String,
    pub name: String,
    pub joined_on: NaiveDate,
    pub address: String,
    pub mobile: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lifecycle of an issue record. `Returned` is terminal.
pub enum IssueState {
    Active,
    Returned(NaiveDate),
}

impl IssueState {
    pub fn from_return_date(returned_on: Option<NaiveDate>) -> Self {
        match returned_on {
            Some(date) => IssueState::Returned(date),
            None => IssueState::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, IssueState::Active)
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueState::Active => write!(f, "ACTIVE"),
            IssueState::Returned(_) => write!(f, "RETURNED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One lending of a book to a member. The surrogate `id` exists so a return
/// can close exactly one row even when the same pair has several open issues.
pub struct Issue {
    pub id: i64,
    pub book_code: String,
    pub member_code: String,
    pub issued_on: NaiveDate,
    pub returned_on: Option<NaiveDate>,
}

impl Issue {
    pub fn state(&self) -> IssueState {
        IssueState::from_return_date(self.returned_on)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Counts shown on the dashboard cards. Never persisted; recomputed on every
/// read.
pub struct DashboardStats {
    pub total_books: i64,
    pub total_members: i64,
    pub active_issues: i64,
    pub returned_today: i64,
}

/// Raw book fields exactly as typed into a form, minus the code. The services
/// trim and parse these before anything is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub name: String,
    pub author: String,
    pub price: String,
    pub publisher: String,
    pub quantity: String,
    pub purchase_date: String,
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            name: book.name.clone(),
            author: book.author.clone(),
            price: book.price.to_string(),
            publisher: book.publisher.clone(),
            quantity: book.quantity.to_string(),
            purchase_date: book.purchased_on.to_string(),
        }
    }
}

/// Raw member fields as typed into a form, minus the code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub membership_date: String,
    pub address: String,
    pub mobile: String,
}

impl From<&Member> for MemberDraft {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            membership_date: member.joined_on.to_string(),
            address: member.address.clone(),
            mobile: member.mobile.clone(),
        }
    }
}
