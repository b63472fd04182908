use std::cmp::min;

use ratatui::layout::Constraint;

use crate::models::{Book, DashboardStats, Issue, Member};

/// Top-level tabs, in the order they appear in the tab bar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Tab {
    Dashboard,
    Books,
    Members,
    Issues,
}

impl Tab {
    pub(crate) const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Books, Tab::Members, Tab::Issues];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "1 Dashboard",
            Tab::Books => "2 Books",
            Tab::Members => "3 Members",
            Tab::Issues => "4 Issue / Return",
        }
    }

    pub(crate) fn index(self) -> usize {
        Tab::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    pub(crate) fn from_digit(ch: char) -> Option<Tab> {
        let idx = ch.to_digit(10)? as usize;
        idx.checked_sub(1).and_then(|i| Tab::ALL.get(i).copied())
    }

    pub(crate) fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub(crate) fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// How a record type lays itself out as a row in the results table.
pub(crate) trait TableRow {
    fn headers() -> &'static [&'static str];
    fn widths() -> Vec<Constraint>;
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Book {
    fn headers() -> &'static [&'static str] {
        &["Code", "Name", "Author", "Price", "Publisher", "Qty", "Date"]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Length(8),
            Constraint::Min(14),
            Constraint::Min(12),
            Constraint::Length(9),
            Constraint::Min(10),
            Constraint::Length(5),
            Constraint::Length(10),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.author.clone(),
            self.price.to_string(),
            self.publisher.clone(),
            self.quantity.to_string(),
            self.purchased_on.to_string(),
        ]
    }
}

impl TableRow for Member {
    fn headers() -> &'static [&'static str] {
        &["Code", "Name", "Membership Date", "Address", "Mobile"]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Length(8),
            Constraint::Min(14),
            Constraint::Length(15),
            Constraint::Min(16),
            Constraint::Length(14),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.joined_on.to_string(),
            self.address.clone(),
            self.mobile.clone(),
        ]
    }
}

impl TableRow for Issue {
    fn headers() -> &'static [&'static str] {
        &["Book Code", "Member Code", "Issue Date", "Return Date", "State"]
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Min(10),
            Constraint::Min(12),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(9),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.book_code.clone(),
            self.member_code.clone(),
            self.issued_on.to_string(),
            self.returned_on
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.state().to_string(),
        ]
    }
}

/// Rows currently shown in a tab's results table plus the selection.
pub(crate) struct Listing<T> {
    pub(crate) rows: Vec<T>,
    pub(crate) selected: usize,
    /// Describes where the rows came from ("All books", "Search: B1").
    pub(crate) caption: String,
}

impl<T> Listing<T> {
    pub(crate) fn new(caption: &str) -> Self {
        Self {
            rows: Vec::new(),
            selected: 0,
            caption: caption.to_string(),
        }
    }

    pub(crate) fn set_rows(&mut self, rows: Vec<T>, caption: impl Into<String>) {
        self.rows = rows;
        self.caption = caption.into();
        self.ensure_in_bounds();
    }

    pub(crate) fn current(&self) -> Option<&T> {
        self.rows.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.rows.is_empty() {
            self.selected = 0;
            return;
        }
        let len = self.rows.len() as isize;
        let next = (self.selected as isize + offset).clamp(0, len - 1);
        self.selected = next as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// Move the selection onto the first row matching `pred`, if any.
    pub(crate) fn focus_where<P>(&mut self, pred: P)
    where
        P: Fn(&T) -> bool,
    {
        if let Some(idx) = self.rows.iter().position(pred) {
            self.selected = idx;
        }
    }

    fn ensure_in_bounds(&mut self) {
        self.selected = min(self.selected, self.rows.len().saturating_sub(1));
    }
}

/// Cached figures for the dashboard tab; replaced wholesale on refresh.
#[derive(Default)]
pub(crate) struct DashboardScreen {
    pub(crate) stats: DashboardStats,
    pub(crate) recent: Vec<Issue>,
}
