use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Book, BookDraft, Issue, Member, MemberDraft};

/// Every modal form the app can show. The kind decides the field list and
/// which service call runs on submit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FormKind {
    AddBook,
    UpdateBook,
    DeleteBook,
    SearchBook,
    AddMember,
    UpdateMember,
    DeleteMember,
    SearchMember,
    IssueBook,
    ReturnBook,
    SearchIssues,
}

const BOOK_FIELDS: &[&str] = &[
    "Book Code",
    "Book Name",
    "Author",
    "Price",
    "Publisher",
    "Quantity",
    "Purchase Date (YYYY-MM-DD)",
];
const MEMBER_FIELDS: &[&str] = &[
    "Member Code",
    "Member Name",
    "Membership Date (YYYY-MM-DD)",
    "Address",
    "Mobile Number",
];
const ISSUE_FIELDS: &[&str] = &["Book Code", "Member Code", "Issue Date (YYYY-MM-DD)"];
const RETURN_FIELDS: &[&str] = &["Book Code", "Member Code"];
const BOOK_CODE_FIELD: &[&str] = &["Book Code"];
const MEMBER_CODE_FIELD: &[&str] = &["Member Code"];

impl FormKind {
    pub(crate) fn title(self) -> &'static str {
        match self {
            FormKind::AddBook => "Add Book",
            FormKind::UpdateBook => "Update Book",
            FormKind::DeleteBook => "Delete Book",
            FormKind::SearchBook => "Search Book",
            FormKind::AddMember => "Add Member",
            FormKind::UpdateMember => "Update Member",
            FormKind::DeleteMember => "Delete Member",
            FormKind::SearchMember => "Search Member",
            FormKind::IssueBook => "Issue Book",
            FormKind::ReturnBook => "Return Book",
            FormKind::SearchIssues => "Search Issues by Member",
        }
    }

    pub(crate) fn labels(self) -> &'static [&'static str] {
        match self {
            FormKind::AddBook | FormKind::UpdateBook => BOOK_FIELDS,
            FormKind::AddMember | FormKind::UpdateMember => MEMBER_FIELDS,
            FormKind::DeleteBook | FormKind::SearchBook => BOOK_CODE_FIELD,
            FormKind::DeleteMember | FormKind::SearchMember | FormKind::SearchIssues => {
                MEMBER_CODE_FIELD
            }
            FormKind::IssueBook => ISSUE_FIELDS,
            FormKind::ReturnBook => RETURN_FIELDS,
        }
    }
}

/// Text-entry state for one modal form.
#[derive(Clone, Debug)]
pub(crate) struct Form {
    pub(crate) kind: FormKind,
    values: Vec<String>,
    pub(crate) active: usize,
    pub(crate) error: Option<String>,
}

impl Form {
    pub(crate) fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: vec![String::new(); kind.labels().len()],
            active: 0,
            error: None,
        }
    }

    /// Seed the leading fields; extra values are ignored.
    pub(crate) fn with_values<I, S>(kind: FormKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut form = Self::new(kind);
        for (slot, value) in form.values.iter_mut().zip(values) {
            *slot = value.into();
        }
        form
    }

    pub(crate) fn from_book(kind: FormKind, book: &Book) -> Self {
        let draft = BookDraft::from(book);
        Self::with_values(
            kind,
            [
                book.code.clone(),
                draft.name,
                draft.author,
                draft.price,
                draft.publisher,
                draft.quantity,
                draft.purchase_date,
            ],
        )
    }

    pub(crate) fn from_member(kind: FormKind, member: &Member) -> Self {
        let draft = MemberDraft::from(member);
        Self::with_values(
            kind,
            [
                member.code.clone(),
                draft.name,
                draft.membership_date,
                draft.address,
                draft.mobile,
            ],
        )
    }

    pub(crate) fn from_issue(kind: FormKind, issue: &Issue) -> Self {
        Self::with_values(kind, [issue.book_code.clone(), issue.member_code.clone()])
    }

    /// Start with focus on a given field, e.g. the first editable field of an
    /// update form.
    pub(crate) fn focused(mut self, index: usize) -> Self {
        if index < self.values.len() {
            self.active = index;
        }
        self
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn value(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    pub(crate) fn next_field(&mut self) {
        self.active = (self.active + 1) % self.values.len();
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = if self.active == 0 {
            self.values.len() - 1
        } else {
            self.active - 1
        };
    }

    /// Append a character to the active field. Control characters are
    /// refused.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.values.get_mut(self.active) {
            Some(value) => {
                value.push(ch);
                true
            }
            None => false,
        }
    }

    pub(crate) fn backspace(&mut self) {
        if let Some(value) = self.values.get_mut(self.active) {
            value.pop();
        }
    }

    /// Code plus the remaining book fields, untrimmed; the service does the
    /// checking.
    pub(crate) fn book_draft(&self) -> (String, BookDraft) {
        (
            self.value(0).to_string(),
            BookDraft {
                name: self.value(1).to_string(),
                author: self.value(2).to_string(),
                price: self.value(3).to_string(),
                publisher: self.value(4).to_string(),
                quantity: self.value(5).to_string(),
                purchase_date: self.value(6).to_string(),
            },
        )
    }

    pub(crate) fn member_draft(&self) -> (String, MemberDraft) {
        (
            self.value(0).to_string(),
            MemberDraft {
                name: self.value(1).to_string(),
                membership_date: self.value(2).to_string(),
                address: self.value(3).to_string(),
                mobile: self.value(4).to_string(),
            },
        )
    }

    /// Width of the label column, so every value starts at the same x.
    pub(crate) fn label_width(&self) -> usize {
        self.kind
            .labels()
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0)
            + 2
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, index: usize) -> Line<'static> {
        let label = self.kind.labels().get(index).copied().unwrap_or("");
        let value = self.value(index);
        let is_active = self.active == index;

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!(
                "{:<width$}",
                format!("{label}:"),
                width = self.label_width()
            )),
            Span::styled(display, style),
        ])
    }

    /// Character count of the given field, for cursor placement.
    pub(crate) fn value_len(&self, index: usize) -> usize {
        self.value(index).chars().count()
    }
}

/// Which table a pending delete targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum DeleteTarget {
    Book,
    Member,
}

impl DeleteTarget {
    pub(crate) fn noun(self) -> &'static str {
        match self {
            DeleteTarget::Book => "book",
            DeleteTarget::Member => "member",
        }
    }
}

/// Y/N prompt shown before a delete runs.
#[derive(Clone, Debug)]
pub(crate) struct ConfirmDelete {
    pub(crate) target: DeleteTarget,
    pub(crate) code: String,
}
