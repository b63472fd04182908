use std::mem;

use anyhow::Result;
use chrono::Local;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap};
use ratatui::Frame;

use crate::error::LibraryError;
use crate::library::{Library, DEFAULT_RECENT_LIMIT};
use crate::models::{Book, Issue, Member};
use crate::validate;

use super::forms::{ConfirmDelete, DeleteTarget, Form, FormKind};
use super::helpers::{centered_rect, count_label, key_hints, stat_card_lines};
use super::screens::{DashboardScreen, Listing, Tab, TableRow};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the tab bar at the top of the screen.
const TAB_BAR_HEIGHT: u16 = 3;
/// Height of a dashboard stat card.
const STAT_CARD_HEIGHT: u16 = 5;

/// Fine-grained modes layered over the current tab.
enum Mode {
    Normal,
    Editing(Form),
    ConfirmDelete(ConfirmDelete),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. Everything here is view
/// state; the records themselves always come fresh from the services.
pub struct App {
    library: Library,
    tab: Tab,
    mode: Mode,
    status: Option<StatusMessage>,
    dashboard: DashboardScreen,
    books: Listing<Book>,
    members: Listing<Member>,
    issues: Listing<Issue>,
}

impl App {
    pub fn new(library: Library) -> Self {
        let mut app = Self {
            library,
            tab: Tab::Dashboard,
            mode: Mode::Normal,
            status: None,
            dashboard: DashboardScreen::default(),
            books: Listing::new("All books"),
            members: Listing::new("All members"),
            issues: Listing::new("Search issues by member with /"),
        };
        app.refresh_dashboard();
        app
    }

    /// Route a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::Editing(form) => self.handle_form_key(code, form),
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm),
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                *exit = true;
                return Mode::Normal;
            }
            KeyCode::Tab => {
                self.switch_tab(self.tab.next());
                return Mode::Normal;
            }
            KeyCode::BackTab => {
                self.switch_tab(self.tab.previous());
                return Mode::Normal;
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                if let Some(tab) = Tab::from_digit(ch) {
                    self.switch_tab(tab);
                }
                return Mode::Normal;
            }
            KeyCode::Up => {
                self.move_selection(-1);
                return Mode::Normal;
            }
            KeyCode::Down => {
                self.move_selection(1);
                return Mode::Normal;
            }
            KeyCode::Home => {
                self.select_edge(true);
                return Mode::Normal;
            }
            KeyCode::End => {
                self.select_edge(false);
                return Mode::Normal;
            }
            _ => {}
        }

        match self.tab {
            Tab::Dashboard => self.handle_dashboard_key(code),
            Tab::Books => self.handle_books_key(code),
            Tab::Members => self.handle_members_key(code),
            Tab::Issues => self.handle_issues_key(code),
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) -> Mode {
        if let KeyCode::Char('r') | KeyCode::Char('R') = code {
            self.refresh_dashboard();
            if self.status.is_none() {
                self.set_status("Dashboard refreshed.", StatusKind::Info);
            }
        }
        Mode::Normal
    }

    fn handle_books_key(&mut self, code: KeyCode) -> Mode {
        let selected = self.books.current();
        let form = match code {
            KeyCode::Char('a') | KeyCode::Char('A') => {
                let today = today_string();
                Form::with_values(FormKind::AddBook, ["", "", "", "", "", "", today.as_str()])
            }
            KeyCode::Char('u') | KeyCode::Char('U') => match selected {
                Some(book) => Form::from_book(FormKind::UpdateBook, book).focused(1),
                None => Form::new(FormKind::UpdateBook),
            },
            KeyCode::Char('d') | KeyCode::Char('D') => match selected {
                Some(book) => Form::with_values(FormKind::DeleteBook, [book.code.as_str()]),
                None => Form::new(FormKind::DeleteBook),
            },
            KeyCode::Char('/') => Form::new(FormKind::SearchBook),
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.reload_books(None);
                return Mode::Normal;
            }
            _ => return Mode::Normal,
        };
        self.clear_status();
        Mode::Editing(form)
    }

    fn handle_members_key(&mut self, code: KeyCode) -> Mode {
        let selected = self.members.current();
        let form = match code {
            KeyCode::Char('a') | KeyCode::Char('A') => {
                let today = today_string();
                Form::with_values(FormKind::AddMember, ["", "", today.as_str()])
            }
            KeyCode::Char('u') | KeyCode::Char('U') => match selected {
                Some(member) => Form::from_member(FormKind::UpdateMember, member).focused(1),
                None => Form::new(FormKind::UpdateMember),
            },
            KeyCode::Char('d') | KeyCode::Char('D') => match selected {
                Some(member) => Form::with_values(FormKind::DeleteMember, [member.code.as_str()]),
                None => Form::new(FormKind::DeleteMember),
            },
            KeyCode::Char('/') => Form::new(FormKind::SearchMember),
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.reload_members(None);
                return Mode::Normal;
            }
            _ => return Mode::Normal,
        };
        self.clear_status();
        Mode::Editing(form)
    }

    fn handle_issues_key(&mut self, code: KeyCode) -> Mode {
        let selected = self.issues.current();
        let form = match code {
            KeyCode::Char('i') | KeyCode::Char('I') => {
                let today = today_string();
                Form::with_values(FormKind::IssueBook, ["", "", today.as_str()])
            }
            KeyCode::Char('r') | KeyCode::Char('R') => match selected {
                Some(issue) if issue.state().is_active() => {
                    Form::from_issue(FormKind::ReturnBook, issue)
                }
                _ => Form::new(FormKind::ReturnBook),
            },
            KeyCode::Char('/') => match selected {
                Some(issue) => Form::with_values(FormKind::SearchIssues, [issue.member_code.as_str()]),
                None => Form::new(FormKind::SearchIssues),
            },
            _ => return Mode::Normal,
        };
        self.clear_status();
        Mode::Editing(form)
    }

    fn handle_form_key(&mut self, code: KeyCode, mut form: Form) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status(
                    format!("{} cancelled.", form.kind.title()),
                    StatusKind::Info,
                );
                Mode::Normal
            }
            KeyCode::Tab | KeyCode::Down => {
                form.next_field();
                Mode::Editing(form)
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.previous_field();
                Mode::Editing(form)
            }
            KeyCode::Backspace => {
                form.backspace();
                Mode::Editing(form)
            }
            KeyCode::Enter => match self.submit_form(&form) {
                Ok(mode) => mode,
                Err(err) => {
                    let message = err.to_string();
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                    Mode::Editing(form)
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
                Mode::Editing(form)
            }
            _ => Mode::Editing(form),
        }
    }

    /// Run the service call behind a form. Errors keep the form open; success
    /// returns the next mode (normally back to the table).
    fn submit_form(&mut self, form: &Form) -> Result<Mode, LibraryError> {
        match form.kind {
            FormKind::AddBook => {
                let (code, draft) = form.book_draft();
                self.library.add_book(&code, &draft)?;
                let code = code.trim().to_string();
                self.reload_books(Some(&code));
                self.set_status(format!("Book {code} added."), StatusKind::Info);
            }
            FormKind::UpdateBook => {
                let (code, draft) = form.book_draft();
                let updated = self.library.update_book(&code, &draft)?;
                self.show_book_search(&code)?;
                self.report_count(updated, "book", "updated");
            }
            FormKind::DeleteBook => {
                let code = validate::required("Book code", form.value(0))?;
                return Ok(Mode::ConfirmDelete(ConfirmDelete {
                    target: DeleteTarget::Book,
                    code,
                }));
            }
            FormKind::SearchBook => {
                let found = self.show_book_search(form.value(0))?;
                self.report_search(found);
            }
            FormKind::AddMember => {
                let (code, draft) = form.member_draft();
                self.library.add_member(&code, &draft)?;
                let code = code.trim().to_string();
                self.reload_members(Some(&code));
                self.set_status(format!("Member {code} added."), StatusKind::Info);
            }
            FormKind::UpdateMember => {
                let (code, draft) = form.member_draft();
                let updated = self.library.update_member(&code, &draft)?;
                self.show_member_search(&code)?;
                self.report_count(updated, "member", "updated");
            }
            FormKind::DeleteMember => {
                let code = validate::required("Member code", form.value(0))?;
                return Ok(Mode::ConfirmDelete(ConfirmDelete {
                    target: DeleteTarget::Member,
                    code,
                }));
            }
            FormKind::SearchMember => {
                let found = self.show_member_search(form.value(0))?;
                self.report_search(found);
            }
            FormKind::IssueBook => {
                let (book_code, member_code) = (form.value(0), form.value(1));
                self.library
                    .issue_book(book_code, member_code, form.value(2))?;
                self.show_member_issues(member_code)?;
                self.set_status(
                    format!(
                        "Book {} issued to {}.",
                        book_code.trim(),
                        member_code.trim()
                    ),
                    StatusKind::Info,
                );
            }
            FormKind::ReturnBook => {
                let (book_code, member_code) = (form.value(0), form.value(1));
                let closed = self.library.return_book(book_code, member_code)?;
                self.show_member_issues(member_code)?;
                if closed == 0 {
                    self.set_status("No matching active issue found.", StatusKind::Error);
                } else {
                    self.set_status(
                        format!("Book returned on {}.", today_string()),
                        StatusKind::Info,
                    );
                }
            }
            FormKind::SearchIssues => {
                let found = self.show_member_issues(form.value(0))?;
                self.report_search(found);
            }
        }
        Ok(Mode::Normal)
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmDelete) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.perform_delete(&confirm) {
                    Ok(()) => Mode::Normal,
                    Err(err) => {
                        self.set_status(err.to_string(), StatusKind::Error);
                        Mode::ConfirmDelete(confirm)
                    }
                }
            }
            _ => Mode::ConfirmDelete(confirm),
        }
    }

    fn perform_delete(&mut self, confirm: &ConfirmDelete) -> Result<(), LibraryError> {
        let deleted = match confirm.target {
            DeleteTarget::Book => {
                let deleted = self.library.delete_book(&confirm.code)?;
                self.reload_books(None);
                deleted
            }
            DeleteTarget::Member => {
                let deleted = self.library.delete_member(&confirm.code)?;
                self.reload_members(None);
                deleted
            }
        };
        self.report_count(deleted, confirm.target.noun(), "deleted");
        Ok(())
    }

    // ---- data loading ---------------------------------------------------

    fn switch_tab(&mut self, tab: Tab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        self.clear_status();
        match tab {
            Tab::Dashboard => self.refresh_dashboard(),
            Tab::Books => self.reload_books(None),
            Tab::Members => self.reload_members(None),
            Tab::Issues => {}
        }
    }

    fn refresh_dashboard(&mut self) {
        let loaded = self.library.dashboard_stats().and_then(|stats| {
            let recent = self.library.recent_issues(DEFAULT_RECENT_LIMIT)?;
            Ok((stats, recent))
        });
        match loaded {
            Ok((stats, recent)) => {
                self.dashboard = DashboardScreen { stats, recent };
            }
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
    }

    fn reload_books(&mut self, focus: Option<&str>) {
        match self.library.list_books() {
            Ok(books) => {
                self.books.set_rows(books, "All books");
                if let Some(code) = focus {
                    self.books.focus_where(|book| book.code == code);
                }
            }
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
    }

    fn reload_members(&mut self, focus: Option<&str>) {
        match self.library.list_members() {
            Ok(members) => {
                self.members.set_rows(members, "All members");
                if let Some(code) = focus {
                    self.members.focus_where(|member| member.code == code);
                }
            }
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
    }

    fn show_book_search(&mut self, code: &str) -> Result<usize, LibraryError> {
        let rows = self.library.search_book(code)?;
        let found = rows.len();
        self.books.set_rows(rows, format!("Search: {}", code.trim()));
        Ok(found)
    }

    fn show_member_search(&mut self, code: &str) -> Result<usize, LibraryError> {
        let rows = self.library.search_member(code)?;
        let found = rows.len();
        self.members.set_rows(rows, format!("Search: {}", code.trim()));
        Ok(found)
    }

    fn show_member_issues(&mut self, member_code: &str) -> Result<usize, LibraryError> {
        let rows = self.library.search_issues_by_member(member_code)?;
        let found = rows.len();
        self.issues
            .set_rows(rows, format!("Issues for member {}", member_code.trim()));
        self.issues.select_last();
        Ok(found)
    }

    // ---- status ---------------------------------------------------------

    fn report_search(&mut self, found: usize) {
        if found == 0 {
            self.set_status("No records found.", StatusKind::Info);
        } else {
            self.set_status(
                format!("{} found.", count_label(found, "record")),
                StatusKind::Info,
            );
        }
    }

    fn report_count(&mut self, count: usize, noun: &str, verb: &str) {
        self.set_status(
            format!("{} {verb}.", count_label(count, noun)),
            StatusKind::Info,
        );
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn move_selection(&mut self, offset: isize) {
        match self.tab {
            Tab::Dashboard => {}
            Tab::Books => self.books.move_selection(offset),
            Tab::Members => self.members.move_selection(offset),
            Tab::Issues => self.issues.move_selection(offset),
        }
    }

    fn select_edge(&mut self, first: bool) {
        match (self.tab, first) {
            (Tab::Dashboard, _) => {}
            (Tab::Books, true) => self.books.select_first(),
            (Tab::Books, false) => self.books.select_last(),
            (Tab::Members, true) => self.members.select_first(),
            (Tab::Members, false) => self.members.select_last(),
            (Tab::Issues, true) => self.issues.select_first(),
            (Tab::Issues, false) => self.issues.select_last(),
        }
    }

    // ---- drawing --------------------------------------------------------

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_tab_bar(frame, chunks[0]);

        match self.tab {
            Tab::Dashboard => self.draw_dashboard(frame, chunks[1]),
            Tab::Books => draw_selectable(frame, chunks[1], "Books", &self.books),
            Tab::Members => draw_selectable(frame, chunks[1], "Members", &self.members),
            Tab::Issues => draw_selectable(frame, chunks[1], "Issue / Return", &self.issues),
        }

        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::Editing(form) => draw_form(frame, area, form),
            Mode::ConfirmDelete(confirm) => draw_confirm_delete(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.title())).collect();
        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title("Library Desk"))
            .select(self.tab.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn draw_dashboard(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(STAT_CARD_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        let today = Local::now().date_naive();
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Library at a Glance",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Today: {}", today.format("%A, %d %B %Y")),
                Style::default().fg(Color::Gray),
            )),
        ]);
        frame.render_widget(header, chunks[0]);

        let stats = &self.dashboard.stats;
        let cards = [
            (stats.total_books, "Total Books", Color::Yellow),
            (stats.total_members, "Total Members", Color::Blue),
            (stats.active_issues, "Currently Issued", Color::Red),
            (stats.returned_today, "Returned Today", Color::Green),
        ];
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(chunks[1]);
        for ((value, label, color), column) in cards.into_iter().zip(columns.iter()) {
            let card = Paragraph::new(stat_card_lines(value, label, color))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                );
            frame.render_widget(card, *column);
        }

        let caption = format!("latest {DEFAULT_RECENT_LIMIT}");
        draw_listing(
            frame,
            chunks[2],
            "Recent Issues",
            &caption,
            &self.dashboard.recent,
            None,
        );
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        match (&self.mode, self.tab) {
            (Mode::Editing(_), _) => key_hints(&[
                ("Enter", "Submit"),
                ("Tab", "Next Field"),
                ("Esc", "Cancel"),
            ]),
            (Mode::ConfirmDelete(_), _) => key_hints(&[("Y", "Delete"), ("N/Esc", "Keep")]),
            (Mode::Normal, Tab::Dashboard) => key_hints(&[
                ("1-4", "Tabs"),
                ("r", "Refresh"),
                ("q", "Quit"),
            ]),
            (Mode::Normal, Tab::Books) | (Mode::Normal, Tab::Members) => key_hints(&[
                ("1-4", "Tabs"),
                ("a", "Add"),
                ("u", "Update"),
                ("d", "Delete"),
                ("/", "Search"),
                ("l", "List All"),
                ("q", "Quit"),
            ]),
            (Mode::Normal, Tab::Issues) => key_hints(&[
                ("1-4", "Tabs"),
                ("i", "Issue"),
                ("r", "Return"),
                ("/", "Search by Member"),
                ("q", "Quit"),
            ]),
        }
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

fn draw_selectable<T: TableRow>(frame: &mut Frame, area: Rect, title: &str, listing: &Listing<T>) {
    draw_listing(
        frame,
        area,
        title,
        &listing.caption,
        &listing.rows,
        Some(listing.selected),
    );
}

/// Render a results table. `None`, or an index past the end, leaves every
/// row unhighlighted.
fn draw_listing<T: TableRow>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    caption: &str,
    records: &[T],
    selected: Option<usize>,
) {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(T::headers().iter().map(|h| Cell::from(*h))).style(header_style);

    let rows: Vec<Row> = records
        .iter()
        .map(|record| Row::new(record.cells()))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{title} ({caption})"));

    if rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No records.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let table = Table::new(rows, T::widths())
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default();
    state.select(selected.filter(|&idx| idx < records.len()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &Form) {
    let popup_area = centered_rect(70, 60, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(form.kind.title())
        .borders(Borders::ALL);
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let mut lines: Vec<Line> = (0..form.len()).map(|idx| form.build_line(idx)).collect();
    lines.push(Line::from(""));

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter to submit | Tab to switch | Esc to cancel",
            Style::default().fg(Color::Gray),
        )));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);

    frame.set_cursor_position(form_cursor(inner, form));
}

/// Cursor cell after the focused value, kept inside `inner` however long the
/// input grows.
fn form_cursor(inner: Rect, form: &Form) -> (u16, u16) {
    let offset = form.label_width().saturating_add(form.value_len(form.active));
    let x = inner
        .x
        .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX))
        .min(inner.right().saturating_sub(1));
    let y = inner
        .y
        .saturating_add(u16::try_from(form.active).unwrap_or(u16::MAX))
        .min(inner.bottom().saturating_sub(1));
    (x, y)
}

fn draw_confirm_delete(frame: &mut Frame, area: Rect, confirm: &ConfirmDelete) {
    let popup_area = centered_rect(50, 25, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Confirm Delete")
        .borders(Borders::ALL);
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let lines = vec![
        Line::from(format!(
            "Delete {} {}?",
            confirm.target.noun(),
            confirm.code
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Y to confirm or N / Esc to cancel.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
