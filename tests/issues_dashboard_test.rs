mod common;

use chrono::{Local, NaiveDate};
use common::{ada, dune, ScratchLibrary};
use library_desk::{IssueState, DEFAULT_RECENT_LIMIT};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn issue_then_return_walks_the_state_machine() {
    let library = ScratchLibrary::new();
    library.add_book("B1", &dune()).unwrap();
    assert_eq!(library.search_book("B1").unwrap().len(), 1);

    // The member was never registered; issuing does not check.
    library.issue_book("B1", "M1", "2024-02-01").unwrap();

    let issues = library.search_issues_by_member("M1").unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].book_code, "B1");
    assert_eq!(issues[0].issued_on, ymd(2024, 2, 1));
    assert_eq!(issues[0].state(), IssueState::Active);

    let before = Local::now().date_naive();
    assert_eq!(library.return_book("B1", "M1").unwrap(), 1);
    let after = Local::now().date_naive();

    let issues = library.search_issues_by_member("M1").unwrap();
    assert_eq!(issues.len(), 1);
    let returned_on = issues[0].returned_on.expect("return date set");
    assert!(returned_on == before || returned_on == after);
    assert_eq!(issues[0].state(), IssueState::Returned(returned_on));

    // Nothing active is left, so a second return is a no-op.
    assert_eq!(library.return_book("B1", "M1").unwrap(), 0);
    let issues = library.search_issues_by_member("M1").unwrap();
    assert_eq!(issues[0].returned_on, Some(returned_on));
}

#[test]
fn return_date_is_set_once() {
    let library = ScratchLibrary::new();
    library.issue_book("B1", "M1", "2024-02-01").unwrap();

    assert_eq!(
        library.return_book_on("B1", "M1", ymd(2024, 2, 10)).unwrap(),
        1
    );
    assert_eq!(
        library.return_book_on("B1", "M1", ymd(2024, 3, 1)).unwrap(),
        0
    );

    let issues = library.search_issues_by_member("M1").unwrap();
    assert_eq!(issues[0].returned_on, Some(ymd(2024, 2, 10)));
}

#[test]
fn return_closes_only_the_oldest_open_issue() {
    let library = ScratchLibrary::new();
    library.issue_book("B1", "M1", "2024-03-01").unwrap();
    library.issue_book("B1", "M1", "2024-02-01").unwrap();

    assert_eq!(
        library.return_book_on("B1", "M1", ymd(2024, 3, 5)).unwrap(),
        1
    );

    let issues = library.search_issues_by_member("M1").unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].issued_on, ymd(2024, 2, 1));
    assert_eq!(issues[0].returned_on, Some(ymd(2024, 3, 5)));
    assert_eq!(issues[1].issued_on, ymd(2024, 3, 1));
    assert!(issues[1].state().is_active());
}

#[test]
fn return_requires_matching_pair() {
    let library = ScratchLibrary::new();
    library.issue_book("B1", "M1", "2024-02-01").unwrap();

    assert_eq!(library.return_book("B1", "M2").unwrap(), 0);
    assert_eq!(library.return_book("B2", "M1").unwrap(), 0);
    assert!(library.search_issues_by_member("M1").unwrap()[0]
        .state()
        .is_active());
}

#[test]
fn issue_search_covers_active_and_returned_for_one_member() {
    let library = ScratchLibrary::new();
    library.issue_book("B1", "M1", "2024-01-10").unwrap();
    library.issue_book("B2", "M1", "2024-01-20").unwrap();
    library.issue_book("B3", "M2", "2024-01-15").unwrap();
    library
        .return_book_on("B1", "M1", ymd(2024, 1, 25))
        .unwrap();

    let issues = library.search_issues_by_member("M1").unwrap();
    let codes: Vec<&str> = issues.iter().map(|i| i.book_code.as_str()).collect();
    assert_eq!(codes, ["B1", "B2"]);
    assert!(!issues[0].state().is_active());
    assert!(issues[1].state().is_active());

    assert!(library.search_issues_by_member("M9").unwrap().is_empty());
    assert!(library
        .search_issues_by_member(" ")
        .unwrap_err()
        .is_validation());
}

#[test]
fn issue_rejects_bad_input() {
    let library = ScratchLibrary::new();
    assert!(library
        .issue_book("", "M1", "2024-02-01")
        .unwrap_err()
        .is_validation());
    assert!(library
        .issue_book("B1", "M1", "2024-13-01")
        .unwrap_err()
        .is_validation());
    assert!(library.recent_issues(10).unwrap().is_empty());
}

#[test]
fn dashboard_counts_each_table_independently() {
    let library = ScratchLibrary::new();
    let today = ymd(2024, 5, 1);

    library.add_book("B1", &dune()).unwrap();
    library.add_book("B2", &dune()).unwrap();
    library.add_member("M1", &ada()).unwrap();
    library.issue_book("B1", "M1", "2024-04-01").unwrap();
    library.issue_book("B2", "M1", "2024-04-02").unwrap();
    library.issue_book("B2", "M7", "2024-04-03").unwrap();
    library.return_book_on("B1", "M1", today).unwrap();
    library
        .return_book_on("B2", "M7", ymd(2024, 4, 20))
        .unwrap();

    let stats = library.dashboard_stats_on(today).unwrap();
    assert_eq!(stats.total_books, 2);
    assert_eq!(stats.total_members, 1);
    assert_eq!(stats.active_issues, 1);
    assert_eq!(stats.returned_today, 1);

    // Removing members or returning books does not move the book count.
    library.delete_member("M1").unwrap();
    library.return_book_on("B2", "M1", today).unwrap();
    let stats = library.dashboard_stats_on(today).unwrap();
    assert_eq!(stats.total_books, 2);
    assert_eq!(stats.total_members, 0);
    assert_eq!(stats.active_issues, 0);
    assert_eq!(stats.returned_today, 2);
}

#[test]
fn recent_issues_are_newest_first_and_bounded() {
    let library = ScratchLibrary::new();
    for day in 1..=25u32 {
        library
            .issue_book("B1", "M1", &format!("2024-01-{day:02}"))
            .unwrap();
    }

    let recent = library.recent_issues(DEFAULT_RECENT_LIMIT).unwrap();
    assert_eq!(recent.len(), 20);
    assert_eq!(recent[0].issued_on, ymd(2024, 1, 25));
    assert_eq!(recent[19].issued_on, ymd(2024, 1, 6));

    let few = library.recent_issues(3).unwrap();
    assert_eq!(few.len(), 3);
    assert_eq!(few[2].issued_on, ymd(2024, 1, 23));
}
