mod common;

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use common::{ada, dune, ScratchLibrary};
use rusqlite::Connection;
use library_desk::{BookDraft, MemberDraft};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn added_book_is_found_with_the_same_values() {
    let library = ScratchLibrary::new();
    library.add_book("B1", &dune()).unwrap();

    let found = library.search_book("B1").unwrap();
    assert_eq!(found.len(), 1);
    let book = &found[0];
    assert_eq!(book.code, "B1");
    assert_eq!(book.name, "Dune");
    assert_eq!(book.author, "Herbert");
    assert_eq!(book.price, 499.0);
    assert_eq!(book.publisher, "Ace");
    assert_eq!(book.quantity, 3);
    assert_eq!(book.purchased_on, ymd(2024, 1, 1));
}

#[test]
fn input_is_trimmed_before_storage() {
    let library = ScratchLibrary::new();
    let mut draft = dune();
    draft.name = "  Dune  ".into();
    library.add_book("  B2 ", &draft).unwrap();

    let found = library.search_book("B2").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, "B2");
    assert_eq!(found[0].name, "Dune");
}

#[test]
fn unknown_codes_are_empty_results_not_errors() {
    let library = ScratchLibrary::new();
    assert!(library.search_book("nope").unwrap().is_empty());
    assert_eq!(library.delete_book("nope").unwrap(), 0);
    assert_eq!(library.update_book("nope", &dune()).unwrap(), 0);
    assert!(library.search_member("nope").unwrap().is_empty());
    assert_eq!(library.delete_member("nope").unwrap(), 0);
}

#[test]
fn duplicate_code_is_a_persistence_conflict() {
    let library = ScratchLibrary::new();
    library.add_book("B1", &dune()).unwrap();

    let err = library.add_book("B1", &dune()).unwrap_err();
    assert!(!err.is_validation());
    assert!(err.is_conflict());
    assert_eq!(err.to_string(), "Book code B1 already exists.");

    library.add_member("M1", &ada()).unwrap();
    let err = library.add_member("M1", &ada()).unwrap_err();
    assert_eq!(err.to_string(), "Member code M1 already exists.");
}

#[test]
fn missing_or_malformed_fields_are_rejected() {
    let library = ScratchLibrary::new();

    let blank = BookDraft {
        publisher: "   ".into(),
        ..dune()
    };
    let err = library.add_book("B1", &blank).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Publisher is required.");

    let bad_qty = BookDraft {
        quantity: "-2".into(),
        ..dune()
    };
    assert!(library.add_book("B1", &bad_qty).unwrap_err().is_validation());

    let bad_date = MemberDraft {
        membership_date: "yesterday".into(),
        ..ada()
    };
    assert!(library.add_member("M1", &bad_date).unwrap_err().is_validation());

    // Nothing was written by any of the rejected calls.
    assert_eq!(library.dashboard_stats().unwrap().total_books, 0);
    assert_eq!(library.dashboard_stats().unwrap().total_members, 0);
}

#[test]
fn update_keeps_the_code_and_replaces_the_rest() {
    let library = ScratchLibrary::new();
    library.add_book("B1", &dune()).unwrap();

    let revised = BookDraft {
        name: "Dune Messiah".into(),
        price: "550.75".into(),
        quantity: "5".into(),
        ..dune()
    };
    assert_eq!(library.update_book("B1", &revised).unwrap(), 1);

    let found = library.search_book("B1").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, "B1");
    assert_eq!(found[0].name, "Dune Messiah");
    assert_eq!(found[0].price, 550.75);
    assert_eq!(found[0].quantity, 5);
}

#[test]
fn update_with_an_empty_field_is_rejected() {
    let library = ScratchLibrary::new();
    library.add_book("B1", &dune()).unwrap();

    let revised = BookDraft {
        author: String::new(),
        ..dune()
    };
    assert!(library.update_book("B1", &revised).unwrap_err().is_validation());
    assert!(library.update_book("", &dune()).unwrap_err().is_validation());
    assert_eq!(library.search_book("B1").unwrap()[0].author, "Herbert");
}

#[test]
fn delete_removes_exactly_one_row() {
    let library = ScratchLibrary::new();
    library.add_book("B1", &dune()).unwrap();
    library.add_book("B2", &dune()).unwrap();

    assert_eq!(library.delete_book("B1").unwrap(), 1);
    assert!(library.search_book("B1").unwrap().is_empty());
    assert_eq!(library.search_book("B2").unwrap().len(), 1);
    assert_eq!(library.delete_book("B1").unwrap(), 0);
}

#[test]
fn member_lifecycle() {
    let library = ScratchLibrary::new();
    library.add_member("M1", &ada()).unwrap();

    let found = library.search_member("M1").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Ada Lovelace");
    assert_eq!(found[0].joined_on, ymd(2023, 9, 15));
    assert_eq!(found[0].mobile, "5550101");

    let moved = MemberDraft {
        address: "Ockham Park".into(),
        ..ada()
    };
    assert_eq!(library.update_member("M1", &moved).unwrap(), 1);
    let found = library.search_member("M1").unwrap();
    assert_eq!(found[0].code, "M1");
    assert_eq!(found[0].address, "Ockham Park");

    assert_eq!(library.delete_member("M1").unwrap(), 1);
    assert!(library.search_member("M1").unwrap().is_empty());
}

#[test]
fn listings_are_ordered_by_code() {
    let library = ScratchLibrary::new();
    for code in ["B3", "B1", "B2"] {
        library.add_book(code, &dune()).unwrap();
    }
    let codes: Vec<String> = library
        .list_books()
        .unwrap()
        .into_iter()
        .map(|b| b.code)
        .collect();
    assert_eq!(codes, ["B1", "B2", "B3"]);

    library.add_member("M2", &ada()).unwrap();
    library.add_member("M1", &ada()).unwrap();
    let members = library.list_members().unwrap();
    assert_eq!(members[0].code, "M1");
    assert_eq!(members[1].code, "M2");
}

#[test]
fn stored_price_is_exactly_the_typed_price() {
    let library = ScratchLibrary::new();
    let precise = BookDraft {
        price: "1234567890123.45".into(),
        ..dune()
    };
    library.add_book("B1", &precise).unwrap();
    let book = &library.search_book("B1").unwrap()[0];
    assert_eq!(book.price, 1234567890123.45);
    assert_eq!(BookDraft::from(book).price, "1234567890123.45");

    for price in ["12345678901234567.89", "1e3"] {
        let draft = BookDraft {
            price: price.into(),
            ..dune()
        };
        assert!(library.add_book("B2", &draft).unwrap_err().is_validation());
    }
    assert!(library.search_book("B2").unwrap().is_empty());
}

#[test]
fn locked_database_fails_after_the_busy_timeout() {
    let library = ScratchLibrary::with_busy_timeout(Duration::from_millis(100));
    library.add_book("B1", &dune()).unwrap();

    let holder = Connection::open(library.database_path()).unwrap();
    holder.execute_batch("BEGIN EXCLUSIVE;").unwrap();

    let started = Instant::now();
    let err = library.add_book("B2", &dune()).unwrap_err();
    assert!(started.elapsed() >= Duration::from_millis(50));
    assert!(!err.is_validation());
    assert!(!err.is_conflict());
    assert!(err.to_string().contains("database is locked"));

    let err = library.search_book("B1").unwrap_err();
    assert!(!err.is_validation());

    holder.execute_batch("ROLLBACK;").unwrap();
    drop(holder);
    library.add_book("B2", &dune()).unwrap();
    assert_eq!(library.search_book("B1").unwrap().len(), 1);
}
