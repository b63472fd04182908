use rusqlite::{params, Connection, Row};

use crate::error::{map_unique_constraint, Result, ResultExt};
use crate::models::Book;

const BOOK_COLUMNS: &str = "code, name, author, price, publisher, quantity, purchased_on";

fn map_book(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        code: row.get(0)?,
        name: row.get(1)?,
        author: row.get(2)?,
        price: row.get(3)?,
        publisher: row.get(4)?,
        quantity: row.get(5)?,
        purchased_on: row.get(6)?,
    })
}

/// Every book ordered by code, for the initial table on the Books tab.
pub fn fetch_books(conn: &Connection) -> Result<Vec<Book>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {BOOK_COLUMNS} FROM books ORDER BY code"))
        .db_context("failed to prepare book query")?;

    let books = stmt
        .query_map([], map_book)
        .db_context("failed to load books")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("failed to collect books")?;

    Ok(books)
}

/// Look up books by code. The primary key keeps this to zero or one row, but
/// the result stays a list so callers render it the same way as any search.
pub fn find_books(conn: &Connection, code: &str) -> Result<Vec<Book>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE code = ?1"))
        .db_context("failed to prepare book search")?;

    let books = stmt
        .query_map([code], map_book)
        .db_context("failed to search books")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("failed to collect books")?;

    Ok(books)
}

/// Insert a new book. A duplicate code comes back as a conflict error rather
/// than being checked up front.
pub fn create_book(conn: &Connection, book: &Book) -> Result<()> {
    conn.execute(
        "INSERT INTO books (code, name, author, price, publisher, quantity, purchased_on)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            book.code,
            book.name,
            book.author,
            book.price,
            book.publisher,
            book.quantity,
            book.purchased_on
        ],
    )
    .map_err(|err| map_unique_constraint(err, "Book", &book.code))?;
    Ok(())
}

/// Overwrite every column except the key. Returns the number of rows touched;
/// zero means the code was not found.
pub fn update_book(conn: &Connection, book: &Book) -> Result<usize> {
    conn.execute(
        "UPDATE books
         SET name = ?1, author = ?2, price = ?3, publisher = ?4, quantity = ?5, purchased_on = ?6
         WHERE code = ?7",
        params![
            book.name,
            book.author,
            book.price,
            book.publisher,
            book.quantity,
            book.purchased_on,
            book.code
        ],
    )
    .db_context("failed to update book")
}

pub fn delete_book(conn: &Connection, code: &str) -> Result<usize> {
    conn.execute("DELETE FROM books WHERE code = ?1", params![code])
        .db_context("failed to delete book")
}
