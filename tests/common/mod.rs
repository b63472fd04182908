#![allow(dead_code)]

use std::fs;
use std::ops::Deref;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use library_desk::{BookDraft, Config, Database, Library, MemberDraft};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A `Library` over a throwaway SQLite file in the OS temp directory. The
/// file is removed when the value drops, so tests never share state.
pub struct ScratchLibrary {
    library: Library,
    dir: PathBuf,
}

impl ScratchLibrary {
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Like `new`, with a short wait on a locked database file.
    pub fn with_busy_timeout(timeout: Duration) -> Self {
        Self::with_config(|config| config.busy_timeout = timeout)
    }

    fn with_config(adjust: impl FnOnce(&mut Config)) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "library-desk-test-{}-{}",
            process::id(),
            NEXT_ID.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = fs::remove_dir_all(&dir);

        let mut config = Config::at(dir.join("library.sqlite"));
        adjust(&mut config);
        let db = Database::new(&config);
        db.ensure_schema().expect("schema should be created");

        Self {
            library: Library::new(db),
            dir,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.dir.join("library.sqlite")
    }
}

impl Deref for ScratchLibrary {
    type Target = Library;

    fn deref(&self) -> &Library {
        &self.library
    }
}

impl Drop for ScratchLibrary {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

pub fn dune() -> BookDraft {
    BookDraft {
        name: "Dune".into(),
        author: "Herbert".into(),
        price: "499".into(),
        publisher: "Ace".into(),
        quantity: "3".into(),
        purchase_date: "2024-01-01".into(),
    }
}

pub fn ada() -> MemberDraft {
    MemberDraft {
        name: "Ada Lovelace".into(),
        membership_date: "2023-09-15".into(),
        address: "12 St James's Square".into(),
        mobile: "5550101".into(),
    }
}
