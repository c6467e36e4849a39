//! Test fixtures and store helpers.
//!
//! Provides ready-made stores and workbooks for common test scenarios.

use rolodex_core::Record;
use rolodex_sheet::{ContactSheet, Row, SheetCodec, XlsxCodec};
use rolodex_store::{FileStore, MemoryStore, RecordStore};
use std::path::Path;
use tempfile::TempDir;

/// Names used by the mixed-script scenario: one logographic, one
/// capitalized, one lowercase.
pub const SCENARIO_NAMES: [&str; 3] = ["张三", "Bob", "alice"];

/// A file store in a temporary directory with automatic cleanup.
pub struct TempFileStore {
    /// The store instance.
    pub store: FileStore,
    /// The temporary directory (kept alive to prevent cleanup).
    dir: TempDir,
}

impl TempFileStore {
    /// Creates an empty file store in a new temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let store = FileStore::open(dir.path()).expect("Failed to open file store");
        Self { store, dir }
    }

    /// Returns the directory holding the store.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TempFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for TempFileStore {
    type Target = FileStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

/// Runs a test with a temporary file store.
pub fn with_temp_store<F, R>(f: F) -> R
where
    F: FnOnce(&FileStore) -> R,
{
    let temp = TempFileStore::new();
    f(&temp.store)
}

/// Creates a memory store holding [`SCENARIO_NAMES`].
pub fn scenario_store() -> MemoryStore {
    MemoryStore::with_names(SCENARIO_NAMES)
}

/// Returns `count` deterministic names cycling through Latin, logographic,
/// numeric and symbol-led names.
pub fn sample_names(count: usize) -> Vec<String> {
    const GIVEN: [&str; 8] = ["alice", "Bob", "carol", "Dave", "erin", "Frank", "grace", "Heidi"];
    const HAN: [&str; 4] = ["张", "李", "王", "赵"];

    (0..count)
        .map(|i| match i % 4 {
            0 | 1 => format!("{}{}", GIVEN[i % GIVEN.len()], i),
            2 => format!("{}{}", HAN[i % HAN.len()], i),
            _ => format!("{}-{}", i, GIVEN[i % GIVEN.len()]),
        })
        .collect()
}

/// Creates a memory store holding `names`.
pub fn populated_store<I, S>(names: I) -> MemoryStore
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    MemoryStore::with_names(names)
}

/// Encodes a contact workbook holding `names` below the default header.
pub fn contacts_workbook<I, S>(names: I) -> Vec<u8>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let rows = ContactSheet::default().to_rows(names);
    raw_workbook(&rows)
}

/// Encodes arbitrary rows with the default codec.
pub fn raw_workbook(rows: &[Row]) -> Vec<u8> {
    XlsxCodec::default()
        .encode(rows)
        .expect("Failed to encode workbook")
}

/// Returns the names held by `store`, in store order.
pub fn store_names<S: RecordStore + ?Sized>(store: &S) -> Vec<String> {
    store
        .list()
        .expect("Failed to list store")
        .into_iter()
        .map(|r: Record| r.name)
        .collect()
}
