//! The contact book session.

use crate::config::BookConfig;
use crate::error::{BookError, BookResult};
use crate::export::write_atomic;
use parking_lot::{Mutex, RwLock};
use rolodex_core::{
    normalize_query, validate_name, BucketKey, Directory, DirectoryView, FilteredDirectory,
    RecordId,
};
use rolodex_sheet::{ContactSheet, SheetCodec, XlsxCodec};
use rolodex_store::{RecordStore, StoreError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Number of contacts added.
    pub added: usize,
    /// Number of contacts in the reloaded directory.
    pub total: usize,
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    /// Where the workbook was written.
    pub path: PathBuf,
    /// Number of contact rows written.
    pub records: usize,
    /// Size of the workbook in bytes.
    pub bytes: usize,
}

#[derive(Debug)]
struct ViewState {
    directory: Directory,
    query: String,
    view: FilteredDirectory,
}

impl ViewState {
    fn new() -> Self {
        let directory = Directory::empty();
        Self {
            view: FilteredDirectory::from(directory.clone()),
            directory,
            query: String::new(),
        }
    }

    /// Swaps in a new directory and re-applies the current query to it.
    fn replace(&mut self, directory: Directory) {
        self.view = directory.filter(&self.query);
        self.directory = directory;
    }
}

/// One contact list screen: a directory over a record store, a search
/// box, and spreadsheet import/export.
///
/// The store and codec are injected so tests can substitute fakes.
///
/// # Concurrency
///
/// `ContactBook` is `Send + Sync`. Reloads, adds and imports are serialized
/// by an internal lock, so only one rebuild is in flight and a stale listing
/// can never overwrite a newer one. Searches only touch the view state and
/// never wait for the store.
///
/// # Example
///
/// ```
/// use rolodex_book::{BookConfig, ContactBook};
/// use rolodex_core::DirectoryView;
/// use rolodex_sheet::XlsxCodec;
/// use rolodex_store::MemoryStore;
///
/// let store = MemoryStore::with_names(["张三", "Bob", "alice"]);
/// let book = ContactBook::new(store, XlsxCodec::default(), BookConfig::default()).unwrap();
/// book.load().unwrap();
///
/// let view = book.search("li");
/// assert_eq!(view.record_count(), 1);
/// ```
pub struct ContactBook<S, C> {
    store: S,
    codec: C,
    sheet: ContactSheet,
    config: BookConfig,
    rebuild: Mutex<()>,
    state: RwLock<ViewState>,
}

impl<S: RecordStore> ContactBook<S, XlsxCodec> {
    /// Creates a book that exchanges `.xlsx` workbooks named after
    /// `config.sheet_name`.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Config`] if the configuration is invalid.
    pub fn with_xlsx(store: S, config: BookConfig) -> BookResult<Self> {
        let codec =
            XlsxCodec::new(config.sheet_name.clone()).map_err(|e| BookError::config(e.to_string()))?;
        Self::new(store, codec, config)
    }
}

impl<S: RecordStore, C: SheetCodec> ContactBook<S, C> {
    /// Creates a book with an empty directory. Call [`load`](Self::load) to
    /// populate it.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Config`] if the configuration is invalid.
    pub fn new(store: S, codec: C, config: BookConfig) -> BookResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            codec,
            sheet: ContactSheet::new(config.header_label.clone()),
            config,
            rebuild: Mutex::new(()),
            state: RwLock::new(ViewState::new()),
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Returns the record store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rebuilds the directory from the store and re-applies the current
    /// query.
    ///
    /// Returns the number of records loaded.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Retrieval`] if the store cannot be listed. The
    /// directory is then shown empty.
    pub fn load(&self) -> BookResult<usize> {
        let _guard = self.rebuild.lock();
        self.reload_locked()
    }

    fn reload_locked(&self) -> BookResult<usize> {
        match self.store.list() {
            Ok(records) => {
                let count = records.len();
                self.state.write().replace(Directory::build(records));
                info!(records = count, "directory loaded");
                Ok(count)
            }
            Err(e) => {
                self.state.write().replace(Directory::empty());
                error!(error = %e, "failed to load contacts");
                Err(BookError::Retrieval(e))
            }
        }
    }

    /// Returns a copy of the full directory.
    #[must_use]
    pub fn directory(&self) -> Directory {
        self.state.read().directory.clone()
    }

    /// Returns a copy of the current view (the full directory filtered by the
    /// current query).
    #[must_use]
    pub fn view(&self) -> FilteredDirectory {
        self.state.read().view.clone()
    }

    /// Returns the current normalized query.
    #[must_use]
    pub fn query(&self) -> String {
        self.state.read().query.clone()
    }

    /// Sets the search query and returns the new view.
    ///
    /// The query is applied to the full directory, never to the previous
    /// view. An empty query shows every bucket.
    pub fn search(&self, query: &str) -> FilteredDirectory {
        let mut guard = self.state.write();
        let state = &mut *guard;
        state.query = normalize_query(query);
        state.view = state.directory.filter(&state.query);
        debug!(
            query = %state.query,
            matches = state.view.record_count(),
            "search updated"
        );
        state.view.clone()
    }

    /// Returns the position of `letter`'s bucket in the current view.
    ///
    /// `None` means the view has no bucket for that letter (it was filtered
    /// out).
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Invalid`] if `letter` is not on the alphabet rail.
    pub fn jump(&self, letter: char) -> BookResult<Option<usize>> {
        let key = BucketKey::try_from(letter)?;
        Ok(self.state.read().view.anchor(key))
    }

    /// Adds one contact and reloads the directory.
    ///
    /// # Errors
    ///
    /// - [`BookError::Invalid`] if `name` is blank
    /// - [`BookError::Add`] if the store rejects the record
    /// - [`BookError::Retrieval`] if the record was stored but the reload
    ///   failed
    pub fn add(&self, name: &str) -> BookResult<RecordId> {
        validate_name(name)?;

        let _guard = self.rebuild.lock();
        let id = self.store.add(name).map_err(|e| {
            error!(error = %e, "failed to add contact");
            BookError::Add(e)
        })?;
        info!(%id, "contact added");
        self.reload_locked()?;
        Ok(id)
    }

    /// Encodes every stored contact, in store order, as a workbook.
    ///
    /// # Errors
    ///
    /// - [`BookError::Retrieval`] if the store cannot be listed
    /// - [`BookError::ExportEncode`] if the workbook cannot be produced
    pub fn export_bytes(&self) -> BookResult<(Vec<u8>, usize)> {
        let records = self.store.list().map_err(|e| {
            error!(error = %e, "export failed: cannot list contacts");
            BookError::Retrieval(e)
        })?;

        let rows = self.sheet.to_rows(records.iter().map(|r| r.name.as_str()));
        let bytes = self.codec.encode(&rows).map_err(|e| {
            error!(error = %e, "export failed: cannot encode workbook");
            BookError::ExportEncode(e)
        })?;
        Ok((bytes, records.len()))
    }

    /// Exports every stored contact to `path`.
    ///
    /// The file is written atomically; on failure no partial file is left.
    ///
    /// # Errors
    ///
    /// Everything [`export_bytes`](Self::export_bytes) returns, plus
    /// [`BookError::ExportWrite`] if the file cannot be written.
    pub fn export_to(&self, path: &Path) -> BookResult<ExportReport> {
        let (bytes, records) = self.export_bytes()?;
        write_atomic(path, &bytes).map_err(|e| {
            error!(error = %e, path = %path.display(), "export failed: cannot write file");
            BookError::ExportWrite(e)
        })?;

        info!(records, path = %path.display(), "contacts exported");
        Ok(ExportReport {
            path: path.to_path_buf(),
            records,
            bytes: bytes.len(),
        })
    }

    /// Exports into `dir` using the configured export file name.
    ///
    /// # Errors
    ///
    /// See [`export_to`](Self::export_to).
    pub fn export_to_dir(&self, dir: &Path) -> BookResult<ExportReport> {
        self.export_to(&dir.join(&self.config.export_file_name))
    }

    /// Imports every contact row of a workbook.
    ///
    /// Each row becomes one new record; duplicates are not merged. All rows
    /// are attempted even after a failure. The directory is reloaded only if
    /// every row was stored.
    ///
    /// # Errors
    ///
    /// - [`BookError::ImportDecode`] if the bytes are not a workbook; nothing
    ///   is added
    /// - [`BookError::ImportWrite`] if any row failed to store; rows stored
    ///   before or after it stay stored
    /// - [`BookError::Retrieval`] if every row was stored but the reload
    ///   failed
    pub fn import_bytes(&self, bytes: &[u8]) -> BookResult<ImportReport> {
        let rows = self.codec.decode(bytes).map_err(|e| {
            error!(error = %e, "import failed: cannot decode workbook");
            BookError::ImportDecode(e)
        })?;
        let names = self.sheet.names_from_rows(rows);
        debug!(rows = names.len(), "decoded import rows");

        let _guard = self.rebuild.lock();
        let attempted = names.len();
        let mut failures: Vec<StoreError> = Vec::new();
        for name in &names {
            if let Err(e) = self.store.add(name) {
                failures.push(e);
            }
        }

        let failed = failures.len();
        if let Some(first) = failures.into_iter().next() {
            error!(failed, attempted, error = %first, "import failed");
            return Err(BookError::ImportWrite {
                failed,
                attempted,
                first,
            });
        }

        let total = self.reload_locked()?;
        info!(added = attempted, total, "contacts imported");
        Ok(ImportReport {
            added: attempted,
            total,
        })
    }

    /// Reads a workbook from `path` and imports it.
    ///
    /// # Errors
    ///
    /// [`BookError::ImportRead`] if the file cannot be read, otherwise see
    /// [`import_bytes`](Self::import_bytes).
    pub fn import_file(&self, path: &Path) -> BookResult<ImportReport> {
        let bytes = fs::read(path).map_err(|e| {
            error!(error = %e, path = %path.display(), "import failed: cannot read file");
            BookError::ImportRead(e)
        })?;
        self.import_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use rolodex_store::{MemoryStore, MockStore};

    fn book<S: RecordStore>(store: S) -> ContactBook<S, XlsxCodec> {
        ContactBook::with_xlsx(store, BookConfig::default()).unwrap()
    }

    fn letter(c: char) -> BucketKey {
        BucketKey::letter(c).unwrap()
    }

    #[test]
    fn new_book_is_empty_until_loaded() {
        let book = book(MemoryStore::with_names(["Bob"]));
        assert!(book.directory().is_empty());
        assert_eq!(book.load().unwrap(), 1);
        assert_eq!(book.directory().bucket(letter('B')).len(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = BookConfig::new().sheet_name("bad/name");
        let result = ContactBook::with_xlsx(MemoryStore::new(), config);
        assert!(matches!(result, Err(BookError::Config(_))));
    }

    #[test]
    fn search_then_reload_keeps_query() {
        let book = book(MemoryStore::with_names(["alice", "Bob"]));
        book.load().unwrap();
        book.search("AL");
        assert_eq!(book.query(), "al");

        book.store().add("Alan").unwrap();
        book.load().unwrap();
        let view = book.view();
        assert_eq!(view.keys(), vec![letter('A')]);
        assert_eq!(view.record_count(), 2);
    }

    #[test]
    fn clearing_query_restores_full_directory() {
        let book = book(MemoryStore::with_names(["alice", "Bob"]));
        book.load().unwrap();
        book.search("bob");
        let view = book.search("");
        assert!(view.is_unfiltered());
        assert_eq!(view.buckets(), book.directory().buckets());
    }

    #[test]
    fn failed_load_shows_empty_directory() {
        let store = MockStore::with_names(["alice"]);
        let book = book(store);
        book.load().unwrap();
        assert!(!book.directory().is_empty());

        book.store().set_list_failure(Some("offline"));
        let err = book.load().unwrap_err();
        assert_eq!(err.kind(), FailureKind::Retrieval);
        assert!(book.directory().is_empty());
        assert_eq!(book.view().buckets().len(), BucketKey::COUNT);
    }

    #[test]
    fn jump_uses_current_view() {
        let book = book(MemoryStore::with_names(["张三", "Bob", "alice"]));
        book.load().unwrap();
        assert_eq!(book.jump('b').unwrap(), Some(1));
        assert_eq!(book.jump('#').unwrap(), Some(26));

        book.search("li");
        assert_eq!(book.jump('A').unwrap(), Some(0));
        assert_eq!(book.jump('B').unwrap(), None);
        assert!(matches!(book.jump('1'), Err(BookError::Invalid(_))));
    }

    #[test]
    fn add_validates_and_reloads() {
        let book = book(MemoryStore::new());
        assert!(matches!(book.add("  "), Err(BookError::Invalid(_))));

        let id = book.add("Zed").unwrap();
        let bucket = book.directory().bucket(letter('Z')).clone();
        assert_eq!(bucket.members()[0].id, id);
    }

    #[test]
    fn add_failure_is_reported() {
        let store = MockStore::new();
        store.set_fail_every_add(true);
        let book = book(store);
        let err = book.add("Zed").unwrap_err();
        assert_eq!(err.kind(), FailureKind::Add);
    }

    #[test]
    fn export_import_roundtrip() {
        let source = book(MemoryStore::with_names(["Bob", "张三", "alice"]));
        let (bytes, count) = source.export_bytes().unwrap();
        assert_eq!(count, 3);

        let target = book(MemoryStore::new());
        let report = target.import_bytes(&bytes).unwrap();
        assert_eq!(report, ImportReport { added: 3, total: 3 });

        let names: Vec<_> = target
            .store()
            .list()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Bob", "张三", "alice"]);
    }

    #[test]
    fn import_garbage_adds_nothing() {
        let book = book(MockStore::new());
        let err = book.import_bytes(b"not a workbook").unwrap_err();
        assert_eq!(err.kind(), FailureKind::ImportDecode);
        assert_eq!(book.store().add_calls(), 0);
    }

    #[test]
    fn export_retrieval_failure() {
        let store = MockStore::new();
        store.set_list_failure(Some("offline"));
        let book = book(store);
        assert_eq!(
            book.export_bytes().unwrap_err().kind(),
            FailureKind::Retrieval
        );
    }
}
