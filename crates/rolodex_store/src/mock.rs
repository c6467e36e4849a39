//! A record store with injectable failures.

use crate::error::{StoreError, StoreResult};
use crate::memory::MemoryStore;
use crate::store::RecordStore;
use parking_lot::Mutex;
use rolodex_core::{Record, RecordId};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct Faults {
    list_error: Option<String>,
    failing_adds: HashSet<usize>,
    fail_every_add: bool,
}

/// A memory store that fails on demand.
///
/// Failed adds store nothing; successful adds behave like [`MemoryStore`].
/// Add calls are counted from zero, failed ones included.
#[derive(Debug, Default)]
pub struct MockStore {
    inner: MemoryStore,
    faults: Mutex<Faults>,
    add_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl MockStore {
    /// Creates a new mock store with no faults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock store pre-populated with one record per name.
    #[must_use]
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: MemoryStore::with_names(names),
            ..Self::default()
        }
    }

    /// Makes every `list` call fail with `message`, or clears the fault.
    pub fn set_list_failure(&self, message: Option<&str>) {
        self.faults.lock().list_error = message.map(str::to_string);
    }

    /// Makes the add call with index `call` fail.
    pub fn fail_add_call(&self, call: usize) {
        self.faults.lock().failing_adds.insert(call);
    }

    /// Makes every add call fail, or clears the fault.
    pub fn set_fail_every_add(&self, fail: bool) {
        self.faults.lock().fail_every_add = fail;
    }

    /// Returns the number of add calls seen so far.
    #[must_use]
    pub fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    /// Returns the number of list calls seen so far.
    #[must_use]
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Returns the records actually stored, bypassing faults.
    #[must_use]
    pub fn stored(&self) -> Vec<Record> {
        self.inner.list().unwrap_or_default()
    }
}

impl RecordStore for MockStore {
    fn list(&self) -> StoreResult<Vec<Record>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.faults.lock().list_error {
            return Err(StoreError::backend(message.clone()));
        }
        self.inner.list()
    }

    fn add(&self, name: &str) -> StoreResult<RecordId> {
        let call = self.add_calls.fetch_add(1, Ordering::SeqCst);
        {
            let faults = self.faults.lock();
            if faults.fail_every_add || faults.failing_adds.contains(&call) {
                return Err(StoreError::backend(format!("injected failure on add #{call}")));
            }
        }
        self.inner.add(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_without_faults_behaves_like_memory() {
        let store = MockStore::with_names(["a"]);
        store.add("b").unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
        assert_eq!(store.add_calls(), 1);
        assert_eq!(store.list_calls(), 1);
    }

    #[test]
    fn mock_list_failure() {
        let store = MockStore::with_names(["a"]);
        store.set_list_failure(Some("offline"));
        let err = store.list().unwrap_err();
        assert!(err.to_string().contains("offline"));

        store.set_list_failure(None);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn mock_single_add_failure() {
        let store = MockStore::new();
        store.fail_add_call(1);

        assert!(store.add("first").is_ok());
        assert!(matches!(store.add("second"), Err(StoreError::Backend { .. })));
        assert!(store.add("third").is_ok());

        let names: Vec<_> = store.stored().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["first", "third"]);
        assert_eq!(store.add_calls(), 3);
    }

    #[test]
    fn mock_every_add_fails() {
        let store = MockStore::new();
        store.set_fail_every_add(true);
        assert!(store.add("x").is_err());
        assert!(store.stored().is_empty());
    }
}
