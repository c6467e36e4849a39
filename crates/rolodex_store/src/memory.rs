//! In-memory record store.

use crate::error::StoreResult;
use crate::store::RecordStore;
use parking_lot::RwLock;
use rolodex_core::{Record, RecordId};

/// An in-memory record store.
///
/// Suitable for tests and for sessions that don't need persistence. Records
/// are listed in insertion order.
///
/// # Example
///
/// ```rust
/// use rolodex_store::{MemoryStore, RecordStore};
///
/// let store = MemoryStore::with_names(["Bob", "alice"]);
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one record per name.
    #[must_use]
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = names
            .into_iter()
            .map(|name| Record::new(RecordId::new(), name))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Removes all records.
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl RecordStore for MemoryStore {
    fn list(&self) -> StoreResult<Vec<Record>> {
        Ok(self.records.read().clone())
    }

    fn add(&self, name: &str) -> StoreResult<RecordId> {
        let id = RecordId::new();
        self.records.write().push(Record::new(id, name));
        Ok(id)
    }
}
