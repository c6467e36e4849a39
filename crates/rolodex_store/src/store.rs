//! Record store trait definition.

use crate::error::StoreResult;
use rolodex_core::{Record, RecordId};
use std::sync::Arc;

/// The source of contact records.
///
/// # Invariants
///
/// - `add` is atomic per call and returns a fresh, store-assigned id
/// - `list` returns every stored record, projected to id and name
/// - No transaction spans more than one call
///
/// Failures are returned to the caller as-is. Stores do not retry and do not
/// return partial listings.
pub trait RecordStore: Send + Sync {
    /// Returns every stored record in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn list(&self) -> StoreResult<Vec<Record>>;

    /// Stores a new record with `name` and returns its id.
    ///
    /// The name is stored as given; validation is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be persisted.
    fn add(&self, name: &str) -> StoreResult<RecordId>;
}

impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    fn list(&self) -> StoreResult<Vec<Record>> {
        (**self).list()
    }

    fn add(&self, name: &str) -> StoreResult<RecordId> {
        (**self).add(name)
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn list(&self) -> StoreResult<Vec<Record>> {
        (**self).list()
    }

    fn add(&self, name: &str) -> StoreResult<RecordId> {
        (**self).add(name)
    }
}
