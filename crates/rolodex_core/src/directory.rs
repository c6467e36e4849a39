//! The directory index.
//!
//! A [`Directory`] is rebuilt wholesale from a record set; it is never
//! patched in place. Building is a single pass that routes each record to
//! the bucket picked by [`classify`]. Members keep the order in which the
//! records were supplied.

use crate::alphabet::{classify, BucketKey};
use crate::filter::{filter, FilteredDirectory};
use crate::record::Record;
use serde::Serialize;

/// Records sharing one rail key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    key: BucketKey,
    members: Vec<Record>,
}

impl Bucket {
    pub(crate) fn new(key: BucketKey, members: Vec<Record>) -> Self {
        Self { key, members }
    }

    /// Returns the rail key of this bucket.
    #[must_use]
    pub fn key(&self) -> BucketKey {
        self.key
    }

    /// Returns the records in this bucket.
    #[must_use]
    pub fn members(&self) -> &[Record] {
        &self.members
    }

    /// Returns the number of records in this bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if this bucket has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Read access shared by full and filtered directories.
///
/// Presentation only needs the ordered buckets; the provided methods cover
/// the alphabet rail (which keys are present, where to jump).
pub trait DirectoryView {
    /// Returns the buckets of this view in rail order.
    fn buckets(&self) -> &[Bucket];

    /// Returns the position of the bucket with `key`, if this view has one.
    ///
    /// This is the jump-to-letter target for the alphabet rail.
    fn anchor(&self, key: BucketKey) -> Option<usize> {
        self.buckets().iter().position(|b| b.key() == key)
    }

    /// Returns the keys present in this view, in rail order.
    fn keys(&self) -> Vec<BucketKey> {
        self.buckets().iter().map(Bucket::key).collect()
    }

    /// Returns the total number of records across all buckets.
    fn record_count(&self) -> usize {
        self.buckets().iter().map(Bucket::len).sum()
    }

    /// Iterates over every record, bucket by bucket.
    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        Box::new(self.buckets().iter().flat_map(|b| b.members().iter()))
    }
}

/// The full alphabetical directory.
///
/// # Invariants
///
/// - Exactly [`BucketKey::COUNT`] buckets, one per key, in rail order
/// - Every record passed to [`Directory::build`] appears in exactly one bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directory {
    buckets: Vec<Bucket>,
}

impl Directory {
    /// Creates a directory with every bucket present and empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            buckets: BucketKey::all().map(|k| Bucket::new(k, Vec::new())).collect(),
        }
    }

    /// Partitions `records` into buckets.
    pub fn build(records: impl IntoIterator<Item = Record>) -> Self {
        let mut directory = Self::empty();
        for record in records {
            let key = classify(&record.name);
            directory.buckets[key.index()].members.push(record);
        }
        directory
    }

    /// Returns the bucket for `key`. Every key has a bucket.
    #[must_use]
    pub fn bucket(&self, key: BucketKey) -> &Bucket {
        &self.buckets[key.index()]
    }

    /// Returns true if no bucket has any records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    /// Restricts this directory to records whose name contains `query`.
    ///
    /// See [`filter`].
    #[must_use]
    pub fn filter(&self, query: &str) -> FilteredDirectory {
        filter(self, query)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::empty()
    }
}

impl DirectoryView for Directory {
    fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
}

impl FromIterator<Record> for Directory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::build(iter)
    }
}
