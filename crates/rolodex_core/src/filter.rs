//! Substring search over a directory.

use crate::directory::{Bucket, Directory, DirectoryView};
use serde::Serialize;

/// A directory restricted to the records matching a query.
///
/// For a non-empty query, buckets without matches are omitted entirely. For
/// the empty query, every bucket of the source directory is kept, including
/// empty ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredDirectory {
    query: String,
    buckets: Vec<Bucket>,
}

impl FilteredDirectory {
    /// Returns the normalized query that produced this view.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns true if this view is the full directory (empty query).
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty()
    }

    /// Returns true if the view has no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }
}

impl DirectoryView for FilteredDirectory {
    fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
}

impl From<Directory> for FilteredDirectory {
    fn from(directory: Directory) -> Self {
        Self {
            query: String::new(),
            buckets: directory.buckets().to_vec(),
        }
    }
}

/// Lowercases a raw query the way [`filter`] does before matching.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Keeps the records whose lowercased name contains the lowercased `query`.
///
/// Matching is a plain contiguous substring test; there is no tokenization,
/// fuzzy matching or diacritic folding. The result depends only on
/// `directory` and `query`, so callers always filter the full directory.
#[must_use]
pub fn filter(directory: &Directory, query: &str) -> FilteredDirectory {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return FilteredDirectory::from(directory.clone());
    }

    let buckets = directory
        .buckets()
        .iter()
        .filter_map(|bucket| {
            let members: Vec<_> = bucket
                .members()
                .iter()
                .filter(|r| r.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            (!members.is_empty()).then(|| Bucket::new(bucket.key(), members))
        })
        .collect();

    FilteredDirectory {
        query: needle,
        buckets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::BucketKey;
    use crate::record::{Record, RecordId};
    use proptest::prelude::*;

    fn directory(names: &[&str]) -> Directory {
        Directory::build(names.iter().map(|n| Record::new(RecordId::new(), *n)))
    }

    fn letter(c: char) -> BucketKey {
        BucketKey::letter(c).unwrap()
    }

    #[test]
    fn empty_query_is_full_directory() {
        let dir = directory(&["张三", "Bob", "alice"]);
        let view = dir.filter("");
        assert!(view.is_unfiltered());
        assert_eq!(view.buckets(), dir.buckets());
        assert_eq!(view.buckets().len(), BucketKey::COUNT);
    }

    #[test]
    fn query_drops_empty_buckets() {
        let dir = directory(&["张三", "Bob", "alice"]);
        let view = dir.filter("li");
        assert_eq!(view.keys(), vec![letter('A')]);
        assert_eq!(view.buckets()[0].members()[0].name, "alice");
        assert_eq!(view.anchor(BucketKey::OTHER), None);
        assert_eq!(view.anchor(letter('B')), None);
        assert_eq!(view.anchor(letter('A')), Some(0));
    }

    #[test]
    fn query_is_case_insensitive() {
        let dir = directory(&["ALICE", "bob"]);
        let view = dir.filter("Lic");
        assert_eq!(view.query(), "lic");
        assert_eq!(view.record_count(), 1);
    }

    #[test]
    fn matches_anywhere_in_name() {
        let dir = directory(&["Anna", "Hannah", "Joe"]);
        let view = dir.filter("nn");
        assert_eq!(view.keys(), vec![letter('A'), letter('H')]);
    }

    #[test]
    fn logographic_substring() {
        let dir = directory(&["张三", "李四", "张伟"]);
        let view = dir.filter("张");
        assert_eq!(view.keys(), vec![BucketKey::OTHER]);
        assert_eq!(view.record_count(), 2);
    }

    #[test]
    fn no_matches_yields_no_buckets() {
        let dir = directory(&["Bob"]);
        let view = dir.filter("zzz");
        assert!(view.buckets().is_empty());
        assert!(view.is_empty());
    }

    #[test]
    fn whitespace_query_is_not_empty() {
        let dir = directory(&["Mary Ann", "Bob"]);
        let view = dir.filter(" ");
        assert_eq!(view.keys(), vec![letter('M')]);
    }

    #[test]
    fn no_diacritic_folding() {
        let dir = directory(&["Zoë"]);
        assert!(dir.filter("zoe").is_empty());
        assert_eq!(dir.filter("zoë").record_count(), 1);
    }

    proptest! {
        #[test]
        fn every_member_contains_query(
            names in prop::collection::vec("[a-zA-Z张三]{0,6}", 0..32),
            query in "[a-zA-Z张]{1,2}",
        ) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let dir = directory(&refs);
            let view = dir.filter(&query);
            let needle = query.to_lowercase();
            for bucket in view.buckets() {
                prop_assert!(!bucket.is_empty());
                for member in bucket.members() {
                    prop_assert!(member.name.to_lowercase().contains(&needle));
                }
            }
        }

        #[test]
        fn filtering_ignores_query_history(
            names in prop::collection::vec("[a-z]{0,6}", 0..32),
            edits in prop::collection::vec("[a-z]{0,3}", 1..6),
        ) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let dir = directory(&refs);
            let last = edits.last().cloned().unwrap_or_default();

            let mut view = dir.filter("");
            for edit in &edits {
                view = dir.filter(edit);
            }
            prop_assert_eq!(view, dir.filter(&last));
        }
    }
}
