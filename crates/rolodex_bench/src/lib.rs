//! Shared inputs for the Rolodex benchmarks.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use rolodex_core::{Record, RecordId};
use rolodex_testkit::sample_names;

/// Directory sizes every benchmark group runs at.
pub const SIZES: [usize; 4] = [100, 1_000, 10_000, 50_000];

/// Creates `count` records with fresh ids and mixed-script names.
pub fn sample_records(count: usize) -> Vec<Record> {
    sample_names(count)
        .into_iter()
        .map(|name| Record::new(RecordId::new(), name))
        .collect()
}
