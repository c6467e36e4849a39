//! # Rolodex Core
//!
//! Alphabetical directory index and search filter for Rolodex.
//!
//! This crate is pure data manipulation with no I/O:
//! - [`Record`] and [`RecordId`] model a contact as the store hands it out
//! - [`BucketKey`] and [`classify`] map a display name onto the alphabet rail
//! - [`Directory`] partitions a record set into one bucket per key
//! - [`FilteredDirectory`] is the result of a substring query over a directory
//!
//! ## Key Invariants
//!
//! - A directory always has exactly one bucket per [`ALPHABET`] symbol, in
//!   alphabet order, empty buckets included
//! - Every record of a build lands in exactly one bucket
//! - A filtered directory never contains an empty bucket, except for the empty
//!   query which yields the full directory unchanged
//! - Filtering always starts from the full directory, never from a previous
//!   filtered result
//!
//! ## Example
//!
//! ```
//! use rolodex_core::{BucketKey, Directory, DirectoryView, Record, RecordId};
//!
//! let directory = Directory::build(vec![
//!     Record::new(RecordId::new(), "alice"),
//!     Record::new(RecordId::new(), "Bob"),
//! ]);
//! assert_eq!(directory.bucket(BucketKey::letter('A').unwrap()).len(), 1);
//!
//! let view = directory.filter("li");
//! assert_eq!(view.buckets().len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod alphabet;
mod directory;
mod error;
mod filter;
mod record;

pub use alphabet::{classify, is_logographic, BucketKey, ALPHABET, LOGOGRAPHIC_RANGE};
pub use directory::{Bucket, Directory, DirectoryView};
pub use error::{CoreError, CoreResult};
pub use filter::{filter, normalize_query, FilteredDirectory};
pub use record::{validate_name, Record, RecordId};
