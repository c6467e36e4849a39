//! # Rolodex Store
//!
//! Record store adapters for Rolodex.
//!
//! The directory index never talks to storage directly; it receives records
//! from a [`RecordStore`]. Stores own identifier assignment and persistence.
//!
//! ## Available Stores
//!
//! - [`MemoryStore`] - For tests and ephemeral sessions
//! - [`FileStore`] - Append-only CBOR log on disk, single writer
//! - [`MockStore`] - Wraps a memory store and injects failures
//!
//! ## Example
//!
//! ```rust
//! use rolodex_store::{MemoryStore, RecordStore};
//!
//! let store = MemoryStore::new();
//! let id = store.add("alice").unwrap();
//! let records = store.list().unwrap();
//! assert_eq!(records[0].id, id);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod file;
mod memory;
mod mock;
mod store;

pub use error::{StoreError, StoreResult};
pub use file::{FileStore, LOCK_FILE, LOG_FILE};
pub use memory::MemoryStore;
pub use mock::MockStore;
pub use store::RecordStore;
