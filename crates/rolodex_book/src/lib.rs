//! # Rolodex Book
//!
//! The contact list session: a [`ContactBook`] ties a record store, the
//! directory index and a spreadsheet codec together.
//!
//! ## Data Flow
//!
//! ```text
//! load:    RecordStore::list ─► Directory::build ─► filter(query) ─► view
//! search:  query ─► filter(full directory) ─► view
//! import:  bytes ─► SheetCodec::decode ─► RecordStore::add × n ─► load
//! export:  RecordStore::list ─► SheetCodec::encode ─► atomic file write
//! ```
//!
//! ## Failure Semantics
//!
//! - A failed load leaves the directory empty and returns
//!   [`BookError::Retrieval`]
//! - A failed import decode adds nothing
//! - Any failed add during an import makes the whole import fail; records
//!   already stored are kept and the directory is not reloaded
//! - A failed export leaves no file behind

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod config;
mod error;
mod export;

pub use book::{ContactBook, ExportReport, ImportReport};
pub use config::{BookConfig, DEFAULT_EXPORT_FILE};
pub use error::{BookError, BookResult, FailureKind};
