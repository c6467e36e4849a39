//! # Rolodex Sheet
//!
//! Spreadsheet interchange for Rolodex contact lists.
//!
//! The byte layout of a workbook belongs to the codec; this crate only sees
//! rows of text.
//!
//! - [`SheetCodec`] turns rows into workbook bytes and back ([`XlsxCodec`])
//! - [`ContactSheet`] maps contact names onto rows: one header row, then one
//!   name per row in column 1
//! - [`MockCodec`] wraps the `.xlsx` codec and fails on demand, for tests
//!
//! ## Example
//!
//! ```
//! use rolodex_sheet::{ContactSheet, SheetCodec, XlsxCodec};
//!
//! let sheet = ContactSheet::default();
//! let codec = XlsxCodec::default();
//!
//! let bytes = codec.encode(&sheet.to_rows(["alice", "Bob"])).unwrap();
//! let names = sheet.names_from_rows(codec.decode(&bytes).unwrap());
//! assert_eq!(names, vec!["alice", "Bob"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod codec;
mod contacts;
mod error;
mod mock;
mod xlsx;

pub use codec::{Row, SheetCodec};
pub use contacts::{ContactSheet, DEFAULT_HEADER};
pub use error::{SheetError, SheetResult};
pub use mock::MockCodec;
pub use xlsx::{validate_sheet_name, XlsxCodec, DEFAULT_SHEET_NAME, MAX_SHEET_NAME_LEN};
