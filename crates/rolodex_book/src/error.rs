//! Error types for contact book operations.
//!
//! Every failure ends the user action that triggered it. Nothing here is
//! retried automatically, and every variant is meant to reach the user.

use rolodex_core::CoreError;
use rolodex_sheet::SheetError;
use rolodex_store::StoreError;
use std::io;
use thiserror::Error;

/// Result type for contact book operations.
pub type BookResult<T> = Result<T, BookError>;

/// Coarse classification of a [`BookError`] for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The store could not be read.
    Retrieval,
    /// The import file could not be read.
    ImportRead,
    /// The import file is not a readable spreadsheet.
    ImportDecode,
    /// One or more imported records could not be stored.
    ImportWrite,
    /// The export spreadsheet could not be produced.
    ExportEncode,
    /// The export file could not be written.
    ExportWrite,
    /// A single contact could not be stored.
    Add,
    /// The caller passed an invalid name or letter.
    InvalidInput,
    /// The book configuration is invalid.
    Config,
}

/// Errors that can occur in contact book operations.
#[derive(Debug, Error)]
pub enum BookError {
    /// Listing records failed; the directory is shown empty.
    #[error("failed to load contacts: {0}")]
    Retrieval(#[source] StoreError),

    /// Reading the import file failed; nothing was added.
    #[error("failed to read import file: {0}")]
    ImportRead(#[source] io::Error),

    /// Decoding the import spreadsheet failed; nothing was added.
    #[error("failed to decode import file: {0}")]
    ImportDecode(#[source] SheetError),

    /// At least one imported record failed to store.
    ///
    /// Records stored before or after the failing ones are not rolled back.
    #[error("import failed: {failed} of {attempted} contacts could not be stored: {first}")]
    ImportWrite {
        /// Number of failed add calls.
        failed: usize,
        /// Number of add calls made.
        attempted: usize,
        /// The first store error seen.
        #[source]
        first: StoreError,
    },

    /// Encoding the export spreadsheet failed.
    #[error("failed to encode export file: {0}")]
    ExportEncode(#[source] SheetError),

    /// Writing the export file failed; no partial file is left behind.
    #[error("failed to write export file: {0}")]
    ExportWrite(#[source] io::Error),

    /// Storing a single contact failed.
    #[error("failed to add contact: {0}")]
    Add(#[source] StoreError),

    /// Invalid caller input.
    #[error("invalid input: {0}")]
    Invalid(#[from] CoreError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl BookError {
    /// Returns the failure class of this error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Retrieval(_) => FailureKind::Retrieval,
            Self::ImportRead(_) => FailureKind::ImportRead,
            Self::ImportDecode(_) => FailureKind::ImportDecode,
            Self::ImportWrite { .. } => FailureKind::ImportWrite,
            Self::ExportEncode(_) => FailureKind::ExportEncode,
            Self::ExportWrite(_) => FailureKind::ExportWrite,
            Self::Add(_) => FailureKind::Add,
            Self::Invalid(_) => FailureKind::InvalidInput,
            Self::Config(_) => FailureKind::Config,
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
