//! Error types for spreadsheet interchange.

use thiserror::Error;

/// Result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;

/// Errors that can occur while encoding or decoding a workbook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// Rows could not be written as a workbook.
    #[error("encoding failed: {message}")]
    EncodingFailed {
        /// Description of the encoding error.
        message: String,
    },

    /// Bytes are not a readable workbook.
    #[error("decoding failed: {message}")]
    DecodingFailed {
        /// Description of the decoding error.
        message: String,
    },

    /// The worksheet name is not allowed.
    #[error("invalid sheet name {name:?}: {reason}")]
    InvalidSheetName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The data does not fit in a worksheet.
    #[error("too many {what}: {count} exceeds {max}")]
    TooLarge {
        /// Rows or columns.
        what: &'static str,
        /// Requested count.
        count: usize,
        /// Worksheet limit.
        max: usize,
    },
}

impl SheetError {
    /// Creates an encoding failed error.
    pub fn encoding_failed(message: impl Into<String>) -> Self {
        Self::EncodingFailed {
            message: message.into(),
        }
    }

    /// Creates a decoding failed error.
    pub fn decoding_failed(message: impl Into<String>) -> Self {
        Self::DecodingFailed {
            message: message.into(),
        }
    }
}
