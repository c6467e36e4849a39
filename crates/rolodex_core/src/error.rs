//! Error types for Rolodex core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A contact name was empty where a name is required.
    #[error("contact name must not be empty")]
    EmptyName,

    /// A character is not a symbol of the alphabet rail.
    #[error("not an alphabet key: {0:?}")]
    InvalidBucketKey(char),

    /// A record identifier could not be parsed.
    #[error("invalid record id: {message}")]
    InvalidRecordId {
        /// Description of the parse failure.
        message: String,
    },
}

impl CoreError {
    /// Creates an invalid record id error.
    pub fn invalid_record_id(message: impl Into<String>) -> Self {
        Self::InvalidRecordId {
            message: message.into(),
        }
    }
}
