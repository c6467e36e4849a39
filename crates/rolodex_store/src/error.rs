//! Error types for record stores.

use std::io;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing records.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backend refused or failed the request.
    #[error("backend error: {message}")]
    Backend {
        /// Description of the failure.
        message: String,
    },

    /// The record log is corrupted.
    #[error("store corrupted at offset {offset}: {message}")]
    Corrupted {
        /// Byte offset of the bad frame.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// A failed append could not be removed from the log; the store accepts
    /// no more writes until it is reopened.
    #[error("record log damaged at offset {offset}: reopen the store")]
    Damaged {
        /// Start of the partial frame.
        offset: u64,
    },

    /// A record could not be encoded.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// Another process holds the store.
    #[error("store locked: another process has exclusive access")]
    Locked,
}

impl StoreError {
    /// Creates a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Creates a corruption error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::Corrupted {
            offset,
            message: message.into(),
        }
    }
}
