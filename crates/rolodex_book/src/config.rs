//! Contact book configuration.

use crate::error::{BookError, BookResult};
use rolodex_sheet::{validate_sheet_name, DEFAULT_HEADER, DEFAULT_SHEET_NAME};

/// Default file name for exports.
pub const DEFAULT_EXPORT_FILE: &str = "contacts.xlsx";

/// Configuration for a contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    /// Worksheet name used for exports.
    pub sheet_name: String,

    /// Header label written above the names column.
    pub header_label: String,

    /// File name used when exporting into a directory.
    pub export_file_name: String,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            header_label: DEFAULT_HEADER.to_string(),
            export_file_name: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl BookConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the worksheet name.
    #[must_use]
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Sets the header label.
    #[must_use]
    pub fn header_label(mut self, label: impl Into<String>) -> Self {
        self.header_label = label.into();
        self
    }

    /// Sets the export file name.
    #[must_use]
    pub fn export_file_name(mut self, name: impl Into<String>) -> Self {
        self.export_file_name = name.into();
        self
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Config`] describing the first invalid field.
    pub fn validate(&self) -> BookResult<()> {
        validate_sheet_name(&self.sheet_name).map_err(|e| BookError::config(e.to_string()))?;
        if self.header_label.is_empty() {
            return Err(BookError::config("header label must not be empty"));
        }
        if self.export_file_name.is_empty()
            || self.export_file_name.contains(['/', '\\'])
        {
            return Err(BookError::config(format!(
                "export file name must be a plain file name: {:?}",
                self.export_file_name
            )));
        }
        Ok(())
    }
}
