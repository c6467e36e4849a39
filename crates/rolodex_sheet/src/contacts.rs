//! Mapping between contact names and worksheet rows.

use crate::codec::Row;

/// Header written above the names column.
pub const DEFAULT_HEADER: &str = "Name";

/// Layout of a contact worksheet.
///
/// Row 1 is a header. Every following row that has at least one cell is one
/// contact whose name is the text in column 1, empty text included. A row
/// with text only in other columns counts as a contact with an empty name;
/// names are not validated. Rows without any cell are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSheet {
    header: String,
}

impl ContactSheet {
    /// Creates a layout with a custom header label.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }

    /// Returns the header label.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Builds the rows for an export: the header, then one name per row.
    pub fn to_rows<I, S>(&self, names: I) -> Vec<Row>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        std::iter::once(vec![self.header.clone()])
            .chain(names.into_iter().map(|n| vec![n.as_ref().to_string()]))
            .collect()
    }

    /// Extracts contact names from decoded rows.
    ///
    /// The first row is always treated as the header, whatever it contains.
    /// Rows without any cell are skipped.
    #[must_use]
    pub fn names_from_rows(&self, rows: Vec<Row>) -> Vec<String> {
        rows.into_iter()
            .skip(1)
            .filter_map(|row| row.into_iter().next())
            .collect()
    }
}

impl Default for ContactSheet {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER)
    }
}
