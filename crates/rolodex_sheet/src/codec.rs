//! Spreadsheet codec trait.

use crate::error::SheetResult;

/// One worksheet row; cell `i` is column `i + 1`.
pub type Row = Vec<String>;

/// Converts between rows of text and workbook bytes.
///
/// # Invariants
///
/// - Rows and columns are positional: row `0` is the first worksheet row and
///   cell `0` is column `A`, even when leading cells are blank
/// - Blank cells decode as empty strings
/// - `decode(encode(rows))` returns the same text for every non-empty cell
pub trait SheetCodec: Send + Sync {
    /// Writes `rows` to the first worksheet of a new workbook.
    ///
    /// # Errors
    ///
    /// Returns an error if the workbook cannot be produced.
    fn encode(&self, rows: &[Row]) -> SheetResult<Vec<u8>>;

    /// Reads every row of the first worksheet.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` are not a readable workbook.
    fn decode(&self, bytes: &[u8]) -> SheetResult<Vec<Row>>;
}
