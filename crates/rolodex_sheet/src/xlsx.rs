//! Office Open XML (`.xlsx`) codec.
//!
//! Writing goes through `rust_xlsxwriter`, reading through `calamine`.
//! Every cell is written as a text cell so names such as `"007"` survive a
//! round trip unchanged. On read, numeric and boolean cells are rendered as
//! text.
//!
//! An empty cell inside a row is still written, so a row like `[""]` keeps
//! its position and decodes as `[""]`, while a row with no cells decodes as
//! `[]`. The writer drops empty string cells, so empty text goes out as a
//! formula evaluating to `""`, which decoding recognizes by its
//! formula text.

use crate::codec::{Row, SheetCodec};
use crate::error::{SheetError, SheetResult};
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use rust_xlsxwriter::{Formula, Workbook};
use std::io::Cursor;
use tracing::debug;

/// Worksheet name used when none is configured.
pub const DEFAULT_SHEET_NAME: &str = "Contacts";

/// Longest worksheet name Excel accepts, in characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const MAX_ROWS: usize = 1_048_576;
const MAX_COLS: usize = 16_384;
const FORBIDDEN_NAME_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Checks that `name` can be used as a worksheet name.
///
/// # Errors
///
/// Returns [`SheetError::InvalidSheetName`] if the name is empty, too long,
/// contains one of `[ ] : * ? / \`, or starts or ends with an apostrophe.
pub fn validate_sheet_name(name: &str) -> SheetResult<()> {
    let reason = if name.is_empty() {
        Some("must not be empty")
    } else if name.chars().count() > MAX_SHEET_NAME_LEN {
        Some("longer than 31 characters")
    } else if name.contains(FORBIDDEN_NAME_CHARS) {
        Some("contains one of [ ] : * ? / \\")
    } else if name.starts_with('\'') || name.ends_with('\'') {
        Some("starts or ends with an apostrophe")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SheetError::InvalidSheetName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Reads and writes `.xlsx` workbooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XlsxCodec {
    sheet_name: String,
}

impl XlsxCodec {
    /// Creates a codec that writes a worksheet called `sheet_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a valid worksheet name.
    pub fn new(sheet_name: impl Into<String>) -> SheetResult<Self> {
        let sheet_name = sheet_name.into();
        validate_sheet_name(&sheet_name)?;
        Ok(Self { sheet_name })
    }

    /// Returns the worksheet name used when encoding.
    #[must_use]
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }
}

impl Default for XlsxCodec {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl SheetCodec for XlsxCodec {
    fn encode(&self, rows: &[Row]) -> SheetResult<Vec<u8>> {
        if rows.len() > MAX_ROWS {
            return Err(SheetError::TooLarge {
                what: "rows",
                count: rows.len(),
                max: MAX_ROWS,
            });
        }
        if let Some(widest) = rows.iter().map(Vec::len).max().filter(|&w| w > MAX_COLS) {
            return Err(SheetError::TooLarge {
                what: "columns",
                count: widest,
                max: MAX_COLS,
            });
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(self.sheet_name.as_str())
            .map_err(|e| SheetError::encoding_failed(e.to_string()))?;

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                let written = if cell.is_empty() {
                    worksheet.write_formula(r, c, empty_text())
                } else {
                    worksheet.write_string(r, c, cell.as_str())
                };
                written.map_err(|e| SheetError::encoding_failed(e.to_string()))?;
            }
        }

        let bytes = workbook
            .save_to_buffer()
            .map_err(|e| SheetError::encoding_failed(e.to_string()))?;
        debug!(rows = rows.len(), bytes = bytes.len(), "encoded workbook");
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> SheetResult<Vec<Row>> {
        let mut workbook = open_workbook_from_rs::<Xlsx<_>, _>(Cursor::new(bytes))
            .map_err(|e| SheetError::decoding_failed(e.to_string()))?;

        let Some(name) = workbook.sheet_names().first().cloned() else {
            return Ok(Vec::new());
        };
        let values = workbook
            .worksheet_range(&name)
            .map_err(|e| SheetError::decoding_failed(e.to_string()))?;
        let formulas = workbook
            .worksheet_formula(&name)
            .map_err(|e| SheetError::decoding_failed(e.to_string()))?;

        // calamine ranges start at the first used cell; `Grid` works in
        // absolute positions.
        let mut grid = Grid::default();
        if let Some((r0, c0)) = values.start() {
            for (r, c, cell) in values.used_cells() {
                if let Some(text) = cell_text(cell) {
                    grid.put(r0 as usize + r, c0 as usize + c, text);
                }
            }
        }
        if let Some((r0, c0)) = formulas.start() {
            for (r, c, formula) in formulas.used_cells() {
                if is_empty_text(formula) {
                    grid.put(r0 as usize + r, c0 as usize + c, String::new());
                }
            }
        }

        let rows = grid.into_rows();
        debug!(rows = rows.len(), "decoded workbook");
        Ok(rows)
    }
}

/// Sparse cells placed by absolute position.
#[derive(Default)]
struct Grid {
    rows: Vec<Vec<Option<String>>>,
}

impl Grid {
    fn put(&mut self, row: usize, col: usize, text: String) {
        if self.rows.len() <= row {
            self.rows.resize(row + 1, Vec::new());
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, None);
        }
        cells[col] = Some(text);
    }

    fn into_rows(self) -> Vec<Row> {
        self.rows
            .into_iter()
            .map(|cells| cells.into_iter().map(Option::unwrap_or_default).collect())
            .collect()
    }
}

const EMPTY_TEXT_FORMULA: &str = "\"\"";

fn empty_text() -> Formula {
    Formula::new(format!("={EMPTY_TEXT_FORMULA}")).set_result("")
}

fn is_empty_text(formula: &str) -> bool {
    formula.trim_start_matches('=') == EMPTY_TEXT_FORMULA
}

/// Returns the text of a cell, `None` for a cell that holds nothing.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Row> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn roundtrip_rows() {
        let codec = XlsxCodec::default();
        let input = rows(&[&["Name"], &["alice"], &["张三"], &["007"]]);
        let bytes = codec.encode(&input).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), input);
    }

    #[test]
    fn blank_leading_cells_keep_positions() {
        let codec = XlsxCodec::default();
        let input = rows(&[&[], &["", "phone"], &["Bob", "123"]]);
        let bytes = codec.encode(&input).unwrap();
        let decoded = codec.decode(&bytes).unwrap();

        assert_eq!(decoded.len(), 3);
        assert!(decoded[0].is_empty());
        assert_eq!(decoded[1], vec!["", "phone"]);
        assert_eq!(decoded[2], vec!["Bob", "123"]);
    }

    #[test]
    fn empty_text_cells_keep_their_rows() {
        let codec = XlsxCodec::default();
        let input = rows(&[&["Name"], &["Ann"], &[""], &["Bob"], &[""], &[""]]);
        let bytes = codec.encode(&input).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), input);
    }

    #[test]
    fn rows_without_cells_stay_empty() {
        let codec = XlsxCodec::default();
        let input = rows(&[&["Name"], &[], &["Bob"]]);
        let bytes = codec.encode(&input).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), input);
    }

    #[test]
    fn empty_rows_encode_to_empty_sheet() {
        let codec = XlsxCodec::default();
        let bytes = codec.encode(&[]).unwrap();
        assert!(codec.decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let codec = XlsxCodec::default();
        let err = codec.decode(b"definitely not a workbook").unwrap_err();
        assert!(matches!(err, SheetError::DecodingFailed { .. }));
    }

    #[test]
    fn custom_sheet_name() {
        let codec = XlsxCodec::new("联系人").unwrap();
        assert_eq!(codec.sheet_name(), "联系人");
        let bytes = codec.encode(&rows(&[&["x"]])).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), rows(&[&["x"]]));
    }

    #[test]
    fn sheet_name_validation() {
        assert!(validate_sheet_name("Contacts").is_ok());
        assert!(validate_sheet_name("").is_err());
        assert!(validate_sheet_name("a/b").is_err());
        assert!(validate_sheet_name("[x]").is_err());
        assert!(validate_sheet_name("'quoted").is_err());
        assert!(validate_sheet_name(&"x".repeat(32)).is_err());
        assert!(validate_sheet_name(&"名".repeat(31)).is_ok());
        assert!(XlsxCodec::new("bad?").is_err());
    }

    #[test]
    fn too_many_columns_rejected() {
        let codec = XlsxCodec::default();
        let wide = vec![vec![String::from("x"); MAX_COLS + 1]];
        assert!(matches!(
            codec.encode(&wide),
            Err(SheetError::TooLarge { what: "columns", .. })
        ));
    }
}
