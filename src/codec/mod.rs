//! Spreadsheet decode/encode between byte buffers and [`Table`].
//!
//! Decoding accepts both legacy (`.xls`) and modern (`.xlsx`) workbooks,
//! auto-detected from the buffer. Only the first worksheet is read; the
//! first row is the header. Column types are inferred once here: a column
//! whose every data cell is a number becomes [`Column::Numeric`], anything
//! else becomes [`Column::Text`].
//!
//! Encoding writes a single worksheet named `Processed Data` with a header
//! row of column names followed by one row per data row.

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use rust_xlsxwriter::Workbook;
use std::io::Cursor;
use std::path::Path;

use crate::error::{DecodeError, DecodeResult, EncodeResult};
use crate::model::{Column, Table};

/// Sheet name used for the output workbook.
pub const OUTPUT_SHEET_NAME: &str = "Processed Data";

// =============================================================================
// Decoding
// =============================================================================

/// Decode an uploaded spreadsheet buffer into a [`Table`].
///
/// # Example
/// ```ignore
/// let table = decode_workbook(&bytes)?;
/// println!("{} columns, {} rows", table.column_count(), table.row_count());
/// ```
pub fn decode_workbook(bytes: &[u8]) -> DecodeResult<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(DecodeError::NoWorksheet)?;

    let range = workbook.worksheet_range(&sheet_name)?;
    if range.is_empty() {
        return Err(DecodeError::EmptySheet(sheet_name));
    }

    let mut rows = range.rows();
    let header_row = rows.next().ok_or(DecodeError::EmptySheet(sheet_name))?;
    let headers = decode_headers(header_row)?;

    let data_rows: Vec<&[Data]> = rows.collect();
    let columns = headers
        .into_iter()
        .enumerate()
        .map(|(col, name)| (name, decode_column(&data_rows, col)))
        .collect();

    // Headers are unique and every column gets one cell per data row, so
    // this only fails on a degenerate zero-column sheet.
    Ok(Table::new(columns)?)
}

/// Decode a spreadsheet file from disk.
///
/// Convenience wrapper around [`decode_workbook`] for callers that have a
/// path instead of an uploaded buffer.
pub fn decode_workbook_file<P: AsRef<Path>>(path: P) -> DecodeResult<Table> {
    let bytes = std::fs::read(path.as_ref())?;
    decode_workbook(&bytes)
}

/// Extract and validate the header row.
fn decode_headers(row: &[Data]) -> DecodeResult<Vec<String>> {
    let mut headers = Vec::with_capacity(row.len());

    for (i, cell) in row.iter().enumerate() {
        let name = match cell {
            Data::Empty => return Err(DecodeError::EmptyHeader(i)),
            other => render_cell(other),
        };
        if name.trim().is_empty() {
            return Err(DecodeError::EmptyHeader(i));
        }
        if headers.contains(&name) {
            return Err(DecodeError::DuplicateHeader(name));
        }
        headers.push(name);
    }

    Ok(headers)
}

/// Build one typed column from the data rows.
///
/// A column is numeric only when it has at least one data row and every
/// cell is a number; zero-row columns and columns with any string, bool,
/// empty, or error cell fall back to text.
fn decode_column(rows: &[&[Data]], col: usize) -> Column {
    let numeric = !rows.is_empty()
        && rows
            .iter()
            .all(|row| matches!(row.get(col), Some(Data::Float(_)) | Some(Data::Int(_))));

    if numeric {
        Column::Numeric(
            rows.iter()
                .map(|row| match &row[col] {
                    Data::Float(f) => *f,
                    Data::Int(i) => *i as f64,
                    _ => unreachable!("checked above"),
                })
                .collect(),
        )
    } else {
        Column::Text(
            rows.iter()
                .map(|row| row.get(col).map(render_cell).unwrap_or_default())
                .collect(),
        )
    }
}

/// Render a single cell as text.
///
/// Whole floats drop their fractional part so a `42.0` cell reads back as
/// `"42"`, matching how the storage format displays it.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => render_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => render_number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}

fn render_number(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode a [`Table`] into an `.xlsx` buffer with a single sheet named
/// `Processed Data`: a header row of column names, then one row per data
/// row.
pub fn encode_workbook(table: &Table) -> EncodeResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(OUTPUT_SHEET_NAME)?;

    for (col, name) in table.column_names().iter().enumerate() {
        sheet.write_string(0, col as u16, name.as_str())?;
    }

    for col in 0..table.column_count() {
        match table.column(col) {
            Column::Numeric(values) => {
                for (row, value) in values.iter().enumerate() {
                    sheet.write_number(row as u32 + 1, col as u16, *value)?;
                }
            }
            Column::Text(values) => {
                for (row, value) in values.iter().enumerate() {
                    sheet.write_string(row as u32 + 1, col as u16, value.as_str())?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

// =============================================================================
// Tests
// =============================================================================
