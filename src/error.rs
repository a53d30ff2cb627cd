//! Error types for the sheetprep transformation pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`DecodeError`] - spreadsheet decoding errors
//! - [`EncodeError`] - spreadsheet encoding errors
//! - [`TransformError`] - table transformation errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Decode Errors
// =============================================================================

/// Errors while decoding an uploaded spreadsheet into a table.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer is not a valid spreadsheet.
    #[error("Invalid spreadsheet: {0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook contains no worksheets.
    #[error("Workbook contains no worksheets")]
    NoWorksheet,

    /// The worksheet has no cells at all.
    #[error("Worksheet '{0}' is empty")]
    EmptySheet(String),

    /// The header row contains an empty cell.
    #[error("Empty header in column {0}")]
    EmptyHeader(usize),

    /// Two columns share the same header.
    #[error("Duplicate column header: {0}")]
    DuplicateHeader(String),

    /// The decoded cells do not form a well-shaped table.
    #[error("Malformed table: {0}")]
    Structure(#[from] TransformError),
}

// =============================================================================
// Encode Errors
// =============================================================================

/// Errors while encoding a table back into a spreadsheet buffer.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The xlsx writer failed.
    #[error("Failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

// =============================================================================
// Transform Errors
// =============================================================================

/// Errors raised by the transformation stages.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A configuration references a column the table does not have.
    #[error("Unknown column '{column}' in {stage} spec")]
    UnknownColumn { column: String, stage: &'static str },

    /// A configuration names the same column twice.
    #[error("Duplicate column '{column}' in {stage} spec")]
    DuplicateColumn { column: String, stage: &'static str },

    /// A filter kind does not match the column kind, e.g. a numeric
    /// range filter on a text column.
    #[error("Filter on column '{column}' expects a {expected} column")]
    KindMismatch {
        column: String,
        expected: &'static str,
    },

    /// A numeric range filter with min > max.
    #[error("Inverted range on column '{column}': min {min} > max {max}")]
    InvertedRange { column: String, min: f64, max: f64 },

    /// Malformed table: columns of unequal length.
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        found: usize,
    },

    /// Malformed table: two columns share a name.
    #[error("Duplicate column name: {0}")]
    DuplicateName(String),

    /// A table with no columns.
    #[error("Table has no columns")]
    EmptyTable,

    /// Malformed configuration JSON.
    #[error("Invalid pipeline config: {0}")]
    Config(#[from] serde_json::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by
/// [`crate::transform::pipeline::process_workbook`]. It wraps all
/// lower-level errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Spreadsheet decoding error.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Table transformation error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Spreadsheet encoding error.
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
