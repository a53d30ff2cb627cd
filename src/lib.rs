//! # Sheetprep - spreadsheet reorganization pipeline
//!
//! Sheetprep takes an uploaded spreadsheet, applies a user-configured
//! sequence of tabular transformations, and produces a transformed table
//! plus a downloadable spreadsheet buffer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────────┐     ┌─────────────┐
//! │ xlsx / xls  │────▶│   Decode    │────▶│ Reorder ▸ Filter ▸   │────▶│    xlsx     │
//! │   (bytes)   │     │  (typed)    │     │ Group ▸ Sort         │     │  (1 sheet)  │
//! └─────────────┘     └─────────────┘     └──────────────────────┘     └─────────────┘
//! ```
//!
//! The widget layer that collects the user's selections is out of scope:
//! it produces a [`PipelineConfig`] and consumes the resulting
//! [`Table`] and buffer. The pipeline is stateless and re-run in full on
//! every configuration change.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sheetprep::{process_workbook, PipelineConfig};
//!
//! let config = PipelineConfig::from_json(r#"{ "group_by": ["Region"] }"#)?;
//! let processed = process_workbook(&uploaded_bytes, &config)?;
//! std::fs::write("processed_data.xlsx", &processed.workbook)?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`model`] - Table, columns, and observed column domains
//! - [`codec`] - Spreadsheet decode/encode
//! - [`transform`] - Configuration and the four pipeline stages

// Core modules
pub mod error;
pub mod model;

// Spreadsheet I/O
pub mod codec;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    DecodeError,
    EncodeError,
    TransformError,
    PipelineError,
    DecodeResult,
    EncodeResult,
    TransformResult,
    PipelineResult,
};

// =============================================================================
// Re-exports - Model
// =============================================================================

pub use model::{
    Table,
    Column,
    ColumnKind,
    ColumnDescriptor,
    ColumnDomain,
};

// =============================================================================
// Re-exports - Codec
// =============================================================================

pub use codec::{
    decode_workbook,
    decode_workbook_file,
    encode_workbook,
    OUTPUT_SHEET_NAME,
};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    apply,
    process_workbook,
    ColumnFilter,
    PipelineConfig,
    Processed,
    SortDirection,
    SortKey,
};
