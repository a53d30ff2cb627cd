//! High-level pipeline API: decode, transform, encode.
//!
//! The stage order is fixed and deliberate: reorder first so later stages
//! only see the columns the user kept, filter before group so aggregates
//! reflect only retained rows, group before sort so the user can sort on
//! aggregated results.
//!
//! # Example
//!
//! ```rust,ignore
//! use sheetprep::{process_workbook, PipelineConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = std::fs::read("catalog.xlsx")?;
//!     let config = PipelineConfig::from_json(r#"{ "group_by": ["Region"] }"#)?;
//!
//!     let processed = process_workbook(&bytes, &config)?;
//!     std::fs::write("processed_data.xlsx", &processed.workbook)?;
//!     Ok(())
//! }
//! ```

use tracing::info;

use super::config::PipelineConfig;
use super::{filter, group, reorder, sort};
use crate::codec::{decode_workbook, encode_workbook};
use crate::error::{PipelineResult, TransformResult};
use crate::model::Table;

/// Result of a complete pipeline run.
#[derive(Debug, Clone)]
pub struct Processed {
    /// The transformed table, for display.
    pub table: Table,
    /// The transformed table serialized as an `.xlsx` buffer, for
    /// download.
    pub workbook: Vec<u8>,
}

/// Apply the four transformation stages to a table.
///
/// Pure: no side effects beyond the returned table. Stages whose spec is
/// empty pass the table through unchanged, so a default configuration is
/// the identity transform.
pub fn apply(table: Table, config: &PipelineConfig) -> TransformResult<Table> {
    let table = reorder::apply(table, &config.column_order)?;
    let table = filter::apply(table, &config.filters)?;
    let table = group::apply(table, &config.group_by)?;
    sort::apply(table, &config.sort_by)
}

/// Run the full pipeline on an uploaded spreadsheet buffer.
///
/// Decodes the buffer into a table, applies the user's configuration, and
/// re-encodes the result. This is the single entry point the upload
/// handler needs; every run operates on a freshly decoded table, so
/// nothing is shared across invocations.
pub fn process_workbook(bytes: &[u8], config: &PipelineConfig) -> PipelineResult<Processed> {
    let table = decode_workbook(bytes)?;
    info!(
        columns = table.column_count(),
        rows = table.row_count(),
        "decoded workbook"
    );

    let table = apply(table, config)?;
    info!(
        columns = table.column_count(),
        rows = table.row_count(),
        "applied transformations"
    );

    let workbook = encode_workbook(&table)?;
    info!(bytes = workbook.len(), "encoded workbook");

    Ok(Processed { table, workbook })
}
