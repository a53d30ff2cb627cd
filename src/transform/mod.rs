//! Table transformation pipeline.
//!
//! The four stages run in a fixed order: reorder, filter, group, sort.
//! Each stage is a pure function from a [`Table`](crate::model::Table) to a
//! new table; [`pipeline::apply`] composes them.

pub mod config;
pub mod filter;
pub mod group;
pub mod pipeline;
pub mod reorder;
pub mod sort;

pub use config::{ColumnFilter, PipelineConfig, SortDirection, SortKey};
pub use pipeline::{apply, process_workbook, Processed};

use crate::error::{TransformError, TransformResult};
use crate::model::Table;

/// Resolve a list of column names to table positions, rejecting unknown
/// and duplicate names. Used by the reorder, group, and sort stages.
pub(crate) fn resolve_columns(
    table: &Table,
    names: impl Iterator<Item = impl AsRef<str>>,
    stage: &'static str,
) -> TransformResult<Vec<usize>> {
    let mut indices = Vec::new();

    for name in names {
        let name = name.as_ref();
        let index = table
            .index_of(name)
            .ok_or_else(|| TransformError::UnknownColumn {
                column: name.to_string(),
                stage,
            })?;
        if indices.contains(&index) {
            return Err(TransformError::DuplicateColumn {
                column: name.to_string(),
                stage,
            });
        }
        indices.push(index);
    }

    Ok(indices)
}
