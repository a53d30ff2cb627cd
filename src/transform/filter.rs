//! Filter stage: drop rows that fail any per-column predicate.
//!
//! Predicates across different columns compose with logical AND over a
//! single row mask. Columns without an entry in the filter spec impose no
//! constraint.

use std::collections::{BTreeMap, HashSet};

use super::config::ColumnFilter;
use crate::error::{TransformError, TransformResult};
use crate::model::{Column, Table};

/// Apply every per-column filter, keeping only rows that satisfy all of
/// them.
///
/// Set-membership filters apply to text columns, inclusive range filters
/// to numeric columns; a mismatch is a type error. An inverted range
/// (`min > max`) is rejected before any row is evaluated — it should not
/// occur when bounds come from the column's own descriptor, but a stale
/// configuration can produce one.
pub fn apply(table: Table, filters: &BTreeMap<String, ColumnFilter>) -> TransformResult<Table> {
    if filters.is_empty() {
        return Ok(table);
    }

    let mut mask = vec![true; table.row_count()];

    for (name, filter) in filters {
        let column = table
            .column_by_name(name)
            .ok_or_else(|| TransformError::UnknownColumn {
                column: name.clone(),
                stage: "filter",
            })?;

        apply_one(name, filter, column, &mut mask)?;
    }

    Ok(table.filter_rows(&mask))
}

/// AND one column's predicate into the row mask.
fn apply_one(
    name: &str,
    filter: &ColumnFilter,
    column: &Column,
    mask: &mut [bool],
) -> TransformResult<()> {
    match (filter, column) {
        (ColumnFilter::Values { values }, Column::Text(cells)) => {
            let allowed: HashSet<&str> = values.iter().map(String::as_str).collect();
            for (keep, cell) in mask.iter_mut().zip(cells) {
                *keep &= allowed.contains(cell.as_str());
            }
            Ok(())
        }
        (ColumnFilter::Range { min, max }, Column::Numeric(cells)) => {
            if min > max {
                return Err(TransformError::InvertedRange {
                    column: name.to_string(),
                    min: *min,
                    max: *max,
                });
            }
            for (keep, cell) in mask.iter_mut().zip(cells) {
                *keep &= *min <= *cell && *cell <= *max;
            }
            Ok(())
        }
        (ColumnFilter::Values { .. }, Column::Numeric(_)) => Err(TransformError::KindMismatch {
            column: name.to_string(),
            expected: "text",
        }),
        (ColumnFilter::Range { .. }, Column::Text(_)) => Err(TransformError::KindMismatch {
            column: name.to_string(),
            expected: "numeric",
        }),
    }
}
