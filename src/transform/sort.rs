//! Sort stage: stable multi-key row sort with per-key direction.

use std::cmp::Ordering;

use super::config::{SortDirection, SortKey};
use super::resolve_columns;
use crate::error::TransformResult;
use crate::model::{Column, Table};

/// Sort rows by the given keys, evaluated left-to-right as primary,
/// secondary, ... with each key's own direction.
///
/// The sort is stable: rows comparing equal on every key keep their
/// relative order. An empty key list passes the table through unchanged.
pub fn apply(table: Table, sort_by: &[SortKey]) -> TransformResult<Table> {
    if sort_by.is_empty() {
        return Ok(table);
    }

    let indices = resolve_columns(&table, sort_by.iter().map(|k| k.column.as_str()), "sort")?;

    let mut order: Vec<usize> = (0..table.row_count()).collect();
    order.sort_by(|&a, &b| {
        for (key, &i) in sort_by.iter().zip(&indices) {
            let ord = compare_cells(table.column(i), a, b);
            let ord = match key.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });

    Ok(table.take_rows(&order))
}

fn compare_cells(column: &Column, a: usize, b: usize) -> Ordering {
    match column {
        Column::Numeric(v) => v[a].total_cmp(&v[b]),
        Column::Text(v) => v[a].cmp(&v[b]),
    }
}
