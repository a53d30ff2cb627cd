//! Group stage: collapse rows sharing a group-key tuple, summing numeric
//! columns.
//!
//! Runs after filtering so aggregates reflect only retained rows, and
//! before sorting so the user can sort on aggregated results.

use std::collections::HashMap;

use super::resolve_columns;
use crate::error::TransformResult;
use crate::model::{Column, Table};

/// Group rows by equality across all `group_by` columns.
///
/// Produces one output row per distinct group-key tuple, in first-seen
/// order. Key columns come first in the output (in `group_by` order),
/// followed by the sums of the numeric non-key columns. Text non-key
/// columns have no meaningful sum and are dropped with a warning.
///
/// An empty `group_by` passes the table through unchanged.
pub fn apply(table: Table, group_by: &[String]) -> TransformResult<Table> {
    if group_by.is_empty() {
        return Ok(table);
    }

    let key_indices = resolve_columns(&table, group_by.iter(), "group")?;

    let mut summed = Vec::new();
    let mut dropped = Vec::new();
    for i in 0..table.column_count() {
        if key_indices.contains(&i) {
            continue;
        }
        match table.column(i) {
            Column::Numeric(_) => summed.push(i),
            Column::Text(_) => dropped.push(table.column_names()[i].clone()),
        }
    }
    if !dropped.is_empty() {
        tracing::warn!(
            columns = ?dropped,
            "dropping non-numeric columns from grouped output"
        );
    }

    // One accumulator per distinct key tuple, in first-seen order.
    let mut slots: HashMap<Vec<KeyPart>, usize> = HashMap::new();
    let mut first_rows: Vec<usize> = Vec::new();
    let mut sums: Vec<Vec<f64>> = Vec::new();

    for row in 0..table.row_count() {
        let key: Vec<KeyPart> = key_indices
            .iter()
            .map(|&i| KeyPart::at(table.column(i), row))
            .collect();

        let slot = *slots.entry(key).or_insert_with(|| {
            first_rows.push(row);
            sums.push(vec![0.0; summed.len()]);
            first_rows.len() - 1
        });

        for (k, &i) in summed.iter().enumerate() {
            if let Column::Numeric(values) = table.column(i) {
                sums[slot][k] += values[row];
            }
        }
    }

    let mut columns = Vec::with_capacity(key_indices.len() + summed.len());
    for &i in &key_indices {
        columns.push((
            table.column_names()[i].clone(),
            table.column(i).take(&first_rows),
        ));
    }
    for (k, &i) in summed.iter().enumerate() {
        columns.push((
            table.column_names()[i].clone(),
            Column::Numeric(sums.iter().map(|s| s[k]).collect()),
        ));
    }

    Table::new(columns)
}

/// One component of a group-key tuple, hashable across both column kinds.
///
/// Numeric keys compare by bit pattern with `-0.0` normalized to `0.0`;
/// NaN never appears because decoding only produces finite numerics.
#[derive(Debug, PartialEq, Eq, Hash)]
enum KeyPart {
    Num(u64),
    Text(String),
}

impl KeyPart {
    fn at(column: &Column, row: usize) -> Self {
        match column {
            Column::Numeric(v) => {
                let x = if v[row] == 0.0 { 0.0 } else { v[row] };
                KeyPart::Num(x.to_bits())
            }
            Column::Text(v) => KeyPart::Text(v[row].clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(vec![
            (
                "Region".into(),
                Column::Text(vec!["East".into(), "West".into(), "East".into()]),
            ),
            ("Sales".into(), Column::Numeric(vec![10.0, 20.0, 5.0])),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_group_by_is_identity() {
        let table = sample();
        let result = apply(table.clone(), &[]).unwrap();
        assert_eq!(result, table);
    }

    #[test]
    fn test_group_and_sum() {
        // [("East",10), ("West",20), ("East",5)] grouped by Region
        // collapses to [("East",15), ("West",20)] in first-seen order.
        let result = apply(sample(), &["Region".into()]).unwrap();

        assert_eq!(result.column_names(), &["Region", "Sales"]);
        assert_eq!(
            result.column(0),
            &Column::Text(vec!["East".into(), "West".into()])
        );
        assert_eq!(result.column(1), &Column::Numeric(vec![15.0, 20.0]));
    }

    #[test]
    fn test_total_sum_preserved() {
        let table = sample();
        let before: f64 = match table.column_by_name("Sales").unwrap() {
            Column::Numeric(v) => v.iter().sum(),
            _ => unreachable!(),
        };

        let result = apply(table, &["Region".into()]).unwrap();
        let after: f64 = match result.column_by_name("Sales").unwrap() {
            Column::Numeric(v) => v.iter().sum(),
            _ => unreachable!(),
        };

        assert_eq!(before, after);
    }

    #[test]
    fn test_row_count_equals_distinct_keys() {
        let result = apply(sample(), &["Region".into()]).unwrap();
        assert_eq!(result.row_count(), 2);
    }

    #[test]
    fn test_multi_key_grouping() {
        let table = Table::new(vec![
            (
                "Region".into(),
                Column::Text(vec!["East".into(), "East".into(), "East".into()]),
            ),
            ("Year".into(), Column::Numeric(vec![2023.0, 2024.0, 2023.0])),
            ("Sales".into(), Column::Numeric(vec![1.0, 2.0, 4.0])),
        ])
        .unwrap();

        let result = apply(table, &["Region".into(), "Year".into()]).unwrap();

        assert_eq!(result.column_names(), &["Region", "Year", "Sales"]);
        assert_eq!(result.row_count(), 2);
        assert_eq!(
            result.column_by_name("Sales"),
            Some(&Column::Numeric(vec![5.0, 2.0]))
        );
    }

    #[test]
    fn test_text_non_key_columns_dropped() {
        let table = Table::new(vec![
            (
                "Region".into(),
                Column::Text(vec!["East".into(), "East".into()]),
            ),
            (
                "Note".into(),
                Column::Text(vec!["a".into(), "b".into()]),
            ),
            ("Sales".into(), Column::Numeric(vec![1.0, 2.0])),
        ])
        .unwrap();

        let result = apply(table, &["Region".into()]).unwrap();
        assert_eq!(result.column_names(), &["Region", "Sales"]);
    }

    #[test]
    fn test_group_by_all_columns_deduplicates() {
        let table = Table::new(vec![
            (
                "Region".into(),
                Column::Text(vec!["East".into(), "East".into(), "West".into()]),
            ),
            ("Sales".into(), Column::Numeric(vec![5.0, 5.0, 5.0])),
        ])
        .unwrap();

        let result = apply(table, &["Region".into(), "Sales".into()]).unwrap();
        assert_eq!(result.row_count(), 2);
    }

    #[test]
    fn test_negative_zero_groups_with_zero() {
        let table = Table::new(vec![
            ("Key".into(), Column::Numeric(vec![0.0, -0.0])),
            ("N".into(), Column::Numeric(vec![1.0, 1.0])),
        ])
        .unwrap();

        let result = apply(table, &["Key".into()]).unwrap();
        assert_eq!(result.row_count(), 1);
        assert_eq!(result.column_by_name("N"), Some(&Column::Numeric(vec![2.0])));
    }

    #[test]
    fn test_unknown_key_rejected() {
        use crate::error::TransformError;
        let result = apply(sample(), &["Missing".into()]);
        assert!(matches!(
            result,
            Err(TransformError::UnknownColumn { stage: "group", .. })
        ));
    }
}
