//! Reorder stage: project the table onto a user-chosen column sequence.
//!
//! Running first lets every later stage reference only the columns the
//! user intends to keep.

use super::resolve_columns;
use crate::error::TransformResult;
use crate::model::Table;

/// Project `table` to exactly the named columns, in that order.
///
/// An empty selection passes the table through unchanged (fail-open, per
/// the widget layer's "nothing selected yet" state). Unknown or repeated
/// names are validation errors.
pub fn apply(table: Table, column_order: &[String]) -> TransformResult<Table> {
    if column_order.is_empty() {
        return Ok(table);
    }

    let indices = resolve_columns(&table, column_order.iter(), "reorder")?;
    Ok(table.project(&indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use crate::model::Column;

    fn sample() -> Table {
        Table::new(vec![
            ("a".into(), Column::Numeric(vec![1.0, 2.0])),
            ("b".into(), Column::Text(vec!["x".into(), "y".into()])),
            ("c".into(), Column::Numeric(vec![3.0, 4.0])),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_order_is_identity() {
        let table = sample();
        let result = apply(table.clone(), &[]).unwrap();
        assert_eq!(result, table);
    }

    #[test]
    fn test_full_order_in_place_is_identity() {
        let table = sample();
        let order: Vec<String> = table.column_names().to_vec();
        let result = apply(table.clone(), &order).unwrap();
        assert_eq!(result, table);
    }

    #[test]
    fn test_reorder_and_drop() {
        let result = apply(sample(), &["c".into(), "a".into()]).unwrap();
        assert_eq!(result.column_names(), &["c", "a"]);
        assert_eq!(result.column(0), &Column::Numeric(vec![3.0, 4.0]));
        assert_eq!(result.column(1), &Column::Numeric(vec![1.0, 2.0]));
    }

    #[test]
    fn test_unknown_column_rejected() {
        let result = apply(sample(), &["missing".into()]);
        assert!(matches!(
            result,
            Err(TransformError::UnknownColumn { stage: "reorder", .. })
        ));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = apply(sample(), &["a".into(), "a".into()]);
        assert!(matches!(
            result,
            Err(TransformError::DuplicateColumn { .. })
        ));
    }
}
