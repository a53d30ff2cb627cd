//! Domain models for the sheetprep transformation pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`Table`] - in-memory tabular dataset with named, typed columns
//! - [`Column`] - a single column, numeric or text
//! - [`ColumnKind`] - the type tag decided once at load time
//! - [`ColumnDescriptor`] - observed domain of a column, for building
//!   filter widgets (distinct values or min/max range)

use serde::Serialize;

use crate::error::{TransformError, TransformResult};

// =============================================================================
// Column Kind
// =============================================================================

/// The type of a column, inferred once when the spreadsheet is decoded.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// All cells are numbers.
    Numeric,
    /// Anything else: strings, booleans, empties, mixed content.
    Text,
}

impl ColumnKind {
    /// Human-readable name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
        }
    }
}

// =============================================================================
// Column
// =============================================================================

/// A single table column holding homogeneous values.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric cells.
    Numeric(Vec<f64>),
    /// Text/categorical cells.
    Text(Vec<String>),
}

impl Column {
    /// Number of cells in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    /// True if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The column's type tag.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Numeric(_) => ColumnKind::Numeric,
            Column::Text(_) => ColumnKind::Text,
        }
    }

    /// Keep only the cells whose mask entry is true.
    pub fn select(&self, mask: &[bool]) -> Column {
        match self {
            Column::Numeric(v) => Column::Numeric(
                v.iter()
                    .zip(mask)
                    .filter_map(|(x, keep)| keep.then_some(*x))
                    .collect(),
            ),
            Column::Text(v) => Column::Text(
                v.iter()
                    .zip(mask)
                    .filter(|(_, keep)| **keep)
                    .map(|(x, _)| x.clone())
                    .collect(),
            ),
        }
    }

    /// Reorder cells by the given row indices.
    pub fn take(&self, indices: &[usize]) -> Column {
        match self {
            Column::Numeric(v) => Column::Numeric(indices.iter().map(|&i| v[i]).collect()),
            Column::Text(v) => Column::Text(indices.iter().map(|&i| v[i].clone()).collect()),
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// An in-memory tabular dataset.
///
/// Column order is significant and user-controllable; all columns hold the
/// same number of rows; column names are unique. Both invariants are
/// enforced by [`Table::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from named columns, validating the structural
    /// invariants (at least one column, unique names, equal lengths).
    pub fn new(columns: Vec<(String, Column)>) -> TransformResult<Self> {
        if columns.is_empty() {
            return Err(TransformError::EmptyTable);
        }

        let expected = columns[0].1.len();
        let mut names = Vec::with_capacity(columns.len());
        let mut data = Vec::with_capacity(columns.len());

        for (name, column) in columns {
            if names.contains(&name) {
                return Err(TransformError::DuplicateName(name));
            }
            if column.len() != expected {
                return Err(TransformError::RaggedColumn {
                    column: name,
                    expected,
                    found: column.len(),
                });
            }
            names.push(name);
            data.push(column);
        }

        Ok(Self {
            names,
            columns: data,
        })
    }

    /// Column names in table order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.columns[0].len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Column at the given position.
    pub fn column(&self, index: usize) -> &Column {
        &self.columns[index]
    }

    /// Column by name.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.index_of(name).map(|i| &self.columns[i])
    }

    /// Project the table onto the columns at the given positions,
    /// in that order.
    pub fn project(&self, indices: &[usize]) -> Table {
        Table {
            names: indices.iter().map(|&i| self.names[i].clone()).collect(),
            columns: indices.iter().map(|&i| self.columns[i].clone()).collect(),
        }
    }

    /// Keep only the rows whose mask entry is true.
    pub fn filter_rows(&self, mask: &[bool]) -> Table {
        Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.select(mask)).collect(),
        }
    }

    /// Reorder rows by the given indices.
    pub fn take_rows(&self, indices: &[usize]) -> Table {
        Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.take(indices)).collect(),
        }
    }

    /// Describe every column: its kind and observed domain.
    ///
    /// This is what the widget layer needs to build its filter controls:
    /// distinct values (first-seen order) for text columns, observed
    /// min/max for numeric columns.
    pub fn describe(&self) -> Vec<ColumnDescriptor> {
        self.names
            .iter()
            .zip(&self.columns)
            .map(|(name, column)| ColumnDescriptor::observe(name, column))
            .collect()
    }
}

// =============================================================================
// Column Descriptor
// =============================================================================

/// Observed domain of a single column.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Column type tag.
    pub kind: ColumnKind,
    /// Observed values or bounds.
    pub domain: ColumnDomain,
}

/// The observed domain backing a filter widget.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnDomain {
    /// Distinct values in first-seen order (text columns).
    Values { values: Vec<String> },
    /// Observed inclusive bounds (numeric columns).
    Range { min: f64, max: f64 },
}

impl ColumnDescriptor {
    fn observe(name: &str, column: &Column) -> Self {
        let domain = match column {
            Column::Numeric(v) => {
                // Zero-row columns get a degenerate [0, 0] range.
                let min = v.iter().copied().fold(f64::INFINITY, f64::min);
                let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                if v.is_empty() {
                    ColumnDomain::Range { min: 0.0, max: 0.0 }
                } else {
                    ColumnDomain::Range { min, max }
                }
            }
            Column::Text(v) => {
                let mut values: Vec<String> = Vec::new();
                for cell in v {
                    if !values.contains(cell) {
                        values.push(cell.clone());
                    }
                }
                ColumnDomain::Values { values }
            }
        };

        Self {
            name: name.to_string(),
            kind: column.kind(),
            domain,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

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
    fn test_table_invariants() {
        let t = sample();
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.column_count(), 2);
        assert_eq!(t.column_names(), &["Region", "Sales"]);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            Table::new(vec![]),
            Err(TransformError::EmptyTable)
        ));
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let result = Table::new(vec![
            ("a".into(), Column::Numeric(vec![1.0, 2.0])),
            ("b".into(), Column::Numeric(vec![1.0])),
        ]);
        assert!(matches!(result, Err(TransformError::RaggedColumn { .. })));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Table::new(vec![
            ("a".into(), Column::Numeric(vec![1.0])),
            ("a".into(), Column::Numeric(vec![2.0])),
        ]);
        assert!(matches!(result, Err(TransformError::DuplicateName(_))));
    }

    #[test]
    fn test_filter_rows() {
        let t = sample().filter_rows(&[true, false, true]);
        assert_eq!(
            t.column_by_name("Region"),
            Some(&Column::Text(vec!["East".into(), "East".into()]))
        );
        assert_eq!(
            t.column_by_name("Sales"),
            Some(&Column::Numeric(vec![10.0, 5.0]))
        );
    }

    #[test]
    fn test_take_rows() {
        let t = sample().take_rows(&[2, 0, 1]);
        assert_eq!(
            t.column_by_name("Sales"),
            Some(&Column::Numeric(vec![5.0, 10.0, 20.0]))
        );
    }

    #[test]
    fn test_describe_text_column() {
        let desc = sample().describe();
        assert_eq!(desc[0].kind, ColumnKind::Text);
        assert_eq!(
            desc[0].domain,
            ColumnDomain::Values {
                values: vec!["East".into(), "West".into()]
            }
        );
    }

    #[test]
    fn test_describe_numeric_column() {
        let desc = sample().describe();
        assert_eq!(desc[1].kind, ColumnKind::Numeric);
        assert_eq!(
            desc[1].domain,
            ColumnDomain::Range {
                min: 5.0,
                max: 20.0
            }
        );
    }
}
