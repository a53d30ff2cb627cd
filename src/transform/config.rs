//! Pipeline configuration supplied by the external widget layer.
//!
//! The widget layer is a producer of [`PipelineConfig`] and a consumer of
//! the result table; the pipeline itself has no dependency on any UI. All
//! fields default to "no-op", so a partially filled configuration (or an
//! empty JSON object) passes the table through unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::TransformResult;

// =============================================================================
// Pipeline Config
// =============================================================================

/// The user's selections for one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Columns to keep, in the desired order. Empty keeps all columns in
    /// their original order.
    pub column_order: Vec<String>,

    /// Per-column row filters, AND-composed across columns.
    pub filters: BTreeMap<String, ColumnFilter>,

    /// Grouping columns; non-grouping numeric columns are summed.
    pub group_by: Vec<String>,

    /// Sort keys, applied left-to-right as primary, secondary, ...
    pub sort_by: Vec<SortKey>,
}

impl PipelineConfig {
    /// Parse a configuration from the JSON the widget layer submits.
    pub fn from_json(json: &str) -> TransformResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when every stage is a no-op.
    pub fn is_noop(&self) -> bool {
        self.column_order.is_empty()
            && self.filters.is_empty()
            && self.group_by.is_empty()
            && self.sort_by.is_empty()
    }
}

// =============================================================================
// Column Filter
// =============================================================================

/// A per-column row predicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnFilter {
    /// Keep rows whose cell is one of the allowed values (text columns,
    /// multiselect widget).
    Values { values: Vec<String> },
    /// Keep rows whose cell lies in `[min, max]`, inclusive on both ends
    /// (numeric columns, range slider widget).
    Range { min: f64, max: f64 },
}

// =============================================================================
// Sort Spec
// =============================================================================

/// One sort key with its direction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SortKey {
    /// Column to sort on.
    pub column: String,
    /// Sort direction, ascending when omitted.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortKey {
    /// Ascending sort key.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort key.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Sort direction for a single key.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_noop() {
        let config = PipelineConfig::from_json("{}").unwrap();
        assert!(config.is_noop());
    }

    #[test]
    fn test_full_config_from_json() {
        let config = PipelineConfig::from_json(
            r#"{
                "column_order": ["Region", "Sales"],
                "filters": {
                    "Region": { "type": "values", "values": ["East"] },
                    "Sales": { "type": "range", "min": 6.0, "max": 20.0 }
                },
                "group_by": ["Region"],
                "sort_by": [
                    { "column": "Sales", "direction": "descending" },
                    { "column": "Region" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.column_order, vec!["Region", "Sales"]);
        assert_eq!(
            config.filters["Sales"],
            ColumnFilter::Range {
                min: 6.0,
                max: 20.0
            }
        );
        assert_eq!(config.group_by, vec!["Region"]);
        assert_eq!(config.sort_by[0], SortKey::descending("Sales"));
        // Direction defaults to ascending when omitted.
        assert_eq!(config.sort_by[1], SortKey::ascending("Region"));
    }

    #[test]
    fn test_bad_json_rejected() {
        assert!(PipelineConfig::from_json("not json").is_err());
        assert!(PipelineConfig::from_json(
            r#"{ "filters": { "Sales": { "type": "between", "min": 1 } } }"#
        )
        .is_err());
    }
}
