//! Data types produced by the view builder.

use serde::Serialize;

use crate::record::Accuracy;
use crate::views::params::ViewParams;

/// One aggregated bar or slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewRow {
    pub dimension_value: String,
    /// `None` for composition views, which are not split by accuracy.
    pub accuracy: Option<Accuracy>,
    pub value: f64,
}

/// Titles for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewLabels {
    pub title: String,
    pub value_axis: String,
}

/// Aggregated, filtered projection of classified records, rebuilt for every
/// parameter set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedView {
    pub params: ViewParams,
    pub labels: ViewLabels,
    pub rows: Vec<ViewRow>,
}

impl AggregatedView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Rows for a single dimension value, in output order.
    pub fn rows_for<'a>(&'a self, dimension_value: &'a str) -> impl Iterator<Item = &'a ViewRow> {
        self.rows
            .iter()
            .filter(move |r| r.dimension_value == dimension_value)
    }

    /// Value of the row for (`dimension_value`, `accuracy`), if present.
    pub fn value(&self, dimension_value: &str, accuracy: Option<Accuracy>) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.dimension_value == dimension_value && r.accuracy == accuracy)
            .map(|r| r.value)
    }
}
