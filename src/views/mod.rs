//! Aggregated views over classified records.
//!
//! A view is selected by an immutable [`ViewParams`] value and rebuilt from
//! the classified record set on every call; nothing is cached between calls.

pub mod aggregate;
pub mod params;
pub mod types;

pub use aggregate::build_view;
pub use params::{Dimension, DisplayMode, Metric, ViewParams, YearRange};
pub use types::{AggregatedView, ViewLabels, ViewRow};
