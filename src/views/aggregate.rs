use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::debug;

use crate::record::{Accuracy, ClassifiedRecord};
use crate::utility::pct;
use crate::views::params::{Dimension, DisplayMode, ViewParams};
use crate::views::types::{AggregatedView, ViewLabels, ViewRow};

/// Builds the aggregated view selected by `params` over `records`.
///
/// Records outside the year range are dropped, then metric sums are grouped
/// by (dimension value, accuracy). The substream dimension is instead a
/// composition of incorrectly disposed items. A range with no records yields
/// an empty view.
#[tracing::instrument(skip(records), fields(records = records.len()))]
pub fn build_view(records: &[ClassifiedRecord], params: &ViewParams) -> AggregatedView {
    let in_range: Vec<&ClassifiedRecord> = records
        .iter()
        .filter(|r| params.year_range.contains(r.year))
        .collect();

    let rows = match params.dimension {
        Dimension::Substream => incorrect_composition(&in_range, params),
        Dimension::Building | Dimension::Waste => accuracy_breakdown(&in_range, params),
    };

    debug!(in_range = in_range.len(), rows = rows.len(), "View built");

    AggregatedView {
        params: *params,
        labels: labels(params),
        rows,
    }
}

fn accuracy_breakdown(records: &[&ClassifiedRecord], params: &ViewParams) -> Vec<ViewRow> {
    let mut groups: IndexMap<(&str, Accuracy), f64> = IndexMap::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for record in records {
        let key = params.dimension.of(record);
        let amount = params.metric.of(record);
        *groups.entry((key, record.accuracy)).or_default() += amount;
        *totals.entry(key).or_default() += amount;
    }

    groups
        .into_iter()
        .map(|((key, accuracy), sum)| {
            let value = match params.display_mode {
                DisplayMode::Percent => pct(sum, totals[key]),
                DisplayMode::Value => sum,
            };
            ViewRow {
                dimension_value: key.to_string(),
                accuracy: Some(accuracy),
                value,
            }
        })
        .collect()
}

fn incorrect_composition(records: &[&ClassifiedRecord], params: &ViewParams) -> Vec<ViewRow> {
    let mut groups: IndexMap<&str, f64> = IndexMap::new();
    let mut total = 0.0;

    for record in records.iter().filter(|r| r.accuracy == Accuracy::Incorrect) {
        let amount = params.metric.of(record);
        *groups.entry(record.substream.as_str()).or_default() += amount;
        total += amount;
    }

    groups
        .into_iter()
        .map(|(key, sum)| ViewRow {
            dimension_value: key.to_string(),
            accuracy: None,
            value: pct(sum, total),
        })
        .collect()
}

fn labels(params: &ViewParams) -> ViewLabels {
    let title = match params.dimension {
        Dimension::Building => "Waste disposed correctly and incorrectly from each building",
        Dimension::Waste => {
            "Waste correctly and incorrectly disposed for each waste type across all buildings"
        }
        Dimension::Substream => "Incorrectly disposed items in the bins",
    };

    let value_axis = match (params.dimension, params.display_mode) {
        (Dimension::Substream, _) => format!("Share of incorrect {} %", params.metric),
        (_, DisplayMode::Percent) => format!("{} {} as %", params.metric, params.metric.units()),
        (_, DisplayMode::Value) => format!("{} {}", params.metric, params.metric.units()),
    };

    ViewLabels {
        title: title.to_string(),
        value_axis,
    }
}
