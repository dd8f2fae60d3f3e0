//! Domain values a presentation layer needs to populate its controls.

use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::Serialize;

use crate::record::ClassifiedRecord;
use crate::views::YearRange;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    /// Distinct waste categories in first-seen order.
    pub wastes: Vec<String>,
    pub substreams: Vec<String>,
    pub buildings: Vec<String>,
    pub years: Option<YearRange>,
    pub dates: Option<(NaiveDate, NaiveDate)>,
}

impl Catalog {
    pub fn from_records(records: &[ClassifiedRecord]) -> Self {
        let mut wastes: IndexSet<&str> = IndexSet::new();
        let mut substreams: IndexSet<&str> = IndexSet::new();
        let mut buildings: IndexSet<&str> = IndexSet::new();
        let mut years: Option<YearRange> = None;
        let mut dates: Option<(NaiveDate, NaiveDate)> = None;

        for r in records {
            wastes.insert(&r.waste);
            substreams.insert(&r.substream);
            buildings.insert(&r.building);

            years = Some(match years {
                Some(range) => range.extend(r.year),
                None => YearRange::year(r.year),
            });
            dates = Some(match dates {
                Some((first, last)) => (first.min(r.date), last.max(r.date)),
                None => (r.date, r.date),
            });
        }

        Catalog {
            wastes: owned(wastes),
            substreams: owned(substreams),
            buildings: owned(buildings),
            years,
            dates,
        }
    }
}

fn owned(values: IndexSet<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}
