//! Parameters selecting one aggregated view.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;
use crate::record::ClassifiedRecord;

/// Numeric magnitude to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    Weight,
    Volume,
}

impl Metric {
    pub fn of(&self, record: &ClassifiedRecord) -> f64 {
        let amount = match self {
            Metric::Weight => record.weight,
            Metric::Volume => record.volume,
        };
        amount.unwrap_or(0.0)
    }

    pub fn units(&self) -> &'static str {
        match self {
            Metric::Weight => "(lbs)",
            Metric::Volume => "(volume units)",
        }
    }
}

/// Whether values are normalized within each dimension value or left as sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayMode {
    Percent,
    Value,
}

/// Grouping axis on the non-accuracy side of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimension {
    Building,
    Waste,
    /// Composition of incorrectly disposed items by substream.
    Substream,
}

impl Dimension {
    pub fn of<'a>(&self, record: &'a ClassifiedRecord) -> &'a str {
        match self {
            Dimension::Building => &record.building,
            Dimension::Waste => &record.waste,
            Dimension::Substream => &record.substream,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Metric::Weight => "Weight",
            Metric::Volume => "Volume",
        })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Building => "Building",
            Dimension::Waste => "Waste",
            Dimension::Substream => "Substream",
        })
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weight" => Ok(Metric::Weight),
            "volume" => Ok(Metric::Volume),
            _ => Err(Error::invalid("metric", s)),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percent" => Ok(DisplayMode::Percent),
            "value" => Ok(DisplayMode::Value),
            _ => Err(Error::invalid("display mode", s)),
        }
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "building" => Ok(Dimension::Building),
            "waste" | "stream" => Ok(Dimension::Waste),
            "substream" => Ok(Dimension::Substream),
            _ => Err(Error::invalid("dimension", s)),
        }
    }
}

/// Inclusive range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `min` is greater than `max`.
    pub fn new(min: i32, max: i32) -> Result<Self, Error> {
        if min > max {
            return Err(Error::invalid("year range", format!("{min}..={max}")));
        }
        Ok(YearRange { min, max })
    }

    /// Resolves optional user bounds against the years present in the data.
    ///
    /// A missing bound falls back to `data`; with no data both bounds must be
    /// given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a bound is missing and `data` is
    /// `None`, or if the resolved range is inverted.
    pub fn resolve(
        data: Option<YearRange>,
        from: Option<i32>,
        to: Option<i32>,
    ) -> Result<Self, Error> {
        let min = from.or(data.map(|d| d.min));
        let max = to.or(data.map(|d| d.max));
        match (min, max) {
            (Some(min), Some(max)) => YearRange::new(min, max),
            _ => Err(Error::invalid("year range", "unbounded")),
        }
    }

    /// Range covering a single year.
    pub fn year(year: i32) -> Self {
        YearRange {
            min: year,
            max: year,
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Widens the range to include `year`.
    pub(crate) fn extend(self, year: i32) -> Self {
        YearRange {
            min: self.min.min(year),
            max: self.max.max(year),
        }
    }
}

/// Immutable selection of one view over a classified record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewParams {
    pub metric: Metric,
    pub display_mode: DisplayMode,
    pub dimension: Dimension,
    pub year_range: YearRange,
}

impl ViewParams {
    pub fn new(
        metric: Metric,
        display_mode: DisplayMode,
        dimension: Dimension,
        year_range: YearRange,
    ) -> Self {
        ViewParams {
            metric,
            display_mode,
            dimension,
            year_range,
        }
    }

    /// Builds params from the textual values a presentation layer hands over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first value that is not
    /// recognised, or an inverted year range.
    pub fn parse(
        metric: &str,
        display_mode: &str,
        dimension: &str,
        min_year: i32,
        max_year: i32,
    ) -> Result<Self, Error> {
        Ok(ViewParams {
            metric: metric.parse()?,
            display_mode: display_mode.parse()?,
            dimension: dimension.parse()?,
            year_range: YearRange::new(min_year, max_year)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("WEIGHT".parse::<Metric>().unwrap(), Metric::Weight);
        assert_eq!(" volume ".parse::<Metric>().unwrap(), Metric::Volume);
        assert_eq!("Percent".parse::<DisplayMode>().unwrap(), DisplayMode::Percent);
        assert_eq!("value".parse::<DisplayMode>().unwrap(), DisplayMode::Value);
    }

    #[test]
    fn test_stream_is_alias_for_waste() {
        assert_eq!("Stream".parse::<Dimension>().unwrap(), Dimension::Waste);
        assert_eq!("waste".parse::<Dimension>().unwrap(), Dimension::Waste);
        assert_eq!("Substream".parse::<Dimension>().unwrap(), Dimension::Substream);
    }

    #[test]
    fn test_unknown_values_are_invalid_parameters() {
        match "Mass".parse::<Metric>() {
            Err(Error::InvalidParameter { parameter, value }) => {
                assert_eq!(parameter, "metric");
                assert_eq!(value, "Mass");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            "Ratio".parse::<DisplayMode>(),
            Err(Error::InvalidParameter { parameter: "display mode", .. })
        ));
        assert!(matches!(
            "Floor".parse::<Dimension>(),
            Err(Error::InvalidParameter { parameter: "dimension", .. })
        ));
    }

    #[test]
    fn test_view_params_parse() {
        let params = ViewParams::parse("Volume", "Value", "Building", 2019, 2022).unwrap();
        assert_eq!(params.metric, Metric::Volume);
        assert_eq!(params.display_mode, DisplayMode::Value);
        assert_eq!(params.dimension, Dimension::Building);
        assert_eq!(params.year_range, YearRange::new(2019, 2022).unwrap());
    }

    #[test]
    fn test_inverted_year_range_is_invalid() {
        assert!(matches!(
            YearRange::new(2023, 2022),
            Err(Error::InvalidParameter { parameter: "year range", .. })
        ));
        assert!(ViewParams::parse("Weight", "Percent", "Building", 2023, 2022).is_err());
    }

    #[test]
    fn test_year_range_is_inclusive() {
        let range = YearRange::new(2019, 2021).unwrap();
        assert!(range.contains(2019));
        assert!(range.contains(2021));
        assert!(!range.contains(2018));
        assert!(!range.contains(2022));
    }

    #[test]
    fn test_resolve_falls_back_to_data_bounds() {
        let data = Some(YearRange::new(2018, 2021).unwrap());
        assert_eq!(
            YearRange::resolve(data, None, None).unwrap(),
            YearRange::new(2018, 2021).unwrap()
        );
        assert_eq!(
            YearRange::resolve(data, Some(2020), None).unwrap(),
            YearRange::new(2020, 2021).unwrap()
        );
        assert!(YearRange::resolve(data, Some(2022), None).is_err());
    }

    #[test]
    fn test_resolve_without_data_needs_both_bounds() {
        assert_eq!(
            YearRange::resolve(None, Some(2019), Some(2020)).unwrap(),
            YearRange::new(2019, 2020).unwrap()
        );
        assert!(matches!(
            YearRange::resolve(None, Some(2019), None),
            Err(Error::InvalidParameter { parameter: "year range", .. })
        ));
    }

    #[test]
    fn test_year_range_extend() {
        let range = YearRange::year(2020).extend(2018).extend(2019);
        assert_eq!((range.min(), range.max()), (2018, 2020));
    }
}
