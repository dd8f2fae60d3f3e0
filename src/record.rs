//! Record types flowing through the pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived correctness label of a disposal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accuracy {
    Correct,
    Incorrect,
    #[serde(rename = "Not-Trash")]
    NotTrash,
}

impl Accuracy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accuracy::Correct => "Correct",
            Accuracy::Incorrect => "Incorrect",
            Accuracy::NotTrash => "Not-Trash",
        }
    }

    /// Colour the presentation layer uses for this label.
    pub fn color(&self) -> &'static str {
        match self {
            Accuracy::Correct => "green",
            Accuracy::Incorrect => "red",
            Accuracy::NotTrash => "gray",
        }
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row as read from the waste-collection data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    pub stream: String,
    pub substream: String,
    pub date: String,
    pub building: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

impl RawRecord {
    pub fn new(stream: &str, substream: &str, date: &str, building: &str) -> Self {
        RawRecord {
            stream: stream.to_string(),
            substream: substream.to_string(),
            date: date.to_string(),
            building: building.to_string(),
            weight: None,
            volume: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// A record with its derived labels attached. Never mutated after classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassifiedRecord {
    pub stream: String,
    pub substream: String,
    pub date: NaiveDate,
    pub building: String,
    pub weight: Option<f64>,
    pub volume: Option<f64>,
    pub accuracy: Accuracy,
    pub waste: String,
    pub year: i32,
    pub month: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_display_matches_serialized_label() {
        assert_eq!(Accuracy::NotTrash.to_string(), "Not-Trash");
        assert_eq!(
            serde_json::to_string(&Accuracy::NotTrash).unwrap(),
            "\"Not-Trash\""
        );
    }

    #[test]
    fn test_accuracy_colors() {
        assert_eq!(Accuracy::Correct.color(), "green");
        assert_eq!(Accuracy::Incorrect.color(), "red");
        assert_eq!(Accuracy::NotTrash.color(), "gray");
    }

    #[test]
    fn test_raw_record_builders() {
        let r = RawRecord::new("Landfill", "Glass", "2022-03-01", "A")
            .with_weight(1.5)
            .with_volume(0.25);
        assert_eq!(r.weight, Some(1.5));
        assert_eq!(r.volume, Some(0.25));
    }
}
