//! Record classification.
//!
//! Attaches an [`Accuracy`] label, a normalized waste category, and the
//! year/month partition keys to each raw record. Classification is pure and
//! row-independent; a malformed date aborts the whole batch.

pub mod date;
pub mod rules;

use chrono::Datelike;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::errors::Error;
use crate::record::{Accuracy, ClassifiedRecord, RawRecord};
use rules::{Rule, RULES, UNCLASSIFIED};

pub use date::parse_date;

/// Applies a rule table and an optional known-category vocabulary to records.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: &'static [Rule],
    vocabulary: Option<BTreeSet<String>>,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier {
            rules: RULES,
            vocabulary: None,
        }
    }
}

impl Classifier {
    /// Builds a classifier that maps waste categories outside `known` to
    /// [`UNCLASSIFIED`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the vocabulary is empty or lacks a
    /// category the rule table can assign.
    pub fn with_vocabulary<I, S>(known: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vocabulary: BTreeSet<String> = known.into_iter().map(Into::into).collect();
        if vocabulary.is_empty() {
            return Err(Error::Configuration("waste vocabulary is empty".into()));
        }

        let missing: Vec<&str> = rules::literal_wastes(RULES)
            .filter(|w| !vocabulary.contains(*w))
            .collect();
        if !missing.is_empty() {
            return Err(Error::Configuration(format!(
                "waste vocabulary is missing rule categories: {}",
                missing.join(", ")
            )));
        }

        Ok(Classifier {
            rules: RULES,
            vocabulary: Some(vocabulary),
        })
    }

    /// Classifies a single record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDate`] if the record's date cannot be parsed.
    pub fn classify(&self, raw: &RawRecord) -> Result<ClassifiedRecord, Error> {
        let date = parse_date(&raw.date)?;
        let labels = rules::apply(self.rules, raw);

        let waste = match &self.vocabulary {
            Some(known) if !known.contains(&labels.waste) => {
                debug!(waste = %labels.waste, stream = %raw.stream, "Waste category outside vocabulary");
                UNCLASSIFIED.to_string()
            }
            _ => labels.waste,
        };

        Ok(ClassifiedRecord {
            stream: raw.stream.clone(),
            substream: raw.substream.clone(),
            date,
            building: raw.building.clone(),
            weight: raw.weight,
            volume: raw.volume,
            accuracy: labels.accuracy,
            waste,
            year: date.year(),
            month: date.month(),
        })
    }

    /// Classifies a batch, stopping at the first record that cannot be classified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Record`] carrying the zero-based row of the failing record.
    #[tracing::instrument(skip_all, fields(records = raws.len()))]
    pub fn classify_all(&self, raws: &[RawRecord]) -> Result<Vec<ClassifiedRecord>, Error> {
        let classified = raws
            .iter()
            .enumerate()
            .map(|(row, raw)| self.classify(raw).map_err(|e| e.at_row(row)))
            .collect::<Result<Vec<_>, _>>()?;

        let incorrect = classified
            .iter()
            .filter(|r| r.accuracy == Accuracy::Incorrect)
            .count();
        info!(total = classified.len(), incorrect, "Records classified");

        Ok(classified)
    }
}

/// Classifies a single record with the standard rules.
pub fn classify(raw: &RawRecord) -> Result<ClassifiedRecord, Error> {
    Classifier::default().classify(raw)
}

/// Classifies a batch with the standard rules.
pub fn classify_all(raws: &[RawRecord]) -> Result<Vec<ClassifiedRecord>, Error> {
    Classifier::default().classify_all(raws)
}
