//! Ordered rule table deriving `accuracy` and `waste` from free-text fields.
//!
//! Rules are evaluated top to bottom against every record and the last rule
//! that fires wins for the field it writes.

use crate::record::{Accuracy, RawRecord};

/// Waste category used when no category can be derived for a record.
pub const UNCLASSIFIED: &str = "Unclassified";

/// Marker separating item and bin in streams such as "Plastic in Compost".
const MISPLACED_MARKER: &str = " in ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Stream,
    Substream,
}

impl Field {
    fn of<'a>(&self, record: &'a RawRecord) -> &'a str {
        match self {
            Field::Stream => &record.stream,
            Field::Substream => &record.substream,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Always,
    /// Field names an item found inside a bin it does not belong in.
    Misplaced(Field),
    Contains(Field, &'static str),
}

impl Predicate {
    pub fn matches(&self, record: &RawRecord) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Misplaced(field) => field.of(record).contains(MISPLACED_MARKER),
            Predicate::Contains(field, needle) => field.of(record).contains(needle),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteSource {
    /// First whitespace-delimited token of the field.
    FirstToken(Field),
    Literal(&'static str),
}

impl WasteSource {
    fn resolve(&self, record: &RawRecord) -> Option<String> {
        match self {
            WasteSource::FirstToken(field) => {
                field.of(record).split_whitespace().next().map(str::to_string)
            }
            WasteSource::Literal(value) => Some(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    SetAccuracy(Accuracy),
    SetWaste(WasteSource),
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub when: Predicate,
    pub then: Effect,
}

/// Standard labelling rules for campus waste audits.
pub static RULES: &[Rule] = &[
    Rule {
        name: "default_correct",
        when: Predicate::Always,
        then: Effect::SetAccuracy(Accuracy::Correct),
    },
    Rule {
        name: "misplaced_item",
        when: Predicate::Misplaced(Field::Stream),
        then: Effect::SetAccuracy(Accuracy::Incorrect),
    },
    Rule {
        name: "food_waste_in_compost",
        when: Predicate::Contains(Field::Stream, "Food Waste in Compost"),
        then: Effect::SetAccuracy(Accuracy::Correct),
    },
    Rule {
        name: "reusables",
        when: Predicate::Contains(Field::Stream, "Reusables"),
        then: Effect::SetAccuracy(Accuracy::NotTrash),
    },
    Rule {
        name: "stream_category",
        when: Predicate::Always,
        then: Effect::SetWaste(WasteSource::FirstToken(Field::Stream)),
    },
    Rule {
        name: "food_is_compost",
        when: Predicate::Contains(Field::Substream, "Food"),
        then: Effect::SetWaste(WasteSource::Literal("Compost")),
    },
    Rule {
        name: "edible_food",
        when: Predicate::Contains(Field::Substream, "Food Waste (edible)"),
        then: Effect::SetAccuracy(Accuracy::NotTrash),
    },
];

/// Labels produced by running a rule table over one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub accuracy: Accuracy,
    pub waste: String,
}

/// Runs `rules` in order over `record`; later rules overwrite earlier ones.
pub fn apply(rules: &[Rule], record: &RawRecord) -> Labels {
    let mut accuracy = Accuracy::Correct;
    let mut waste: Option<String> = None;

    for rule in rules.iter().filter(|r| r.when.matches(record)) {
        match rule.then {
            Effect::SetAccuracy(value) => accuracy = value,
            Effect::SetWaste(source) => waste = source.resolve(record),
        }
    }

    Labels {
        accuracy,
        waste: waste
            .filter(|w| !w.is_empty())
            .unwrap_or_else(|| UNCLASSIFIED.to_string()),
    }
}

/// Literal waste values a rule table can emit, used to validate vocabularies.
pub fn literal_wastes(rules: &[Rule]) -> impl Iterator<Item = &'static str> + '_ {
    rules.iter().filter_map(|r| match r.then {
        Effect::SetWaste(WasteSource::Literal(value)) => Some(value),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(stream: &str, substream: &str) -> Labels {
        apply(RULES, &RawRecord::new(stream, substream, "2022-03-01", "A"))
    }

    #[test]
    fn test_plain_stream_is_correct() {
        let l = labels("Landfill", "Plastic in Landfill");
        assert_eq!(l.accuracy, Accuracy::Correct);
        assert_eq!(l.waste, "Landfill");
    }

    #[test]
    fn test_misplaced_stream_is_incorrect() {
        let l = labels("Plastic in Compost", "Plastic Film");
        assert_eq!(l.accuracy, Accuracy::Incorrect);
        assert_eq!(l.waste, "Plastic");
    }

    #[test]
    fn test_food_waste_in_compost_overrides_misplaced() {
        let l = labels("Food Waste in Compost", "Food Scraps");
        assert_eq!(l.accuracy, Accuracy::Correct);
        assert_eq!(l.waste, "Compost");
    }

    #[test]
    fn test_reusables_are_not_trash() {
        assert_eq!(labels("Reusables", "Mugs").accuracy, Accuracy::NotTrash);
        assert_eq!(labels("Reusables in Landfill", "").accuracy, Accuracy::NotTrash);
    }

    #[test]
    fn test_edible_food_overrides_everything() {
        let l = labels("Food Waste in Compost", "Food Waste (edible)");
        assert_eq!(l.accuracy, Accuracy::NotTrash);
        assert_eq!(l.waste, "Compost");

        let l = labels("Landfill in Recycling", "Leftovers: Food Waste (edible)");
        assert_eq!(l.accuracy, Accuracy::NotTrash);
        assert_eq!(l.waste, "Compost");
    }

    #[test]
    fn test_edible_phrase_is_literal() {
        // Parentheses are part of the phrase, not a pattern group.
        let l = labels("Landfill in Recycling", "Food Waste edible");
        assert_eq!(l.accuracy, Accuracy::Incorrect);
        assert_eq!(l.waste, "Compost");
    }

    #[test]
    fn test_blank_stream_falls_back_to_unclassified() {
        assert_eq!(labels("", "Glass").waste, UNCLASSIFIED);
        assert_eq!(labels("   ", "Glass").waste, UNCLASSIFIED);
    }

    #[test]
    fn test_misplaced_marker_needs_surrounding_spaces() {
        assert_eq!(labels("Bin", "").accuracy, Accuracy::Correct);
        assert_eq!(labels("Drinking Straws", "").accuracy, Accuracy::Correct);
    }

    #[test]
    fn test_literal_wastes_lists_compost() {
        let literals: Vec<_> = literal_wastes(RULES).collect();
        assert_eq!(literals, vec!["Compost"]);
    }
}
