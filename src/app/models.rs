//! Data models for regatta results processing
//!
//! This module contains the core data structures for representing timed crews,
//! their category standings, and the enriched per-entry ranking fields.

use crate::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Crew (entry) number, unique within one results file
pub type EntryNumber = u32;

/// Validated entries keyed by entry number
pub type EntryMap = BTreeMap<EntryNumber, Entry>;

// =============================================================================
// Entry Structure
// =============================================================================

/// A validated timing record for one crew
///
/// Times are whole seconds stored as `f64`. Leg times are optional (single-leg
/// races or missing splits) but the total time is always present for an entry
/// that reaches this stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Crew number from the results file
    pub number: EntryNumber,

    pub clubname: String,
    pub crewname: String,
    pub boattype: String,
    pub gender: String,
    pub affiliation: String,
    pub status: String,

    /// Free-text grouping key crews are ranked within
    pub category: String,

    /// First leg time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg1: Option<f64>,

    /// Second leg time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg2: Option<f64>,

    /// Total time in seconds
    pub total: f64,

    /// Adjusted time, carried through unconverted
    pub adjusted_time: String,

    /// Position among accepted records in the input file (0-based)
    pub input_index: usize,
}

impl Entry {
    /// Validate the entry's timing for internal consistency
    ///
    /// An entry carries either no leg times or both, and when both are
    /// recorded their sum must equal the total exactly.
    pub fn validate(&self) -> Result<()> {
        match (self.leg1, self.leg2) {
            (None, None) => Ok(()),
            (Some(_), None) => Err(Error::incomplete_splits(self.number, "leg2time")),
            (None, Some(_)) => Err(Error::incomplete_splits(self.number, "leg1time")),
            (Some(leg1), Some(leg2)) if leg1 + leg2 != self.total => {
                Err(Error::time_consistency(self.number, leg1, leg2, self.total))
            }
            (Some(_), Some(_)) => Ok(()),
        }
    }
}

// =============================================================================
// Category Standings
// =============================================================================

/// Ranking of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStanding {
    /// Category label as written in the results file
    pub label: String,

    /// Entry numbers ordered by ascending total time, ties in input order
    pub order: Vec<EntryNumber>,

    /// Total time of the first entry in `order`
    pub fastest: f64,
}

impl CategoryStanding {
    /// Number of entries competing in this category
    pub fn size(&self) -> usize {
        self.order.len()
    }

    /// 1-based position of an entry, if it belongs to this category
    pub fn position_of(&self, number: EntryNumber) -> Option<usize> {
        self.order
            .iter()
            .position(|&candidate| candidate == number)
            .map(|index| index + 1)
    }

    /// Entry number of the category winner
    pub fn winner(&self) -> Option<EntryNumber> {
        self.order.first().copied()
    }
}

/// An entry enriched with its category ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    #[serde(flatten)]
    pub entry: Entry,

    /// 1-based rank within the category
    pub position: usize,

    /// Category size
    pub num_entries: usize,

    /// Total time divided by the category's fastest total time
    pub fractional_time: f64,
}

/// Complete standings for a results file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Standings {
    /// Ranked entries keyed by entry number
    pub entries: BTreeMap<EntryNumber, RankedEntry>,

    /// Per-category orderings keyed by label
    pub categories: BTreeMap<String, CategoryStanding>,
}

impl Standings {
    /// Number of ranked entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Look up a ranked entry by number
    pub fn get(&self, number: EntryNumber) -> Option<&RankedEntry> {
        self.entries.get(&number)
    }

    /// Ranked entries of a category in finishing order
    pub fn category_results(&self, label: &str) -> Vec<&RankedEntry> {
        self.categories
            .get(label)
            .map(|standing| {
                standing
                    .order
                    .iter()
                    .filter_map(|number| self.entries.get(number))
                    .collect()
            })
            .unwrap_or_default()
    }
}
