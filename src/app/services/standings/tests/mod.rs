//! Tests for standings computation
//!
//! Fixtures build entries directly so ranking can be tested without parsing.

pub mod ordering_tests;

use crate::app::models::{Entry, EntryMap, EntryNumber};

/// Create a test entry with only the fields ranking cares about
pub fn create_test_entry(
    number: EntryNumber,
    category: &str,
    total: f64,
    input_index: usize,
) -> Entry {
    Entry {
        number,
        clubname: format!("Club {}", number),
        crewname: format!("Crew {}", number),
        boattype: "8+".to_string(),
        gender: "M".to_string(),
        affiliation: String::new(),
        status: String::new(),
        category: category.to_string(),
        leg1: None,
        leg2: None,
        total,
        adjusted_time: String::new(),
        input_index,
    }
}

/// Build an entry map from (number, category, total) rows in input order
pub fn create_entry_map(rows: &[(EntryNumber, &str, f64)]) -> EntryMap {
    rows.iter()
        .enumerate()
        .map(|(index, &(number, category, total))| {
            (number, create_test_entry(number, category, total, index))
        })
        .collect()
}

/// The div4 example: totals 301s, 305s, 298s in input order 1, 2, 3
pub fn create_div4_entries() -> EntryMap {
    create_entry_map(&[(1, "div4", 301.0), (2, "div4", 305.0), (3, "div4", 298.0)])
}
