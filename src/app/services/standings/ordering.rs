//! Category grouping and ranking
//!
//! Entries are grouped by category label in input order and then stable-sorted
//! by total time, so crews with equal totals keep the order they appeared in
//! the results file.

use std::collections::BTreeMap;

use crate::app::models::{Entry, EntryMap, EntryNumber};
use crate::{Error, Result};

/// Group entry numbers by category label, each group in input order
pub fn group_by_category(entries: &EntryMap) -> BTreeMap<String, Vec<EntryNumber>> {
    let mut in_input_order: Vec<&Entry> = entries.values().collect();
    in_input_order.sort_by_key(|entry| entry.input_index);

    let mut groups: BTreeMap<String, Vec<EntryNumber>> = BTreeMap::new();
    for entry in in_input_order {
        groups
            .entry(entry.category.clone())
            .or_default()
            .push(entry.number);
    }

    groups
}

/// Sort a category's entry numbers by ascending total time
///
/// `slice::sort_by` is stable, so ties keep their existing relative order.
/// Numbers missing from `entries` sort last.
pub fn rank_category(order: &mut [EntryNumber], entries: &EntryMap) {
    let total = |number: &EntryNumber| {
        entries
            .get(number)
            .map(|entry| entry.total)
            .unwrap_or(f64::INFINITY)
    };

    order.sort_by(|a, b| total(a).total_cmp(&total(b)));
}

/// Check that consecutive entries of an ordering never decrease in total time
pub fn verify_category_order(
    category: &str,
    order: &[EntryNumber],
    entries: &EntryMap,
) -> Result<()> {
    let joined_order = || {
        order
            .iter()
            .map(|number| number.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    for pair in order.windows(2) {
        let (first, second) = match (entries.get(&pair[0]), entries.get(&pair[1])) {
            (Some(first), Some(second)) => (first, second),
            _ => {
                return Err(Error::sorting_fault(
                    category,
                    pair[0].to_string(),
                    pair[1].to_string(),
                    format!("{} (unknown entry)", joined_order()),
                ));
            }
        };

        if first.total > second.total {
            return Err(Error::sorting_fault(
                category,
                format!("{:?}", first),
                format!("{:?}", second),
                joined_order(),
            ));
        }
    }

    Ok(())
}
