//! Main standings computer and ranking pipeline orchestration
//!
//! This module ties grouping, ranking, fractional time derivation and the
//! ordering self-check together into one fail-fast computation.

use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

use super::ordering::{group_by_category, rank_category, verify_category_order};
use super::policy::PlausibilityPolicy;
use crate::app::models::{CategoryStanding, EntryMap, RankedEntry, Standings};
use crate::{Error, Result};

/// Standings computer for validated regatta entries
///
/// # Example
///
/// ```rust
/// use regatta_formatter::app::services::standings::{PlausibilityPolicy, StandingsComputer};
/// use regatta_formatter::EntryMap;
///
/// let computer = StandingsComputer::new(PlausibilityPolicy::default());
/// let standings = computer.compute(&EntryMap::new()).unwrap();
/// assert_eq!(standings.entry_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StandingsComputer {
    policy: PlausibilityPolicy,
}

impl StandingsComputer {
    /// Create a new computer with the given plausibility policy
    pub fn new(policy: PlausibilityPolicy) -> Self {
        Self { policy }
    }

    /// Rank every entry within its category
    ///
    /// This method applies the complete pipeline:
    /// 1. Group entries by category label in input order
    /// 2. Stable-sort each group by total time and record the fastest time
    /// 3. Derive position, category size and fractional time per entry,
    ///    rejecting fractions outside the plausibility policy
    /// 4. Re-verify every category ordering is non-decreasing
    pub fn compute(&self, entries: &EntryMap) -> Result<Standings> {
        info!("Computing standings for {} entries", entries.len());

        let mut categories = BTreeMap::new();
        let mut positions = HashMap::with_capacity(entries.len());

        for (label, mut order) in group_by_category(entries) {
            rank_category(&mut order, entries);

            let Some(fastest) = order
                .first()
                .and_then(|number| entries.get(number))
                .map(|entry| entry.total)
            else {
                continue;
            };

            for (index, &number) in order.iter().enumerate() {
                positions.insert(number, index + 1);
            }

            debug!(
                "Category {}: order [{}], fastest {}s",
                label,
                order
                    .iter()
                    .map(|number| number.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                fastest
            );

            categories.insert(
                label.clone(),
                CategoryStanding {
                    label,
                    order,
                    fastest,
                },
            );
        }

        let mut ranked = BTreeMap::new();
        for (&number, entry) in entries {
            let (Some(standing), Some(&position)) =
                (categories.get(&entry.category), positions.get(&number))
            else {
                return Err(Error::sorting_fault(
                    &entry.category,
                    number.to_string(),
                    String::new(),
                    "entry missing from its category ordering",
                ));
            };

            let fractional_time = entry.total / standing.fastest;
            if !self.policy.accepts(fractional_time) {
                return Err(Error::implausible_time(
                    number,
                    fractional_time,
                    self.policy.min_fraction,
                    self.policy.max_fraction,
                ));
            }

            ranked.insert(
                number,
                RankedEntry {
                    entry: entry.clone(),
                    position,
                    num_entries: standing.size(),
                    fractional_time,
                },
            );
        }

        for standing in categories.values() {
            verify_category_order(&standing.label, &standing.order, entries)?;
        }

        info!(
            "Standings complete: {} entries ranked across {} categories",
            ranked.len(),
            categories.len()
        );

        Ok(Standings {
            entries: ranked,
            categories,
        })
    }
}
