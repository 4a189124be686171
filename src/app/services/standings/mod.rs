//! Category standings for regatta entries
//!
//! This module ranks validated entries within their category and derives the
//! per-entry position, category size and fractional time. It is a fail-fast
//! stage: an implausible fractional time or an unsorted category ordering
//! aborts the run.
//!
//! # Architecture
//!
//! - [`computer`] - Main StandingsComputer struct and pipeline orchestration
//! - [`ordering`] - Category grouping, stable ranking and the ordering self-check
//! - [`policy`] - Fractional time plausibility policy
//!
//! # Example Usage
//!
//! ```rust
//! use regatta_formatter::app::services::results_parser::ResultsParser;
//! use regatta_formatter::app::services::standings::{PlausibilityPolicy, StandingsComputer};
//!
//! # fn example(content: &[u8]) -> regatta_formatter::Result<()> {
//! let parsed = ResultsParser::new().parse(content)?;
//! let standings = StandingsComputer::new(PlausibilityPolicy::default()).compute(&parsed.entries)?;
//!
//! for (label, category) in &standings.categories {
//!     println!("{}: {} crews, fastest {}s", label, category.size(), category.fastest);
//! }
//! # Ok(())
//! # }
//! ```

pub mod computer;
pub mod ordering;
pub mod policy;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use computer::StandingsComputer;
pub use ordering::{group_by_category, rank_category, verify_category_order};
pub use policy::PlausibilityPolicy;
