//! Fractional time plausibility policy

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_FRACTIONAL_TIME, DEFAULT_MIN_FRACTIONAL_TIME};
use crate::{Error, Result};

/// Accepted window for an entry's fractional time
///
/// A crew more than `max_fraction` times slower than its category winner is
/// treated as corrupt data. NaN fractions are always rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlausibilityPolicy {
    pub min_fraction: f64,
    pub max_fraction: f64,
}

impl Default for PlausibilityPolicy {
    fn default() -> Self {
        Self {
            min_fraction: DEFAULT_MIN_FRACTIONAL_TIME,
            max_fraction: DEFAULT_MAX_FRACTIONAL_TIME,
        }
    }
}

impl PlausibilityPolicy {
    /// Create a validated policy
    pub fn new(min_fraction: f64, max_fraction: f64) -> Result<Self> {
        let policy = Self {
            min_fraction,
            max_fraction,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Check the bounds are finite, positive and ordered
    pub fn validate(&self) -> Result<()> {
        if !(self.min_fraction.is_finite() && self.max_fraction.is_finite()) {
            return Err(Error::configuration(
                "Fractional time bounds must be finite numbers",
            ));
        }

        if self.min_fraction <= 0.0 {
            return Err(Error::configuration(format!(
                "Minimum fractional time must be positive, got {}",
                self.min_fraction
            )));
        }

        if self.min_fraction > self.max_fraction {
            return Err(Error::configuration(format!(
                "Minimum fractional time {} exceeds maximum {}",
                self.min_fraction, self.max_fraction
            )));
        }

        Ok(())
    }

    /// Whether a fractional time lies inside the window
    pub fn accepts(&self, fraction: f64) -> bool {
        (self.min_fraction..=self.max_fraction).contains(&fraction)
    }
}
