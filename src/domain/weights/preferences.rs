//! Preference ratings - The four raw user scores and their normalization.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ConfigError;

/// Decimal digits kept when normalizing preference scores.
const NORMALIZE_PRECISION: u32 = 8;

/// The four top-level preference scores supplied by a user or expert.
///
/// Scores share an arbitrary positive scale (e.g. 1-5 Likert); only their
/// ratios matter. `effectiveness` carries the importance of health impact
/// across contaminant families, the other three the importance of the
/// cost, time, and repetition tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRatings {
    pub time: f64,
    pub cost: f64,
    pub frequency: f64,
    pub effectiveness: f64,
}

impl PreferenceRatings {
    /// Creates preference ratings, rejecting negative or non-finite scores.
    pub fn try_new(
        time: f64,
        cost: f64,
        frequency: f64,
        effectiveness: f64,
    ) -> Result<Self, ConfigError> {
        for (key, value) in [
            ("time", time),
            ("cost", cost),
            ("frequency", frequency),
            ("effectiveness", effectiveness),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidPreference { key, actual: value });
            }
        }
        Ok(Self {
            time,
            cost,
            frequency,
            effectiveness,
        })
    }

    /// Normalizes the four scores into a distribution summing to 1.
    ///
    /// Each value is divided by the total and rounded to 8 decimal digits.
    /// A zero total yields all zeros; that degenerate configuration is not
    /// an error here but fails the downstream sum-to-1 validation, which
    /// signals the misconfiguration instead of silently proceeding.
    pub fn normalize(&self) -> NormalizedPreferences {
        let total = self.time + self.cost + self.frequency + self.effectiveness;
        if total == 0.0 {
            return NormalizedPreferences {
                time: 0.0,
                cost: 0.0,
                frequency: 0.0,
                effectiveness: 0.0,
            };
        }

        let round = |v: f64| {
            let scale = 10f64.powi(NORMALIZE_PRECISION as i32);
            (v / total * scale).round() / scale
        };

        NormalizedPreferences {
            time: round(self.time),
            cost: round(self.cost),
            frequency: round(self.frequency),
            effectiveness: round(self.effectiveness),
        }
    }
}

/// Preference scores normalized to a probability-like distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPreferences {
    pub time: f64,
    pub cost: f64,
    pub frequency: f64,
    pub effectiveness: f64,
}

impl NormalizedPreferences {
    /// Returns the sum of the four normalized values.
    pub fn total(&self) -> f64 {
        self.time + self.cost + self.frequency + self.effectiveness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_produces_unit_sum() {
        let prefs = PreferenceRatings::try_new(3.0, 2.0, 3.0, 6.0).unwrap();
        let norm = prefs.normalize();
        assert!((norm.total() - 1.0).abs() < 1e-6);
        assert!((norm.effectiveness - 6.0 / 14.0).abs() < 1e-8);
    }

    #[test]
    fn normalize_zero_sum_yields_all_zeros() {
        let prefs = PreferenceRatings::try_new(0.0, 0.0, 0.0, 0.0).unwrap();
        let norm = prefs.normalize();
        assert_eq!(norm.total(), 0.0);
    }

    #[test]
    fn normalize_rounds_to_eight_decimals() {
        let prefs = PreferenceRatings::try_new(1.0, 1.0, 1.0, 0.0).unwrap();
        let norm = prefs.normalize();
        // 1/3 rounded at the eighth decimal digit.
        assert_eq!(norm.time, 0.33333333);
    }

    #[test]
    fn try_new_rejects_negative_scores() {
        let err = PreferenceRatings::try_new(1.0, -2.0, 1.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPreference {
                key: "cost",
                actual: -2.0
            }
        );
    }

    #[test]
    fn try_new_rejects_non_finite_scores() {
        assert!(PreferenceRatings::try_new(1.0, 1.0, f64::NAN, 1.0).is_err());
    }

    proptest! {
        #[test]
        fn positive_sum_inputs_normalize_to_one(
            time in 0.0f64..100.0,
            cost in 0.0f64..100.0,
            frequency in 0.0f64..100.0,
            effectiveness in 0.01f64..100.0,
        ) {
            let prefs = PreferenceRatings::try_new(time, cost, frequency, effectiveness).unwrap();
            let norm = prefs.normalize();
            prop_assert!((norm.total() - 1.0).abs() < 1e-6);
        }

        #[test]
        fn normalization_preserves_relative_order(
            a in 0.0f64..100.0,
            b in 0.0f64..100.0,
        ) {
            let prefs = PreferenceRatings::try_new(a, b, 1.0, 1.0).unwrap();
            let norm = prefs.normalize();
            if a < b {
                prop_assert!(norm.time <= norm.cost);
            } else if a > b {
                prop_assert!(norm.time >= norm.cost);
            }
        }
    }
}
