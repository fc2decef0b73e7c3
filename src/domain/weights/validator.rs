//! Weight validator - Gatekeeps the sum-to-1 invariant before ranking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{ConfigError, Direction};
use crate::domain::matrix::DecisionMatrix;

use super::WeightConfig;

/// Absolute tolerance on the weight sum (two-decimal rounding).
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.005;

/// The validated, position-aligned weight and direction vectors.
///
/// `criteria`, `weights`, and `directions` are aligned with each other and
/// with the resolved decision matrix's column order, which is what the
/// ranking engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedWeights {
    pub criteria: Vec<String>,
    pub weights: Vec<f64>,
    pub directions: Vec<Direction>,
}

impl ValidatedWeights {
    /// Returns the weight assigned to a criterion.
    pub fn weight_of(&self, criterion: &str) -> Option<f64> {
        self.criteria
            .iter()
            .position(|c| c == criterion)
            .map(|i| self.weights[i])
    }

    /// Returns the number of covered criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns true if no criteria are covered.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

/// Validates the fully expanded weight configuration against the resolved
/// matrix and emits the aligned weight/direction vectors.
///
/// Fails fast with [`ConfigError::WeightSumMismatch`] when the configured
/// weights do not sum to 1 within [`WEIGHT_SUM_TOLERANCE`]; weights are
/// never renormalized here. Fails with [`ConfigError::MissingWeight`] when
/// a retained matrix column has no entry.
pub fn validate_weights(
    matrix: &DecisionMatrix,
    config: &WeightConfig,
) -> Result<ValidatedWeights, ConfigError> {
    let sum = config.weight_sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::WeightSumMismatch {
            expected: 1.0,
            actual: sum,
            tolerance: WEIGHT_SUM_TOLERANCE,
        });
    }

    let mut criteria = Vec::with_capacity(matrix.criterion_count());
    let mut weights = Vec::with_capacity(matrix.criterion_count());
    let mut directions = Vec::with_capacity(matrix.criterion_count());

    for name in &matrix.criterion_names {
        let entry = config.get(name).ok_or_else(|| ConfigError::MissingWeight {
            criterion: name.clone(),
        })?;
        criteria.push(name.clone());
        weights.push(entry.weight);
        directions.push(entry.direction);
    }

    debug!(criteria = criteria.len(), sum, "Weight check passed");

    Ok(ValidatedWeights {
        criteria,
        weights,
        directions,
    })
}
