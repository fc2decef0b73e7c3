//! TOPSIS engine - Similarity-to-ideal-solution ranking.

use std::cmp::Ordering;
use tracing::debug;

use crate::domain::foundation::{Direction, MatrixError};
use crate::domain::matrix::DecisionMatrix;
use crate::domain::weights::ValidatedWeights;

use super::{RankedCandidate, RankingResult};

/// TOPSIS scoring and ranking over a resolved decision matrix.
///
/// Scores each candidate by its relative closeness to the ideal (best
/// possible) and anti-ideal (worst possible) alternative across weighted
/// criteria, then orders the candidate set three ways.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Ranks all candidates of the matrix.
    ///
    /// # Algorithm
    /// 1. Divide each column by its Euclidean norm
    /// 2. Multiply each column by its weight
    /// 3. Build the ideal and anti-ideal vectors from the per-column
    ///    max/min according to direction
    /// 4. Compute each candidate's Euclidean distance to both vectors
    /// 5. Closeness = s_minus / (s_plus + s_minus), 0 when the denominator
    ///    is 0 (candidate identical to both ideals)
    ///
    /// # Edge Cases
    /// - Empty matrix or shape mismatch against the weight/direction
    ///   vectors: fails before any computation
    /// - Zero-norm column: precondition violation; the resolver's all-zero
    ///   column offset must have run upstream
    pub fn rank(
        matrix: &DecisionMatrix,
        validated: &ValidatedWeights,
    ) -> Result<RankingResult, MatrixError> {
        let n = matrix.candidate_count();
        let m = matrix.criterion_count();

        if n == 0 || m == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        if validated.weights.len() != m {
            return Err(MatrixError::ShapeMismatch {
                matrix_columns: m,
                vector: "weight",
                vector_len: validated.weights.len(),
            });
        }
        if validated.directions.len() != m {
            return Err(MatrixError::ShapeMismatch {
                matrix_columns: m,
                vector: "direction",
                vector_len: validated.directions.len(),
            });
        }

        // 1) Normalize ratings column-wise.
        let mut data = matrix.values.clone();
        for j in 0..m {
            let norm = data.iter().map(|row| row[j] * row[j]).sum::<f64>().sqrt();
            if norm == 0.0 {
                return Err(MatrixError::ZeroNormColumn {
                    criterion: matrix.criterion_names[j].clone(),
                });
            }
            for row in &mut data {
                row[j] /= norm;
            }
        }

        // 2) Apply weights.
        for row in &mut data {
            for j in 0..m {
                row[j] *= validated.weights[j];
            }
        }

        // 3) Ideal and anti-ideal alternatives.
        let mut a_pos = vec![0.0; m];
        let mut a_neg = vec![0.0; m];
        for j in 0..m {
            let max = data.iter().map(|row| row[j]).fold(f64::MIN, f64::max);
            let min = data.iter().map(|row| row[j]).fold(f64::MAX, f64::min);
            match validated.directions[j] {
                Direction::Benefit => {
                    a_pos[j] = max;
                    a_neg[j] = min;
                }
                Direction::Cost => {
                    a_pos[j] = min;
                    a_neg[j] = max;
                }
            }
        }

        // 4) Separation measures and 5) closeness scores.
        let mut s_plus = vec![0.0; n];
        let mut s_minus = vec![0.0; n];
        let mut closeness = vec![0.0; n];
        for i in 0..n {
            s_plus[i] = euclidean_distance(&data[i], &a_pos);
            s_minus[i] = euclidean_distance(&data[i], &a_neg);
            let denom = s_plus[i] + s_minus[i];
            closeness[i] = if denom == 0.0 { 0.0 } else { s_minus[i] / denom };
        }

        debug!(candidates = n, criteria = m, "Computed TOPSIS scores");

        // 6) Three orderings, ties kept in input order by stable sort.
        Ok(RankingResult {
            by_closeness: order_candidates(&matrix.candidate_ids, &closeness, true),
            by_distance_to_best: order_candidates(&matrix.candidate_ids, &s_plus, false),
            by_distance_to_worst: order_candidates(&matrix.candidate_ids, &s_minus, true),
        })
    }
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Orders candidate identifiers by score, descending or ascending.
///
/// The sort is stable, so equal scores keep the input-matrix order.
fn order_candidates(
    candidate_ids: &[String],
    scores: &[f64],
    descending: bool,
) -> Vec<RankedCandidate> {
    let mut indices: Vec<usize> = (0..candidate_ids.len()).collect();
    indices.sort_by(|&a, &b| {
        let cmp = scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal);
        if descending {
            cmp.reverse()
        } else {
            cmp
        }
    });

    indices
        .into_iter()
        .map(|i| RankedCandidate::new(candidate_ids[i].clone(), scores[i]))
        .collect()
}
