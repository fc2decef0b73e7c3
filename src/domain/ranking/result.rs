//! Ranking result types.

use serde::{Deserialize, Serialize};

/// One candidate paired with the score that ordered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate_id: String,
    pub score: f64,
}

impl RankedCandidate {
    /// Creates a new ranked candidate.
    pub fn new(candidate_id: impl Into<String>, score: f64) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            score,
        }
    }
}

/// The three orderings produced by one TOPSIS run.
///
/// Each sequence is a permutation of the full candidate set:
///
/// - `by_closeness` - closeness score descending; the primary output
/// - `by_distance_to_best` - distance to the ideal alternative ascending
///   (closest to ideal first)
/// - `by_distance_to_worst` - distance to the anti-ideal alternative
///   descending (farthest from the worst alternative first)
///
/// Ties within any ordering keep the candidates' input-matrix order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub by_closeness: Vec<RankedCandidate>,
    pub by_distance_to_best: Vec<RankedCandidate>,
    pub by_distance_to_worst: Vec<RankedCandidate>,
}

impl RankingResult {
    /// Returns the top-ranked candidate by closeness, if any.
    pub fn recommended(&self) -> Option<&RankedCandidate> {
        self.by_closeness.first()
    }

    /// Returns the closeness ordering as bare candidate identifiers.
    pub fn closeness_order(&self) -> Vec<&str> {
        self.by_closeness
            .iter()
            .map(|r| r.candidate_id.as_str())
            .collect()
    }

    /// Returns the closeness score for a candidate.
    pub fn closeness_of(&self, candidate_id: &str) -> Option<f64> {
        self.by_closeness
            .iter()
            .find(|r| r.candidate_id == candidate_id)
            .map(|r| r.score)
    }
}
