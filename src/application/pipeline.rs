//! RankingPipeline - One immutable snapshot, many independent rankings.

use std::sync::Arc;
use tracing::debug;

use crate::config::{
    default_action_category_ranking, default_contaminant_ranking, merged_group_prefixes,
};
use crate::domain::foundation::PipelineError;
use crate::domain::matrix::{resolve_criteria, DecisionMatrix};
use crate::domain::ranking::{RankingResult, TopsisEngine};
use crate::domain::weights::{
    distribute_group_weights, validate_weights, PreferenceRatings, PriorityRanking, WeightConfig,
};

/// Runs the full ranking pipeline against a fixed decision-matrix
/// snapshot.
///
/// The snapshot and lookup tables are read-only for the lifetime of the
/// pipeline; every `rank` call works on request-local state, so one
/// pipeline can serve concurrent requests with different preferences.
/// Hot reload is the caller's concern: build a new pipeline around a new
/// `Arc` snapshot and swap it between requests.
pub struct RankingPipeline {
    matrix: Arc<DecisionMatrix>,
    contaminant_ranking: PriorityRanking,
    action_ranking: PriorityRanking,
    group_prefixes: Vec<String>,
}

impl RankingPipeline {
    /// Creates a pipeline over a matrix snapshot with the shipped lookup
    /// tables, merged-data mode.
    pub fn new(matrix: Arc<DecisionMatrix>) -> Self {
        Self {
            matrix,
            contaminant_ranking: default_contaminant_ranking().clone(),
            action_ranking: default_action_category_ranking().clone(),
            group_prefixes: merged_group_prefixes(),
        }
    }

    /// Replaces the contaminant-family priority ranking.
    pub fn with_contaminant_ranking(mut self, ranking: PriorityRanking) -> Self {
        self.contaminant_ranking = ranking;
        self
    }

    /// Replaces the action-category ranking.
    pub fn with_action_ranking(mut self, ranking: PriorityRanking) -> Self {
        self.action_ranking = ranking;
        self
    }

    /// Ranks all candidate actions for one set of preference scores.
    ///
    /// Stages run in a single synchronous pass: normalize the four
    /// preference scores, offset all-zero columns on a request-local copy,
    /// distribute the contaminant group weight by priority, resolve the
    /// configured criteria, validate the weight sum, and run TOPSIS.
    /// Any configuration error or data precondition violation aborts the
    /// request with no partial result.
    pub fn rank(&self, preferences: &PreferenceRatings) -> Result<RankingResult, PipelineError> {
        let normalized = preferences.normalize();
        debug!(?normalized, "Normalized preference scores");

        let mut config =
            WeightConfig::from_preferences(&normalized, crate::config::MERGED_GROUP_PREFIX);

        let mut matrix = (*self.matrix).clone();
        let adjusted = matrix.offset_zero_columns();
        if !adjusted.is_empty() {
            debug!(columns = adjusted.len(), "Applied all-zero column offset");
        }

        distribute_group_weights(
            &matrix.criterion_names,
            &mut config,
            &self.contaminant_ranking,
            &self.group_prefixes,
        )?;
        debug!(entries = config.len(), "Distributed group weights");

        let resolved = resolve_criteria(
            &matrix,
            &config,
            &self.action_ranking,
            &self.group_prefixes,
        )?;

        let validated = validate_weights(&resolved, &config)?;

        let result = TopsisEngine::rank(&resolved, &validated)?;
        debug!(
            recommended = result.recommended().map(|r| r.candidate_id.as_str()),
            "Ranking complete"
        );
        Ok(result)
    }
}
