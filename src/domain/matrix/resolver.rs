//! Criteria resolver - Projects the matrix down to the configured criteria.

use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::foundation::ConfigError;
use crate::domain::weights::{name_prefix, PriorityRanking, WeightConfig};

use super::DecisionMatrix;

/// Name of the categorical action-category column.
pub const ACTION_TIER_COLUMN: &str = "action_tier";

/// Reduces the matrix to exactly the criteria named in the expanded weight
/// configuration and resolves the categorical action-tier column.
///
/// A configuration key whose first name segment is one of the group
/// prefixes retains every column sharing that `<prefix>_` structure; all
/// other keys are matched by exact column name. Unmatched columns are
/// dropped. If the retained set includes [`ACTION_TIER_COLUMN`] as a
/// categorical column, its labels are replaced by their numeric rank from
/// `action_ranking`; a label without a rank is
/// [`ConfigError::UnmappedCategory`], surfaced before any ranking runs.
pub fn resolve_criteria(
    matrix: &DecisionMatrix,
    config: &WeightConfig,
    action_ranking: &PriorityRanking,
    group_prefixes: &[String],
) -> Result<DecisionMatrix, ConfigError> {
    let retained_prefixes: Vec<&String> = group_prefixes
        .iter()
        .filter(|p| config.criteria().any(|key| name_prefix(key) == p.as_str()))
        .collect();

    let keep = |name: &str| {
        config.contains(name)
            || retained_prefixes
                .iter()
                .any(|p| name_prefix(name) == p.as_str())
    };

    let kept_indices: Vec<usize> = (0..matrix.criterion_count())
        .filter(|&j| keep(&matrix.criterion_names[j]))
        .collect();

    let mut criterion_names: Vec<String> = kept_indices
        .iter()
        .map(|&j| matrix.criterion_names[j].clone())
        .collect();
    let mut values: Vec<Vec<f64>> = matrix
        .values
        .iter()
        .map(|row| kept_indices.iter().map(|&j| row[j]).collect())
        .collect();

    let mut categorical = BTreeMap::new();
    for (name, labels) in &matrix.categorical {
        if !keep(name) {
            continue;
        }
        if name == ACTION_TIER_COLUMN {
            // Categorical tiers become their numeric priority.
            for (i, label) in labels.iter().enumerate() {
                let rank = action_ranking.rank_of(label).ok_or_else(|| {
                    ConfigError::UnmappedCategory {
                        criterion: name.clone(),
                        value: label.clone(),
                    }
                })?;
                values[i].push(rank as f64);
            }
            criterion_names.push(name.clone());
        } else {
            categorical.insert(name.clone(), labels.clone());
        }
    }

    debug!(
        retained = criterion_names.len(),
        dropped = matrix.criterion_count() + matrix.categorical.len() - criterion_names.len()
            - categorical.len(),
        "Resolved criteria"
    );

    Ok(DecisionMatrix {
        candidate_ids: matrix.candidate_ids.clone(),
        criterion_names,
        values,
        categorical,
    })
}
