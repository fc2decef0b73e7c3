//! Rank distributor - Expands aggregate group weights across sub-criteria.

use tracing::debug;

use crate::domain::foundation::ConfigError;

use super::config::name_prefix;
use super::{PriorityRanking, WeightConfig, WeightEntry};

/// Distributes each group's aggregate weight over its sub-criterion
/// columns, proportional to the inverted priority ranking.
///
/// For every group prefix with an aggregate entry in `config`:
/// 1. sub-criteria present in the data are discovered from column names of
///    the form `<prefix>_<subcriterion>`,
/// 2. the priority ranking is filtered down to those sub-criteria,
/// 3. the filtered ranks are inverted and normalized to a unit-sum split,
/// 4. one entry per `<prefix>_<subcriterion>` is inserted with
///    weight = share x aggregate weight and the aggregate's direction,
///    and the aggregate entry is removed.
///
/// The inserted entries for a prefix sum to the aggregate weight up to
/// floating-point rounding. A prefix whose sub-criteria have no overlap
/// with the priority ranking would silently lose its weight mass, so that
/// case fails early with [`ConfigError::EmptyPriorityOverlap`] instead of
/// surfacing later as a generic sum mismatch.
pub fn distribute_group_weights(
    column_names: &[String],
    config: &mut WeightConfig,
    priority: &PriorityRanking,
    group_prefixes: &[String],
) -> Result<(), ConfigError> {
    for prefix in group_prefixes {
        let aggregate_key = WeightConfig::aggregate_key(prefix);
        let Some(&aggregate) = config.get(&aggregate_key) else {
            continue;
        };

        let sub_criteria: Vec<String> = column_names
            .iter()
            .filter(|name| name_prefix(name) == prefix.as_str())
            .filter_map(|name| name.strip_prefix(&format!("{}_", prefix)))
            .map(str::to_string)
            .collect();

        let retained = priority.retain(&sub_criteria);
        if retained.is_empty() {
            return Err(ConfigError::EmptyPriorityOverlap {
                prefix: prefix.clone(),
            });
        }

        debug!(
            prefix = %prefix,
            sub_criteria = retained.len(),
            "Distributing aggregate group weight"
        );

        // The aggregate entry is only consumed once distribution is certain.
        config.remove(&aggregate_key);

        for (sub, share) in retained.inverted_normalized() {
            config.insert(
                format!("{}_{}", prefix, sub),
                WeightEntry {
                    direction: aggregate.direction,
                    weight: share * aggregate.weight,
                },
            );
        }
    }

    Ok(())
}
