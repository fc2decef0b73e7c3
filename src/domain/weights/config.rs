//! Weight configuration - Typed criterion weight entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Direction;

use super::NormalizedPreferences;

/// Suffix of aggregate group entries (`all_contaminants` etc.) that the
/// distributor expands into one entry per contaminant-family column.
pub(crate) const AGGREGATE_SUFFIX: &str = "contaminants";

/// Returns the group prefix of a structured name (`all_THM` -> `all`).
///
/// Names without an underscore are their own prefix.
pub(crate) fn name_prefix(name: &str) -> &str {
    name.split('_').next().unwrap_or(name)
}

/// Direction and weight assigned to one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub direction: Direction,
    pub weight: f64,
}

impl WeightEntry {
    /// Creates a benefit-direction entry.
    pub fn benefit(weight: f64) -> Self {
        Self {
            direction: Direction::Benefit,
            weight,
        }
    }

    /// Creates a cost-direction entry.
    pub fn cost(weight: f64) -> Self {
        Self {
            direction: Direction::Cost,
            weight,
        }
    }
}

/// Mapping from criterion name to its direction and weight.
///
/// Begins with one aggregate entry per criteria group (the contaminant
/// group plus the cost, time, and repetition tiers) and is expanded by the
/// distributor into one entry per contaminant-family sub-criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightConfig {
    entries: BTreeMap<String, WeightEntry>,
}

impl WeightConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the initial aggregate configuration from normalized
    /// preference scores, merged-data mode.
    ///
    /// The effectiveness mass goes to the single contaminant group under
    /// `group_prefix`; cost, time, and frequency map onto their tier
    /// columns. All four groups are benefit criteria: the shipped matrix
    /// scores every column so that higher is better.
    pub fn from_preferences(prefs: &NormalizedPreferences, group_prefix: &str) -> Self {
        let mut config = Self::new();
        config.insert(
            Self::aggregate_key(group_prefix),
            WeightEntry::benefit(prefs.effectiveness),
        );
        config.insert("cost_tier", WeightEntry::benefit(prefs.cost));
        config.insert("time_tier", WeightEntry::benefit(prefs.time));
        config.insert("repeat_tier", WeightEntry::benefit(prefs.frequency));
        config
    }

    /// Returns the aggregate entry key for a group prefix.
    pub fn aggregate_key(prefix: &str) -> String {
        format!("{}_{}", prefix, AGGREGATE_SUFFIX)
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, criterion: impl Into<String>, entry: WeightEntry) {
        self.entries.insert(criterion.into(), entry);
    }

    /// Removes an entry, returning it if present.
    pub fn remove(&mut self, criterion: &str) -> Option<WeightEntry> {
        self.entries.remove(criterion)
    }

    /// Returns the entry for a criterion.
    pub fn get(&self, criterion: &str) -> Option<&WeightEntry> {
        self.entries.get(criterion)
    }

    /// Returns true if the criterion has an entry.
    pub fn contains(&self, criterion: &str) -> bool {
        self.entries.contains_key(criterion)
    }

    /// Iterates over (criterion, entry) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &WeightEntry)> {
        self.entries.iter()
    }

    /// Returns the configured criterion names.
    pub fn criteria(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the configuration is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sums all configured weights.
    pub fn weight_sum(&self) -> f64 {
        self.entries.values().map(|e| e.weight).sum()
    }
}
