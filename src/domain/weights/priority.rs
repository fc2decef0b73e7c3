//! Priority ranking - Sub-criterion priorities and rank inversion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::ConfigError;

/// Mapping from sub-criterion name to a priority rank.
///
/// Rank 1 is the highest priority; ties are allowed and receive equal
/// weight when the ranking is converted to a weight split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityRanking {
    ranks: BTreeMap<String, u32>,
}

impl PriorityRanking {
    /// Creates a priority ranking, validating that every rank is positive.
    pub fn try_new(ranks: BTreeMap<String, u32>) -> Result<Self, ConfigError> {
        for (name, &rank) in &ranks {
            if rank == 0 {
                return Err(ConfigError::InvalidPriorityRank {
                    name: name.clone(),
                    rank,
                });
            }
        }
        Ok(Self { ranks })
    }

    /// Creates a priority ranking from name/rank pairs.
    pub fn try_from_pairs(
        pairs: impl IntoIterator<Item = (impl Into<String>, u32)>,
    ) -> Result<Self, ConfigError> {
        Self::try_new(pairs.into_iter().map(|(n, r)| (n.into(), r)).collect())
    }

    /// Returns true if no sub-criteria remain.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Returns the number of ranked sub-criteria.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns the rank for a sub-criterion, if ranked.
    pub fn rank_of(&self, name: &str) -> Option<u32> {
        self.ranks.get(name).copied()
    }

    /// Returns a copy retaining only the named sub-criteria.
    ///
    /// Entries absent from `names` are discarded without error; rankings
    /// ship with the full sub-criterion universe while any given matrix
    /// covers a subset.
    pub fn retain(&self, names: &[String]) -> Self {
        Self {
            ranks: self
                .ranks
                .iter()
                .filter(|(name, _)| names.contains(*name))
                .map(|(name, &rank)| (name.clone(), rank))
                .collect(),
        }
    }

    /// Inverts ranks and normalizes them into a unit-sum weight split.
    ///
    /// Each rank becomes `max_rank - rank + 1`, so rank 1 receives the
    /// largest share; the inverted values are then divided by their total.
    /// Ties at the same rank receive equal shares. Empty ranking yields an
    /// empty map.
    pub fn inverted_normalized(&self) -> BTreeMap<String, f64> {
        let Some(&max_rank) = self.ranks.values().max() else {
            return BTreeMap::new();
        };

        let inverted: BTreeMap<&str, u32> = self
            .ranks
            .iter()
            .map(|(name, &rank)| (name.as_str(), max_rank - rank + 1))
            .collect();
        let total: u32 = inverted.values().sum();

        inverted
            .into_iter()
            .map(|(name, inv)| (name.to_string(), inv as f64 / total as f64))
            .collect()
    }
}
