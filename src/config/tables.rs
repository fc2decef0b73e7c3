//! Shipped lookup tables and group-prefix conventions.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use crate::domain::weights::PriorityRanking;

use super::TableLoadError;

/// Group prefix of the merged contaminant-family columns.
pub const MERGED_GROUP_PREFIX: &str = "all";

/// The expert-elicited health-impact priority of each contaminant family.
///
/// Rank 1 is the highest concern. Several families share a rank and split
/// their weight share equally.
static CONTAMINANT_RANKING: Lazy<PriorityRanking> = Lazy::new(|| {
    PriorityRanking::try_from_pairs([
        ("THM", 1u32),
        ("IDBP", 1),
        ("BrDBP", 1),
        ("HAA", 2),
        ("HAN", 3),
        ("CB", 4),
        ("NS", 5),
        ("HAL", 6),
        ("HAM", 7),
        ("HNM", 8),
        ("HBQ", 9),
        ("PDBP", 10),
        ("HP", 11),
        ("BPA", 12),
        ("VOC", 12),
        ("HDBP", 12),
        ("AOX", 12),
    ])
    .expect("shipped contaminant ranking is valid")
});

/// Tier rank of each general action category.
///
/// All categories currently share rank 1; the table exists so expert
/// overrides can promote or demote whole categories.
static ACTION_CATEGORY_RANKING: Lazy<PriorityRanking> = Lazy::new(|| {
    PriorityRanking::try_from_pairs([
        ("RW", 1u32),
        ("CA", 1),
        ("PN", 1),
        ("PC", 1),
        ("FL", 1),
        ("BL", 1),
        ("CK", 1),
        ("A_other", 1),
    ])
    .expect("shipped action-category ranking is valid")
});

/// Returns the shipped contaminant-family priority ranking.
pub fn default_contaminant_ranking() -> &'static PriorityRanking {
    &CONTAMINANT_RANKING
}

/// Returns the shipped action-category ranking.
pub fn default_action_category_ranking() -> &'static PriorityRanking {
    &ACTION_CATEGORY_RANKING
}

/// Group prefixes for merged-data matrices (one contaminant group).
pub fn merged_group_prefixes() -> Vec<String> {
    vec![MERGED_GROUP_PREFIX.to_string()]
}

/// Group prefixes for matrices that keep the positive, negative, and
/// other effect columns separate.
pub fn split_group_prefixes() -> Vec<String> {
    vec![
        "positive".to_string(),
        "negative".to_string(),
        "other".to_string(),
    ]
}

/// Loads and validates a priority ranking from a JSON object of
/// name-to-rank pairs, e.g. `{"THM": 1, "HAA": 2}`.
pub fn ranking_from_json(json: &str) -> Result<PriorityRanking, TableLoadError> {
    let ranks: BTreeMap<String, u32> = serde_json::from_str(json)?;
    Ok(PriorityRanking::try_new(ranks)?)
}
