//! Static configuration module
//!
//! Holds the lookup tables shipped with the system: the contaminant-family
//! priority ranking, the action-category ranking, and the reserved group
//! prefixes used for structured column names. Custom tables can be loaded
//! from JSON to override the shipped defaults.

mod error;
mod tables;

pub use error::TableLoadError;
pub use tables::{
    default_action_category_ranking, default_contaminant_ranking, merged_group_prefixes,
    ranking_from_json, split_group_prefixes, MERGED_GROUP_PREFIX,
};
