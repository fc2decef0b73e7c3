//! Weights module - Preference intake, weight distribution, and validation.
//!
//! # Components
//!
//! - `PreferenceRatings` - The four raw user preference scores and their
//!   normalization to a unit-sum distribution
//! - `WeightConfig` / `WeightEntry` - Typed criterion weight configuration
//! - `PriorityRanking` - Sub-criterion priority table with rank inversion
//! - `distribute_group_weights` - Expands aggregate group weights into
//!   per-sub-criterion entries proportional to priority
//! - `validate_weights` - Gatekeeps the sum-to-1 invariant and emits the
//!   position-aligned weight and direction vectors

mod config;
mod distributor;
mod preferences;
mod priority;
mod validator;

pub(crate) use config::name_prefix;
pub use config::{WeightConfig, WeightEntry};
pub use distributor::distribute_group_weights;
pub use preferences::{NormalizedPreferences, PreferenceRatings};
pub use priority::PriorityRanking;
pub use validator::{validate_weights, ValidatedWeights, WEIGHT_SUM_TOLERANCE};
