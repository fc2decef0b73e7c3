//! Matrix module - The decision matrix and criteria resolution.
//!
//! # Components
//!
//! - `DecisionMatrix` - Candidates x criteria numeric table with optional
//!   categorical tier columns
//! - `resolve_criteria` - Projects the matrix down to the criteria named in
//!   an expanded weight configuration and resolves the categorical
//!   `action_tier` column to numeric ranks

mod decision_matrix;
mod resolver;

pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use resolver::{resolve_criteria, ACTION_TIER_COLUMN};
