//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `matrix` - The decision matrix and criteria resolution
//! - `weights` - Preference intake, weight distribution, and validation
//! - `ranking` - The TOPSIS ranking engine and its results

pub mod foundation;
pub mod matrix;
pub mod ranking;
pub mod weights;
