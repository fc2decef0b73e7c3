//! Ranking module - The TOPSIS engine and its result types.
//!
//! # Components
//!
//! - `TopsisEngine` - Similarity-to-ideal-solution scoring over the
//!   resolved matrix and validated weights
//! - `RankingResult` / `RankedCandidate` - The three candidate orderings
//!   produced by one ranking run

mod result;
mod topsis;

pub use result::{RankedCandidate, RankingResult};
pub use topsis::TopsisEngine;
