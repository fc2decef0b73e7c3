//! Application layer - Per-request pipeline orchestration.
//!
//! This layer wires the domain stages together in their fixed order:
//! normalize preferences, distribute the contaminant group weight, resolve
//! criteria, validate weights, rank. It owns the immutable shared inputs
//! (matrix snapshot and lookup tables); everything request-scoped lives on
//! the stack of a single `rank` call.

mod pipeline;

pub use pipeline::RankingPipeline;
