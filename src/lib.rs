//! Aqua Rank - Weighted multi-criteria ranking for household water-treatment actions.
//!
//! This crate implements a TOPSIS pipeline over a candidates x criteria
//! decision matrix: user preference scores are normalized into top-level
//! weights, the contaminant-family weight is distributed across individual
//! family columns by priority ranking, and candidates are ordered by their
//! similarity to the ideal alternative.

pub mod application;
pub mod config;
pub mod domain;
