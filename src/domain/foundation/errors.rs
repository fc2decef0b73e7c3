//! Error types for the domain layer.

use thiserror::Error;

/// Fatal configuration errors.
///
/// Any of these means the weight configuration cannot produce a meaningful
/// ranking; processing halts before a partial result is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Sum of weights is {actual}, expected {expected} (tolerance {tolerance})")]
    WeightSumMismatch {
        expected: f64,
        actual: f64,
        tolerance: f64,
    },

    #[error("Criterion '{criterion}' is retained in the matrix but has no assigned weight")]
    MissingWeight { criterion: String },

    #[error("No sub-criteria of group '{prefix}' overlap with the priority ranking; its weight mass cannot be distributed")]
    EmptyPriorityOverlap { prefix: String },

    #[error("Category '{value}' in column '{criterion}' has no entry in the action-category ranking")]
    UnmappedCategory { criterion: String, value: String },

    #[error("Priority rank for '{name}' must be a positive integer, got {rank}")]
    InvalidPriorityRank { name: String, rank: u32 },

    #[error("Preference score for '{key}' must be non-negative and finite, got {actual}")]
    InvalidPreference { key: &'static str, actual: f64 },
}

/// Data precondition violations.
///
/// These indicate a malformed decision matrix or a shape mismatch between
/// the matrix and the weight/direction vectors. They are ingestion bugs
/// upstream and are never coerced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Decision matrix has no candidates or no criteria")]
    EmptyMatrix,

    #[error("Row for candidate '{candidate}' has {actual} entries, expected {expected}")]
    RowLengthMismatch {
        candidate: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate candidate identifier '{candidate}'")]
    DuplicateCandidate { candidate: String },

    #[error("Duplicate criterion name '{criterion}'")]
    DuplicateCriterion { criterion: String },

    #[error("Entry for candidate '{candidate}', criterion '{criterion}' is not finite")]
    NonFiniteEntry { candidate: String, criterion: String },

    #[error("Column '{criterion}' has a zero Euclidean norm; it must be offset before ranking")]
    ZeroNormColumn { criterion: String },

    #[error("Shape mismatch: matrix has {matrix_columns} columns but {vector} vector covers {vector_len}")]
    ShapeMismatch {
        matrix_columns: usize,
        vector: &'static str,
        vector_len: usize,
    },
}

/// Top-level error for a full ranking pipeline run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
