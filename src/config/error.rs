//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ConfigError;

/// Errors that can occur while loading a lookup table.
#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("Table parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Table validation failed: {0}")]
    ValidationFailed(#[from] ConfigError),
}
