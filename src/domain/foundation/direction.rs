//! Criterion direction value object (benefit vs cost).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether higher values of a criterion are desirable or not.
///
/// A `Benefit` criterion is maximized (higher is better); a `Cost`
/// criterion is minimized (lower is better).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Benefit,
    Cost,
}

impl Direction {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Benefit => "benefit (maximize)",
            Direction::Cost => "cost (minimize)",
        }
    }

    /// Returns true if this criterion is maximized.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Direction::Benefit)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
