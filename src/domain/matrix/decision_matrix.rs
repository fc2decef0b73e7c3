//! Decision Matrix - Core data structure for the TOPSIS pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::domain::foundation::MatrixError;

/// The candidates x criteria table that is the sole data input to ranking.
///
/// Rows are candidate actions identified by a unique action code; numeric
/// columns are criteria. Categorical columns (the action-tier column) are
/// held in a side table until the resolver maps them to numeric ranks.
///
/// The matrix is immutable once built; per-request preprocessing operates
/// on a clone so a shared snapshot is never mutated mid-computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    /// Ordered list of candidate identifiers (action codes).
    pub candidate_ids: Vec<String>,
    /// Ordered list of numeric criterion names.
    pub criterion_names: Vec<String>,
    /// Row-major values, aligned with `candidate_ids` x `criterion_names`.
    pub values: Vec<Vec<f64>>,
    /// Categorical columns keyed by name, one label per candidate.
    pub categorical: BTreeMap<String, Vec<String>>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns the number of candidates.
    pub fn candidate_count(&self) -> usize {
        self.candidate_ids.len()
    }

    /// Returns the number of numeric criteria.
    pub fn criterion_count(&self) -> usize {
        self.criterion_names.len()
    }

    /// Returns the index of a numeric criterion by name.
    pub fn criterion_index(&self, name: &str) -> Option<usize> {
        self.criterion_names.iter().position(|c| c == name)
    }

    /// Returns one numeric column by index.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.values.iter().map(|row| row[j]).collect()
    }

    /// Returns the entry for a candidate row and criterion column.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Adds +1 to every entry of any numeric column whose values are all
    /// zero, returning the names of the adjusted columns.
    ///
    /// All-zero columns would produce a zero Euclidean norm during TOPSIS
    /// normalization. The constant offset is numerically neutral for the
    /// ranking and is reported as an informational warning.
    pub fn offset_zero_columns(&mut self) -> Vec<String> {
        let mut adjusted = Vec::new();

        for j in 0..self.criterion_count() {
            if self.values.iter().all(|row| row[j] == 0.0) {
                for row in &mut self.values {
                    row[j] += 1.0;
                }
                adjusted.push(self.criterion_names[j].clone());
            }
        }

        if !adjusted.is_empty() {
            warn!(
                columns = ?adjusted,
                "Adjusted all-zero columns by adding 1 to every entry"
            );
        }

        adjusted
    }
}

/// Builder for constructing validated DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criterion_names: Vec<String>,
    candidate_ids: Vec<String>,
    rows: Vec<Vec<f64>>,
    categorical: BTreeMap<String, Vec<String>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the numeric criterion names, in column order.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criterion_names = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds one candidate row of numeric values, aligned with `criteria`.
    pub fn candidate(mut self, id: impl Into<String>, row: Vec<f64>) -> Self {
        self.candidate_ids.push(id.into());
        self.rows.push(row);
        self
    }

    /// Adds a categorical column with one label per candidate, aligned
    /// with the order candidates were added.
    pub fn categorical_column(
        mut self,
        name: impl Into<String>,
        labels: Vec<impl Into<String>>,
    ) -> Self {
        self.categorical
            .insert(name.into(), labels.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Builds the matrix, validating shape, uniqueness, and finiteness.
    pub fn build(self) -> Result<DecisionMatrix, MatrixError> {
        if self.candidate_ids.is_empty()
            || (self.criterion_names.is_empty() && self.categorical.is_empty())
        {
            return Err(MatrixError::EmptyMatrix);
        }

        for (i, id) in self.candidate_ids.iter().enumerate() {
            if self.candidate_ids[..i].contains(id) {
                return Err(MatrixError::DuplicateCandidate {
                    candidate: id.clone(),
                });
            }
        }

        // Criterion names are column identities; a repeated name would let
        // one weight entry cover two columns and double its mass.
        for (j, name) in self.criterion_names.iter().enumerate() {
            if self.criterion_names[..j].contains(name) {
                return Err(MatrixError::DuplicateCriterion {
                    criterion: name.clone(),
                });
            }
        }

        for (id, row) in self.candidate_ids.iter().zip(&self.rows) {
            if row.len() != self.criterion_names.len() {
                return Err(MatrixError::RowLengthMismatch {
                    candidate: id.clone(),
                    expected: self.criterion_names.len(),
                    actual: row.len(),
                });
            }
            for (j, v) in row.iter().enumerate() {
                if !v.is_finite() {
                    return Err(MatrixError::NonFiniteEntry {
                        candidate: id.clone(),
                        criterion: self.criterion_names[j].clone(),
                    });
                }
            }
        }

        for (name, labels) in &self.categorical {
            if labels.len() != self.candidate_ids.len() {
                return Err(MatrixError::RowLengthMismatch {
                    candidate: name.clone(),
                    expected: self.candidate_ids.len(),
                    actual: labels.len(),
                });
            }
        }

        Ok(DecisionMatrix {
            candidate_ids: self.candidate_ids,
            criterion_names: self.criterion_names,
            values: self.rows,
            categorical: self.categorical,
        })
    }
}
