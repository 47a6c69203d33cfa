//! Error types shared by every engine in the crate.

use thiserror::Error;

/// Failures reported by the matrix engines.
///
/// Every failure is raised before or instead of a result; an engine never
/// returns a partially computed value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Empty, ragged or non-square input, or operands of incompatible shape.
    #[error("Dimension mismatch: {reason}")]
    DimensionMismatch { reason: String },

    /// The selected algorithm cannot run on this input (Sarrus on non-3x3).
    #[error("Algorithm precondition violated: {reason}")]
    AlgorithmPrecondition { reason: String },

    /// The matrix has no inverse.
    #[error("Singular matrix: {reason}")]
    Singular { reason: String },

    /// An entry is NaN or infinite.
    #[error("Non-finite entry: {reason}")]
    NonFinite { reason: String },

    /// Textual matrix or vector input could not be read.
    #[error("Could not parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

impl MatrixError {
    pub fn dimension(reason: impl Into<String>) -> Self {
        MatrixError::DimensionMismatch {
            reason: reason.into(),
        }
    }

    pub fn precondition(reason: impl Into<String>) -> Self {
        MatrixError::AlgorithmPrecondition {
            reason: reason.into(),
        }
    }

    pub fn non_finite(reason: impl Into<String>) -> Self {
        MatrixError::NonFinite {
            reason: reason.into(),
        }
    }

    pub fn singular(reason: impl Into<String>) -> Self {
        MatrixError::Singular {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
