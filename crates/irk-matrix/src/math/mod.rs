//! Dense `f64` matrix and vector types used by every engine.
//!
//! Provides `Matrix` (row-major, flat buffer) and `Vector` with the row
//! operations elimination needs. Both are small and dependency-free; the
//! engines work on clones so the caller's values are never touched.
pub mod matrix;
pub mod vector;

use crate::error::{MatrixError, Result};

pub use matrix::Matrix;
pub use vector::Vector;

/// Absolute tolerance for every "is this zero" decision in the crate.
pub const EPS: f64 = 1e-9;

#[inline]
pub fn approx_zero(x: f64) -> bool {
    x.abs() < EPS
}

/// Rejects NaN and infinite values; `what` names the input in the error.
pub(crate) fn ensure_finite(values: &[f64], what: &str) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(MatrixError::non_finite(format!(
            "{} entry {} is {}",
            what,
            idx + 1,
            values[idx]
        ))),
        None => Ok(()),
    }
}
