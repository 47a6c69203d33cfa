use crate::determinant::{DetMethod, DetResult, DeterminantAlgorithm};
use crate::error::{MatrixError, Result};
use crate::format::fmt;
use crate::math::Matrix;
use crate::steps::StepTrace;

/// Rule of Sarrus. Only defined for 3x3 matrices.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sarrus;

impl DeterminantAlgorithm for Sarrus {
    fn compute(&self, a: &Matrix) -> Result<DetResult> {
        determinant_sarrus(a)
    }

    fn method(&self) -> DetMethod {
        DetMethod::Sarrus
    }

    fn name(&self) -> &str {
        "Sarrus"
    }
}

pub fn determinant_sarrus(a: &Matrix) -> Result<DetResult> {
    if a.shape() != (3, 3) {
        let (rows, cols) = a.shape();
        return Err(MatrixError::precondition(format!(
            "Sarrus' rule requires a 3x3 matrix, got {}x{}",
            rows, cols
        )));
    }
    log::debug!("Sarrus determinant of 3x3 matrix");

    let mut steps = StepTrace::new();

    let d1 = a[(0, 0)] * a[(1, 1)] * a[(2, 2)];
    let d2 = a[(0, 1)] * a[(1, 2)] * a[(2, 0)];
    let d3 = a[(0, 2)] * a[(1, 0)] * a[(2, 1)];

    let u1 = a[(0, 2)] * a[(1, 1)] * a[(2, 0)];
    let u2 = a[(0, 0)] * a[(1, 2)] * a[(2, 1)];
    let u3 = a[(0, 1)] * a[(1, 0)] * a[(2, 2)];

    steps.add(format!(
        "Σ descending diagonals = {} + {} + {}",
        fmt(d1),
        fmt(d2),
        fmt(d3)
    ));
    steps.add(format!(
        "Σ ascending diagonals  = {} + {} + {}",
        fmt(u1),
        fmt(u2),
        fmt(u3)
    ));

    let determinant = (d1 + d2 + d3) - (u1 + u2 + u3);
    steps.add(format!(
        "det(A) = (Σ descending) − (Σ ascending) = {}",
        fmt(determinant)
    ));

    Ok(DetResult { determinant, steps })
}
