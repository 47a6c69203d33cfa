use crate::determinant::{determinant_cofactor, determinant_row_reduction};
use crate::error::{MatrixError, Result};
use crate::format::fmt;
use crate::inverse::InverseResult;
use crate::math::{approx_zero, Matrix};
use crate::steps::StepTrace;

/// `A⁻¹ = adj(A) / det(A)` with `adj(A)` the transposed cofactor matrix.
pub fn inverse_adjoint(a: &Matrix) -> Result<InverseResult> {
    let n = a.ensure_square()?;
    log::debug!("adjoint inverse of {}x{} matrix", n, n);

    let mut steps = StepTrace::new();
    let det = determinant_row_reduction(a)?.determinant;
    if approx_zero(det) {
        log::warn!("det(A) = {} is zero, matrix is singular", det);
        return Err(MatrixError::singular(format!(
            "det(A) = {}; the matrix has no inverse",
            fmt(det)
        )));
    }
    steps.add(format!("det(A) = {} ≠ 0", fmt(det)));

    let mut cofactors = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            // The empty minor of a 1x1 matrix has determinant 1.
            let minor_det = if n == 1 {
                1.0
            } else {
                determinant_cofactor(&a.minor(i, j))?.determinant
            };
            let cofactor = if (i + j) % 2 == 0 { minor_det } else { -minor_det };
            cofactors[(i, j)] = cofactor;
            steps.add(format!(
                "M{},{} = det(minor i={}, j={}) = {};  C{},{} = {}",
                i + 1,
                j + 1,
                i + 1,
                j + 1,
                fmt(minor_det),
                i + 1,
                j + 1,
                fmt(cofactor)
            ));
        }
    }

    let adjugate = cofactors.transpose();
    steps.add("adj(A) = Cᵀ");

    let inverse = adjugate.mapv(|v| v / det);
    steps.add("A⁻¹ = (1/det(A)) · adj(A)");

    Ok(InverseResult { inverse, steps })
}
