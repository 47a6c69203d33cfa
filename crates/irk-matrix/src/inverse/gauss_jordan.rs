use crate::error::{MatrixError, Result};
use crate::format::{describe_elimination, describe_scale, describe_swap};
use crate::inverse::InverseResult;
use crate::math::{approx_zero, Matrix};
use crate::steps::StepTrace;

/// Reduce `[A | I]` to `[I | A⁻¹]` with partial pivoting.
pub fn inverse_gauss_jordan(a: &Matrix) -> Result<InverseResult> {
    let n = a.ensure_square()?;
    log::debug!("Gauss-Jordan inverse of {}x{} matrix", n, n);

    let mut aug = a.augment(&Matrix::identity(n))?;
    let mut steps = StepTrace::new();

    for col in 0..n {
        let pivot = aug.partial_pivot(col, col);
        log::trace!("column {}: pivot row {} ({})", col + 1, pivot + 1, aug[(pivot, col)]);
        if approx_zero(aug[(pivot, col)]) {
            log::warn!("no usable pivot in column {}, matrix is singular", col + 1);
            return Err(MatrixError::singular(format!(
                "pivot in column {} is zero; the matrix has no inverse",
                col + 1
            )));
        }

        if pivot != col {
            aug.swap_rows(col, pivot);
            steps.add(describe_swap(col, pivot));
        }

        let p = aug[(col, col)];
        if !approx_zero(p - 1.0) {
            aug.divide_row(col, p);
            steps.add(describe_scale(col, p));
        }

        for r in (0..n).filter(|&r| r != col) {
            let f = aug[(r, col)];
            if approx_zero(f) {
                continue;
            }
            aug.sub_scaled_row(r, col, f);
            steps.add(describe_elimination(r, col, f));
        }
    }

    steps.add("Result: [I | A⁻¹]");
    Ok(InverseResult {
        inverse: aug.select_columns(n..),
        steps,
    })
}
