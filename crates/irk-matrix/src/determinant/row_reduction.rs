use crate::determinant::{DetMethod, DetResult, DeterminantAlgorithm};
use crate::error::Result;
use crate::format::{describe_elimination, describe_swap, fmt};
use crate::math::{approx_zero, Matrix};
use crate::steps::StepTrace;

/// Forward elimination with partial pivoting; `det = (-1)^swaps · ∏ diagonal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowReduction;

impl DeterminantAlgorithm for RowReduction {
    fn compute(&self, a: &Matrix) -> Result<DetResult> {
        determinant_row_reduction(a)
    }

    fn method(&self) -> DetMethod {
        DetMethod::RowReduction
    }

    fn name(&self) -> &str {
        "row reduction"
    }
}

pub fn determinant_row_reduction(a: &Matrix) -> Result<DetResult> {
    let n = a.ensure_square()?;
    log::debug!("row-reduction determinant of {}x{} matrix", n, n);

    let mut m = a.clone();
    let mut steps = StepTrace::new();
    let mut swaps = 0usize;

    for col in 0..n {
        let pivot = m.partial_pivot(col, col);
        log::trace!("column {}: pivot row {} ({})", col + 1, pivot + 1, m[(pivot, col)]);
        if approx_zero(m[(pivot, col)]) {
            log::warn!("pivot in column {} is zero, determinant is 0", col + 1);
            steps.add(format!("Pivot column {} ≈ 0 → det(A) = 0", col + 1));
            return Ok(DetResult {
                determinant: 0.0,
                steps,
            });
        }

        if pivot != col {
            m.swap_rows(col, pivot);
            swaps += 1;
            steps.add(format!(
                "{}  (determinant changes sign)",
                describe_swap(col, pivot)
            ));
        }

        for r in col + 1..n {
            let k = m[(r, col)] / m[(col, col)];
            if approx_zero(k) {
                continue;
            }
            m.sub_scaled_row(r, col, k);
            steps.add(format!(
                "{}  (determinant unchanged)",
                describe_elimination(r, col, k)
            ));
        }
    }

    let sign = if swaps % 2 == 0 { 1.0 } else { -1.0 };
    let determinant = sign * m.diagonal_product();
    steps.add(format!(
        "det(A) = (-1)^{} × (∏ diagonal) = {}",
        swaps,
        fmt(determinant)
    ));

    Ok(DetResult { determinant, steps })
}
