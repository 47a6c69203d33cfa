//! Cramer's rule: `x_i = det(A_i) / det(A)`, where `A_i` is `A` with column
//! `i` replaced by `b`. All determinants come from the caller's chosen
//! determinant algorithm.
use std::fmt;

use serde::Serialize;

use crate::determinant::{build_algorithm, DetMethod};
use crate::error::{MatrixError, Result};
use crate::format::fmt;
use crate::math::{approx_zero, Matrix, Vector};
use crate::steps::StepTrace;

/// Either a solution, or a refusal because `det(A) ≈ 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CramerOutcome {
    Solved { solution: Vector },
    /// The system has no unique solution; Cramer's rule cannot tell whether
    /// there are none or infinitely many.
    Inapplicable { determinant: f64 },
}

impl CramerOutcome {
    pub fn solution(&self) -> Option<&Vector> {
        match self {
            CramerOutcome::Solved { solution } => Some(solution),
            CramerOutcome::Inapplicable { .. } => None,
        }
    }
}

impl fmt::Display for CramerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CramerOutcome::Solved { solution } => {
                write!(f, "Solution (Cramer's rule):")?;
                for (i, v) in solution.iter().enumerate() {
                    write!(f, "\nx{} = {}", i + 1, fmt(*v))?;
                }
                Ok(())
            }
            CramerOutcome::Inapplicable { determinant } => write!(
                f,
                "det(A) = {} → Cramer's rule does not apply.\n\
                 No unique solution (either none or infinitely many). \
                 Use Gauss–Jordan elimination to classify the system.",
                fmt(*determinant)
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CramerResult {
    pub outcome: CramerOutcome,
    pub steps: StepTrace,
}

impl CramerResult {
    pub fn report(&self) -> String {
        self.outcome.to_string()
    }
}

pub fn solve_cramer(a: &Matrix, b: &Vector, method: DetMethod) -> Result<CramerResult> {
    let n = a.ensure_square()?;
    if b.len() != n {
        return Err(MatrixError::dimension(format!(
            "right-hand side has length {}, expected {}",
            b.len(),
            n
        )));
    }
    b.ensure_finite()?;
    if method == DetMethod::Sarrus && n != 3 {
        return Err(MatrixError::precondition(format!(
            "Sarrus' rule requires a 3x3 system, got {}x{}",
            n, n
        )));
    }
    let algorithm = build_algorithm(method);
    log::debug!(
        "Cramer solve of {}x{} system using {}",
        n,
        n,
        algorithm.name()
    );
    let mut steps = StepTrace::new();

    steps.add("== Compute det(A) ==");
    let det_a = algorithm.compute(a)?;
    let det = det_a.determinant;
    steps.append(det_a.steps);

    if approx_zero(det) {
        log::warn!("det(A) = {} is zero, Cramer's rule does not apply", det);
        return Ok(CramerResult {
            outcome: CramerOutcome::Inapplicable { determinant: det },
            steps,
        });
    }

    let mut solution = Vector::zeros(n);
    for i in 0..n {
        let a_i = a.with_column(i, b)?;
        steps.add(format!(
            "== Build A_{}: replace column {} of A with b ==",
            i + 1,
            i + 1
        ));
        let det_i = algorithm.compute(&a_i)?;
        let det_i_value = det_i.determinant;
        steps.append(det_i.steps);
        solution[i] = det_i_value / det;
        steps.add(format!(
            "x{} = det(A_{}) / det(A) = {} / {} = {}",
            i + 1,
            i + 1,
            fmt(det_i_value),
            fmt(det),
            fmt(solution[i])
        ));
    }

    Ok(CramerResult {
        outcome: CramerOutcome::Solved { solution },
        steps,
    })
}
