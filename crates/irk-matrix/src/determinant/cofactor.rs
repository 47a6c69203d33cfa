use crate::determinant::{DetMethod, DetResult, DeterminantAlgorithm};
use crate::error::Result;
use crate::format::fmt;
use crate::math::Matrix;
use crate::steps::StepTrace;

/// Laplace expansion along the first row, recursing into minors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CofactorExpansion;

impl DeterminantAlgorithm for CofactorExpansion {
    fn compute(&self, a: &Matrix) -> Result<DetResult> {
        determinant_cofactor(a)
    }

    fn method(&self) -> DetMethod {
        DetMethod::Cofactor
    }

    fn name(&self) -> &str {
        "cofactor expansion"
    }
}

pub fn determinant_cofactor(a: &Matrix) -> Result<DetResult> {
    let n = a.ensure_square()?;
    log::debug!("cofactor-expansion determinant of {}x{} matrix", n, n);

    let mut steps = StepTrace::new();
    let determinant = expand(a, 0, "A", &mut steps);
    Ok(DetResult { determinant, steps })
}

fn expand(m: &Matrix, depth: usize, label: &str, steps: &mut StepTrace) -> f64 {
    let indent = "  ".repeat(depth);
    let n = m.nrows();

    if n == 1 {
        let d = m[(0, 0)];
        steps.add(format!("{}det({}) = {}", indent, label, fmt(d)));
        return d;
    }

    if n == 2 {
        let d = m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)];
        steps.add(format!(
            "{}det({}) = a11·a22 − a12·a21 = {}",
            indent,
            label,
            fmt(d)
        ));
        return d;
    }

    steps.add(format!(
        "{}Cofactor expansion along row 1: det({}) = Σ a1j·C1j",
        indent, label
    ));

    let mut sum = 0.0;
    for j in 0..n {
        let minor = m.minor(0, j);
        let minor_det = expand(&minor, depth + 1, &format!("minor(1,{})", j + 1), steps);
        // (-1)^(1 + (j+1)) is negative exactly when j is odd
        let cofactor = if j % 2 == 0 { minor_det } else { -minor_det };
        steps.add(format!(
            "{}C1,{} = (-1)^(1+{})·M1,{} = {}",
            indent,
            j + 1,
            j + 1,
            j + 1,
            fmt(cofactor)
        ));
        let term = m[(0, j)] * cofactor;
        steps.add(format!(
            "{}a1,{}·C1,{} = {}·{} = {}",
            indent,
            j + 1,
            j + 1,
            fmt(m[(0, j)]),
            fmt(cofactor),
            fmt(term)
        ));
        sum += term;
    }

    steps.add(format!("{}det({}) = {}", indent, label, fmt(sum)));
    sum
}
