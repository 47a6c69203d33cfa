//! Gauss–Jordan elimination to reduced row-echelon form, with the system
//! classified as having a unique solution, infinitely many, or none.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};
use crate::format::{describe_elimination, describe_scale, describe_swap, fmt, format_augmented};
use crate::math::{approx_zero, Matrix, Vector, EPS};
use crate::steps::StepTrace;

/// Names handed out to free variables, reused cyclically.
pub const PARAMETER_NAMES: [&str; 9] = ["s", "t", "u", "v", "w", "r", "k", "p", "q"];

/// How the pivot row is chosen within a column.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PivotMode {
    /// Largest `|value|` among the remaining rows.
    #[default]
    Greedy,
    /// First remaining row whose entry is not ≈ 0.
    First,
}

impl fmt::Display for PivotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PivotMode::Greedy => f.write_str("greedy"),
            PivotMode::First => f.write_str("first"),
        }
    }
}

impl FromStr for PivotMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "greedy" => Ok(PivotMode::Greedy),
            "first" => Ok(PivotMode::First),
            _ => Err(format!(
                "Unknown pivot mode: {}. Expected greedy or first",
                s
            )),
        }
    }
}

/// A pivot variable written in terms of the free parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParametricExpression {
    /// 0-based variable index.
    pub variable: usize,
    pub constant: f64,
    /// `(coefficient, parameter name)`, coefficient already negated.
    pub terms: Vec<(f64, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Solution {
    Unique {
        values: Vector,
    },
    Infinite {
        /// `(column, parameter name)` for every free column.
        parameters: Vec<(usize, String)>,
        expressions: Vec<ParametricExpression>,
    },
    Inconsistent {
        /// 0-based row of the final RREF reading `[0 … 0 | c]`.
        row: usize,
        constant: f64,
    },
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Inconsistent { constant, .. } => write!(
                f,
                "No solution (inconsistent). Found row [0 … 0 | {}]",
                fmt(*constant)
            ),
            Solution::Unique { values } => {
                write!(f, "Unique solution:")?;
                for (i, v) in values.iter().enumerate() {
                    write!(f, "\nx{} = {}", i + 1, fmt(*v))?;
                }
                Ok(())
            }
            Solution::Infinite {
                parameters,
                expressions,
            } => {
                write!(f, "Infinitely many solutions. Let:")?;
                for (col, name) in parameters {
                    write!(f, "\nx{} = {}", col + 1, name)?;
                }
                for expr in expressions {
                    let mut parts = vec![fmt(expr.constant)];
                    parts.extend(
                        expr.terms
                            .iter()
                            .map(|(coef, name)| format!("{}·{}", fmt(*coef), name)),
                    );
                    write!(f, "\nx{} = {}", expr.variable + 1, parts.join(" + "))?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SplResult {
    pub solution: Solution,
    /// Final `[A | b]` in reduced row-echelon form.
    pub rref: Matrix,
    pub steps: StepTrace,
}

impl SplResult {
    pub fn report(&self) -> String {
        self.solution.to_string()
    }
}

fn select_pivot(aug: &Matrix, col: usize, from_row: usize, mode: PivotMode) -> Option<usize> {
    let mut pivot = None;
    let mut best = 0.0;
    for r in from_row..aug.nrows() {
        let v = aug[(r, col)].abs();
        if v > EPS && (mode == PivotMode::First || v > best) {
            best = v;
            pivot = Some(r);
            if mode == PivotMode::First {
                break;
            }
        }
    }
    pivot
}

/// Solve `A x = b` by reducing `[A | b]` to RREF and classifying the result.
pub fn solve_gauss_jordan(a: &Matrix, b: &Vector, mode: PivotMode) -> Result<SplResult> {
    let n = a.ensure_square()?;
    if b.len() != n {
        return Err(MatrixError::dimension(format!(
            "right-hand side has length {}, expected {}",
            b.len(),
            n
        )));
    }
    b.ensure_finite()?;
    log::debug!("Gauss-Jordan solve of {}x{} system ({} pivoting)", n, n, mode);

    let mut aug = a.augment_vector(b)?;
    let mut steps = StepTrace::new();
    let mut row = 0usize;
    let mut pivot_cols: Vec<usize> = Vec::with_capacity(n);

    for col in 0..n {
        let Some(pivot) = select_pivot(&aug, col, row, mode) else {
            log::trace!("column {} has no pivot, variable is free", col + 1);
            continue;
        };
        log::trace!("column {}: pivot row {} ({})", col + 1, pivot + 1, aug[(pivot, col)]);

        if pivot != row {
            aug.swap_rows(row, pivot);
            steps.add(describe_swap(row, pivot));
        }

        let p = aug[(row, col)];
        if !approx_zero(p - 1.0) {
            aug.divide_row(row, p);
            steps.add(describe_scale(row, p));
        }

        for r in (0..n).filter(|&r| r != row) {
            let f = aug[(r, col)];
            if approx_zero(f) {
                continue;
            }
            aug.sub_scaled_row(r, row, f);
            steps.add(describe_elimination(r, row, f));
        }

        pivot_cols.push(col);
        let title = format!("After pivot column {}", col + 1);
        steps.snapshot(Some(title.as_str()), format_augmented(&aug, n));
        row += 1;
        if row == n {
            break;
        }
    }

    let solution = classify(&aug, n, &pivot_cols);
    if matches!(solution, Solution::Inconsistent { .. }) {
        log::warn!("system is inconsistent");
    }

    Ok(SplResult {
        solution,
        rref: aug,
        steps,
    })
}

fn classify(aug: &Matrix, n: usize, pivot_cols: &[usize]) -> Solution {
    for i in 0..aug.nrows() {
        let all_zero = (0..n).all(|j| approx_zero(aug[(i, j)]));
        if all_zero && !approx_zero(aug[(i, n)]) {
            return Solution::Inconsistent {
                row: i,
                constant: aug[(i, n)],
            };
        }
    }

    if pivot_cols.len() == n {
        let mut values = Vector::zeros(n);
        for (r, &c) in pivot_cols.iter().enumerate() {
            values[c] = aug[(r, n)];
        }
        return Solution::Unique { values };
    }

    let parameters: Vec<(usize, String)> = (0..n)
        .filter(|c| !pivot_cols.contains(c))
        .enumerate()
        .map(|(idx, c)| (c, PARAMETER_NAMES[idx % PARAMETER_NAMES.len()].to_string()))
        .collect();

    let expressions = pivot_cols
        .iter()
        .enumerate()
        .map(|(r, &c)| ParametricExpression {
            variable: c,
            constant: aug[(r, n)],
            terms: parameters
                .iter()
                .filter(|(j, _)| !approx_zero(aug[(r, *j)]))
                .map(|(j, name)| (-aug[(r, *j)], name.clone()))
                .collect(),
        })
        .collect();

    Solution::Infinite {
        parameters,
        expressions,
    }
}
