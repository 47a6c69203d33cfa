//! Loading problem files and dispatching them to the engines.
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use irk_matrix::config::{Operation, ProblemConfig, ProblemSet};
use irk_matrix::cramer::solve_cramer;
use irk_matrix::determinant::{determinant, DetMethod};
use irk_matrix::format::{fmt, format_matrix};
use irk_matrix::inverse::{inverse, InvMethod};
use irk_matrix::linear_system::{solve_gauss_jordan, PivotMode};
use irk_matrix::StepTrace;

/// What one engine call produced, ready to print or serialize.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemReport {
    pub operation: String,
    pub variant: String,
    pub result: String,
    pub steps: StepTrace,
}

/// One entry of a batch run: a report, or the reason the problem failed.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Report(ProblemReport),
    Failed { error: String },
}

/// Load one problem or a list of problems from a JSON file.
pub fn load_problem_set<P: AsRef<Path>>(path: P) -> Result<Vec<ProblemConfig>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read problem file: {}", path.as_ref().display()))?;
    let set: ProblemSet = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse problem file: {}", path.as_ref().display()))?;
    Ok(set.into_problems())
}

/// Command-line replacements for the algorithm fields of loaded problems.
///
/// Each field only touches the operations it belongs to: `det_method` the
/// determinant and Cramer problems, `inv_method` the inverses, `pivot` the
/// Gauss-Jordan solves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub det_method: Option<DetMethod>,
    pub inv_method: Option<InvMethod>,
    pub pivot: Option<PivotMode>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        *self == Overrides::default()
    }

    pub fn apply(&self, problem: &mut ProblemConfig) {
        match &mut problem.operation {
            Operation::Determinant { method } | Operation::Cramer { method } => {
                if let Some(m) = self.det_method {
                    *method = m;
                }
            }
            Operation::Inverse { method } => {
                if let Some(m) = self.inv_method {
                    *method = m;
                }
            }
            Operation::Solve { pivot } => {
                if let Some(p) = self.pivot {
                    *pivot = p;
                }
            }
        }
    }
}

/// Run the engine selected by `problem.operation`.
pub fn evaluate(problem: &ProblemConfig) -> Result<ProblemReport> {
    let a = problem.matrix()?;
    let operation = problem.operation.name().to_string();
    if problem.vector.is_some() && !problem.operation.needs_vector() {
        log::warn!("[irk] {} ignores the supplied vector", operation);
    }

    let report = match problem.operation {
        Operation::Determinant { method } => {
            let res = determinant(&a, method)?;
            ProblemReport {
                operation,
                variant: method.to_string(),
                result: format!("det(A) = {}", fmt(res.determinant)),
                steps: res.steps,
            }
        }
        Operation::Inverse { method } => {
            let res = inverse(&a, method)?;
            ProblemReport {
                operation,
                variant: method.to_string(),
                result: format!("inv(A) =\n{}", format_matrix(&res.inverse).trim_end()),
                steps: res.steps,
            }
        }
        Operation::Solve { pivot } => {
            let b = problem.vector()?;
            let res = solve_gauss_jordan(&a, &b, pivot)?;
            ProblemReport {
                operation,
                variant: pivot.to_string(),
                result: res.report(),
                steps: res.steps,
            }
        }
        Operation::Cramer { method } => {
            let b = problem.vector()?;
            let res = solve_cramer(&a, &b, method)?;
            ProblemReport {
                operation,
                variant: method.to_string(),
                result: res.report(),
                steps: res.steps,
            }
        }
    };

    log::info!(
        "[irk] {} ({}) finished with {} steps",
        report.operation,
        report.variant,
        report.steps.len()
    );
    Ok(report)
}

/// Evaluate independent problems in parallel. Output order matches input.
pub fn evaluate_batch(problems: &[ProblemConfig]) -> Vec<BatchEntry> {
    problems
        .par_iter()
        .map(|problem| match evaluate(problem) {
            Ok(report) => BatchEntry::Report(report),
            Err(e) => BatchEntry::Failed {
                error: format!("{:#}", e),
            },
        })
        .collect()
}
