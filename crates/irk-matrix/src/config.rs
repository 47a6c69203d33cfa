use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::determinant::DetMethod;
use crate::error::{MatrixError, Result};
use crate::inverse::InvMethod;
use crate::linear_system::PivotMode;
use crate::math::{Matrix, Vector};

/// A single problem to hand to one of the engines.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ProblemConfig {
    pub matrix: Vec<Vec<f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f64>>,

    #[serde(flatten)]
    pub operation: Operation,
}

/// Which engine to run, and with which algorithm variant.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Operation {
    Determinant {
        #[serde(default)]
        method: DetMethod,
    },
    Inverse {
        #[serde(default)]
        method: InvMethod,
    },
    Solve {
        #[serde(default)]
        pivot: PivotMode,
    },
    Cramer {
        #[serde(default)]
        method: DetMethod,
    },
}

impl Default for Operation {
    fn default() -> Self {
        Operation::Solve {
            pivot: PivotMode::Greedy,
        }
    }
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Determinant { .. } => "determinant",
            Operation::Inverse { .. } => "inverse",
            Operation::Solve { .. } => "solve",
            Operation::Cramer { .. } => "cramer",
        }
    }

    /// Whether the operation needs a right-hand-side vector.
    pub fn needs_vector(&self) -> bool {
        matches!(self, Operation::Solve { .. } | Operation::Cramer { .. })
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "determinant" | "det" => Ok(Operation::Determinant {
                method: DetMethod::default(),
            }),
            "inverse" | "inv" => Ok(Operation::Inverse {
                method: InvMethod::default(),
            }),
            "solve" | "spl" => Ok(Operation::Solve {
                pivot: PivotMode::default(),
            }),
            "cramer" => Ok(Operation::Cramer {
                method: DetMethod::default(),
            }),
            _ => Err(format!(
                "Unknown operation: {}. Expected one of determinant, inverse, solve, cramer",
                s
            )),
        }
    }
}

impl ProblemConfig {
    pub fn new(matrix: Vec<Vec<f64>>, vector: Option<Vec<f64>>, operation: Operation) -> Self {
        Self {
            matrix,
            vector,
            operation,
        }
    }

    pub fn matrix(&self) -> Result<Matrix> {
        Matrix::from_rows(self.matrix.clone())
    }

    /// The right-hand side, required when the operation solves a system.
    pub fn vector(&self) -> Result<Vector> {
        self.vector
            .clone()
            .map(Vector::from_vec)
            .ok_or_else(|| {
                MatrixError::dimension(format!(
                    "operation '{}' needs a right-hand-side vector",
                    self.operation.name()
                ))
            })
    }
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            matrix: vec![vec![2.0, 1.0], vec![1.0, 1.0]],
            vector: Some(vec![3.0, 2.0]),
            operation: Operation::default(),
        }
    }
}

/// Contents of a problem file: one problem or a list of them.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ProblemSet {
    Single(ProblemConfig),
    Batch(Vec<ProblemConfig>),
}

impl ProblemSet {
    pub fn into_problems(self) -> Vec<ProblemConfig> {
        match self {
            ProblemSet::Single(problem) => vec![problem],
            ProblemSet::Batch(problems) => problems,
        }
    }
}
