//! Determinant engine: row reduction, cofactor expansion and Sarrus.
//!
//! The three algorithms are interchangeable behind [`DeterminantAlgorithm`]
//! and agree (within floating tolerance) on every input they accept.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::Matrix;
use crate::steps::StepTrace;

pub mod cofactor;
pub mod row_reduction;
pub mod sarrus;

pub use cofactor::{determinant_cofactor, CofactorExpansion};
pub use row_reduction::{determinant_row_reduction, RowReduction};
pub use sarrus::{determinant_sarrus, Sarrus};

#[derive(Debug, Clone, Serialize)]
pub struct DetResult {
    pub determinant: f64,
    pub steps: StepTrace,
}

/// Selects one of the determinant algorithms.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DetMethod {
    #[default]
    RowReduction,
    Cofactor,
    Sarrus,
}

impl fmt::Display for DetMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetMethod::RowReduction => "row-reduction",
            DetMethod::Cofactor => "cofactor",
            DetMethod::Sarrus => "sarrus",
        };
        f.write_str(name)
    }
}

impl FromStr for DetMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "row-reduction" | "row_reduction" | "obe" => Ok(DetMethod::RowReduction),
            "cofactor" => Ok(DetMethod::Cofactor),
            "sarrus" => Ok(DetMethod::Sarrus),
            _ => Err(format!(
                "Unknown determinant method: {}. Expected one of row-reduction, cofactor, sarrus",
                s
            )),
        }
    }
}

/// Contract shared by the determinant algorithms so callers such as the
/// Cramer solver can stay agnostic of which one the user picked.
pub trait DeterminantAlgorithm {
    /// Compute `det(a)` on a private copy of `a`, narrating every step.
    fn compute(&self, a: &Matrix) -> Result<DetResult>;

    fn method(&self) -> DetMethod;

    fn name(&self) -> &str {
        "determinant"
    }
}

/// Build a boxed determinant algorithm for `method`.
pub fn build_algorithm(method: DetMethod) -> Box<dyn DeterminantAlgorithm + Send + Sync> {
    match method {
        DetMethod::RowReduction => Box::new(RowReduction),
        DetMethod::Cofactor => Box::new(CofactorExpansion),
        DetMethod::Sarrus => Box::new(Sarrus),
    }
}

pub fn determinant(a: &Matrix, method: DetMethod) -> Result<DetResult> {
    build_algorithm(method).compute(a)
}
