//! Inverse engine: Gauss–Jordan on `[A | I]` and the adjoint method.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::Matrix;
use crate::steps::StepTrace;

pub mod adjoint;
pub mod gauss_jordan;

pub use adjoint::inverse_adjoint;
pub use gauss_jordan::inverse_gauss_jordan;

#[derive(Debug, Clone, Serialize)]
pub struct InverseResult {
    pub inverse: Matrix,
    pub steps: StepTrace,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InvMethod {
    #[default]
    GaussJordan,
    Adjoint,
}

impl fmt::Display for InvMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvMethod::GaussJordan => f.write_str("gauss-jordan"),
            InvMethod::Adjoint => f.write_str("adjoint"),
        }
    }
}

impl FromStr for InvMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gauss-jordan" | "gauss_jordan" | "gj" => Ok(InvMethod::GaussJordan),
            "adjoint" => Ok(InvMethod::Adjoint),
            _ => Err(format!(
                "Unknown inverse method: {}. Expected one of gauss-jordan, adjoint",
                s
            )),
        }
    }
}

pub fn inverse(a: &Matrix, method: InvMethod) -> Result<InverseResult> {
    match method {
        InvMethod::GaussJordan => inverse_gauss_jordan(a),
        InvMethod::Adjoint => inverse_adjoint(a),
    }
}
