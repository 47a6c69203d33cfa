//! Elementary matrix arithmetic, narrated one entry at a time.
use serde::Serialize;

use crate::error::{MatrixError, Result};
use crate::format::fmt;
use crate::math::Matrix;
use crate::steps::StepTrace;

#[derive(Debug, Clone, Serialize)]
pub struct MatrixOpResult {
    pub result: Matrix,
    pub steps: StepTrace,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScalarOpResult {
    pub value: f64,
    pub steps: StepTrace,
}

fn ensure_same_shape(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(MatrixError::dimension(format!(
            "operands must have the same shape, got {}x{} and {}x{}",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        )));
    }
    Ok(())
}

fn entrywise<F>(a: &Matrix, b: &Matrix, symbol: &str, op: F) -> Result<MatrixOpResult>
where
    F: Fn(f64, f64) -> f64,
{
    ensure_same_shape(a, b)?;
    let (rows, cols) = a.shape();
    let mut result = Matrix::zeros(rows, cols);
    let mut steps = StepTrace::new();
    for i in 0..rows {
        for j in 0..cols {
            result[(i, j)] = op(a[(i, j)], b[(i, j)]);
            steps.add(format!(
                "c[{r},{c}] = a[{r},{c}] {s} b[{r},{c}] = {} {s} {} = {}",
                fmt(a[(i, j)]),
                fmt(b[(i, j)]),
                fmt(result[(i, j)]),
                r = i + 1,
                c = j + 1,
                s = symbol
            ));
        }
    }
    Ok(MatrixOpResult { result, steps })
}

pub fn add(a: &Matrix, b: &Matrix) -> Result<MatrixOpResult> {
    entrywise(a, b, "+", |x, y| x + y)
}

pub fn sub(a: &Matrix, b: &Matrix) -> Result<MatrixOpResult> {
    entrywise(a, b, "-", |x, y| x - y)
}

pub fn scalar_multiply(a: &Matrix, k: f64) -> MatrixOpResult {
    let result = a.mapv(|v| v * k);
    let mut steps = StepTrace::new();
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            steps.add(format!(
                "c[{r},{c}] = a[{r},{c}] * {k} = {} * {k} = {}",
                fmt(a[(i, j)]),
                fmt(result[(i, j)]),
                r = i + 1,
                c = j + 1,
                k = fmt(k)
            ));
        }
    }
    MatrixOpResult { result, steps }
}

pub fn transpose(a: &Matrix) -> MatrixOpResult {
    let result = a.transpose();
    let mut steps = StepTrace::new();
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            steps.add(format!(
                "c[{},{}] = a[{},{}] = {}",
                j + 1,
                i + 1,
                i + 1,
                j + 1,
                fmt(a[(i, j)])
            ));
        }
    }
    MatrixOpResult { result, steps }
}

/// Sum of the main diagonal, one running-total step per diagonal entry.
pub fn trace(a: &Matrix) -> Result<ScalarOpResult> {
    let n = a.ensure_square()?;
    let mut steps = StepTrace::new();
    let mut value = 0.0;
    let mut pieces: Vec<String> = Vec::with_capacity(n);
    for i in 0..n {
        value += a[(i, i)];
        pieces.push(format!("a[{},{}]={}", i + 1, i + 1, fmt(a[(i, i)])));
        steps.add(format!("tr(A) = {} = {}", pieces.join(" + "), fmt(value)));
    }
    Ok(ScalarOpResult { value, steps })
}

pub fn multiply(a: &Matrix, b: &Matrix) -> Result<MatrixOpResult> {
    let result = a.matmul(b)?;
    let mut steps = StepTrace::new();
    for i in 0..a.nrows() {
        for j in 0..b.ncols() {
            let terms: Vec<String> = (0..a.ncols())
                .map(|k| format!("a[{},{}] * b[{},{}]", i + 1, k + 1, k + 1, j + 1))
                .collect();
            steps.add(format!(
                "c[{},{}] = {} = {}",
                i + 1,
                j + 1,
                terms.join(" + "),
                fmt(result[(i, j)])
            ));
        }
    }
    Ok(MatrixOpResult { result, steps })
}
