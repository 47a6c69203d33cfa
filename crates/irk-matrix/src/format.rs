//! Text in and out: fixed-precision number formatting, matrix pretty-printing
//! for snapshots, row-operation phrasing, and parsing of typed-in matrices.
use crate::error::{MatrixError, Result};
use crate::math::{Matrix, Vector};

/// Every number shown to the user has six decimals.
pub fn fmt(x: f64) -> String {
    format!("{:.6}", x)
}

/// One `[ a, b, c ]` line per row.
pub fn format_matrix(m: &Matrix) -> String {
    let mut out = String::new();
    for r in 0..m.nrows() {
        let cells: Vec<String> = m.row_slice(r).iter().map(|&v| fmt(v)).collect();
        out.push_str("[ ");
        out.push_str(&cells.join(", "));
        out.push_str(" ]\n");
    }
    out
}

/// Like [`format_matrix`] but space-separated with a `|` before `split_col`.
pub fn format_augmented(aug: &Matrix, split_col: usize) -> String {
    let mut out = String::new();
    let cols = aug.ncols();
    for r in 0..aug.nrows() {
        out.push_str("[ ");
        for c in 0..cols {
            if c == split_col {
                out.push_str("| ");
            }
            out.push_str(&fmt(aug[(r, c)]));
            if c != cols - 1 {
                out.push(' ');
            }
        }
        out.push_str(" ]\n");
    }
    out
}

pub(crate) fn describe_swap(a: usize, b: usize) -> String {
    format!("R{} ↔ R{}", a + 1, b + 1)
}

pub(crate) fn describe_scale(row: usize, pivot: f64) -> String {
    format!("R{} ← (1/{})·R{}", row + 1, fmt(pivot), row + 1)
}

/// `R{dst} ← R{dst} ∓ |k|·R{src}` for the operation `dst ← dst − k·src`.
pub(crate) fn describe_elimination(dst: usize, src: usize, k: f64) -> String {
    let sign = if k >= 0.0 { "−" } else { "+" };
    format!(
        "R{} ← R{} {} {}·R{}",
        dst + 1,
        dst + 1,
        sign,
        fmt(k.abs()),
        src + 1
    )
}

fn parse_number(token: &str) -> Result<f64> {
    let value = token.parse::<f64>().map_err(|e| MatrixError::Parse {
        input: token.to_string(),
        reason: e.to_string(),
    })?;
    if !value.is_finite() {
        return Err(MatrixError::Parse {
            input: token.to_string(),
            reason: "entries must be finite numbers".to_string(),
        });
    }
    Ok(value)
}

fn split_entries<'a>(row: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    row.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

/// Parse rows separated by `;` or newlines, entries by whitespace or commas.
///
/// `"2 1; 1 1"` is the 2x2 matrix `[[2, 1], [1, 1]]`.
pub fn parse_matrix(input: &str) -> Result<Matrix> {
    let rows = input
        .split(|c: char| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| split_entries(r).map(parse_number).collect::<Result<Vec<f64>>>())
        .collect::<Result<Vec<Vec<f64>>>>()?;
    if rows.is_empty() {
        return Err(MatrixError::Parse {
            input: input.to_string(),
            reason: "no rows".to_string(),
        });
    }
    Matrix::from_rows(rows)
}

pub fn parse_vector(input: &str) -> Result<Vector> {
    let values = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|t| !t.is_empty())
        .map(parse_number)
        .collect::<Result<Vec<f64>>>()?;
    if values.is_empty() {
        return Err(MatrixError::Parse {
            input: input.to_string(),
            reason: "no entries".to_string(),
        });
    }
    Ok(Vector::from_vec(values))
}
