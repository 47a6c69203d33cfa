use std::ops::{Index, IndexMut, RangeBounds};

use serde::{Serialize, Serializer};

use crate::error::{MatrixError, Result};
use crate::math::ensure_finite;
use crate::math::vector::Vector;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(MatrixError::dimension(format!(
                "invalid shape ({}, {}) for buffer of length {}",
                rows,
                cols,
                data.len()
            )));
        }
        ensure_finite(&data, "matrix")?;
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let nrows = rows.len();
        let mut data = Vec::with_capacity(nrows * cols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::dimension(format!(
                    "row {} has {} entries, expected {}",
                    idx + 1,
                    row.len(),
                    cols
                )));
            }
            data.extend(row);
        }
        ensure_finite(&data, "matrix")?;
        Ok(Self {
            data,
            rows: nrows,
            cols,
        })
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the dimension `n` of a non-empty square matrix.
    pub fn ensure_square(&self) -> Result<usize> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MatrixError::dimension("matrix must not be empty"));
        }
        if !self.is_square() {
            return Err(MatrixError::dimension(format!(
                "matrix must be square, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(self.rows)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Vector {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)]).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|r| self.row_slice(r).to_vec()).collect()
    }

    pub fn select_columns<R>(&self, range: R) -> Matrix
    where
        R: RangeBounds<usize>,
    {
        use std::ops::Bound;

        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
        };

        let end = match range.end_bound() {
            Bound::Unbounded => self.cols,
            Bound::Included(&e) => e + 1,
            Bound::Excluded(&e) => e,
        };

        assert!(
            start <= end && end <= self.cols,
            "column slice out of bounds"
        );

        let new_cols = end - start;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for row in 0..self.rows {
            data.extend_from_slice(&self.row_slice(row)[start..end]);
        }

        Matrix {
            data,
            rows: self.rows,
            cols: new_cols,
        }
    }

    /// Horizontally concatenate `self` and `right`: `[self | right]`.
    pub fn augment(&self, right: &Matrix) -> Result<Matrix> {
        if self.rows != right.rows {
            return Err(MatrixError::dimension(format!(
                "cannot augment {} rows with {} rows",
                self.rows, right.rows
            )));
        }
        let cols = self.cols + right.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for row in 0..self.rows {
            data.extend_from_slice(self.row_slice(row));
            data.extend_from_slice(right.row_slice(row));
        }
        Ok(Matrix {
            data,
            rows: self.rows,
            cols,
        })
    }

    /// `[self | b]` for a right-hand side of matching length.
    pub fn augment_vector(&self, b: &Vector) -> Result<Matrix> {
        if b.len() != self.rows {
            return Err(MatrixError::dimension(format!(
                "vector has length {}, expected {}",
                b.len(),
                self.rows
            )));
        }
        let column = Matrix {
            data: b.to_vec(),
            rows: b.len(),
            cols: 1,
        };
        self.augment(&column)
    }

    /// Copy of `self` with column `col` replaced by `b`.
    pub fn with_column(&self, col: usize, b: &Vector) -> Result<Matrix> {
        if b.len() != self.rows {
            return Err(MatrixError::dimension(format!(
                "vector has length {}, expected {}",
                b.len(),
                self.rows
            )));
        }
        assert!(col < self.cols, "column index out of bounds");
        let mut out = self.clone();
        for row in 0..self.rows {
            out[(row, col)] = b[row];
        }
        Ok(out)
    }

    /// The submatrix left after deleting `skip_row` and `skip_col`.
    pub fn minor(&self, skip_row: usize, skip_col: usize) -> Matrix {
        let rows = self.rows.saturating_sub(1);
        let cols = self.cols.saturating_sub(1);
        let mut data = Vec::with_capacity(rows * cols);
        for r in (0..self.rows).filter(|&r| r != skip_row) {
            for c in (0..self.cols).filter(|&c| c != skip_col) {
                data.push(self[(r, c)]);
            }
        }
        Matrix { data, rows, cols }
    }

    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out[(c, r)] = self[(r, c)];
            }
        }
        out
    }

    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(MatrixError::dimension(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                out[(i, j)] = (0..self.cols).map(|k| self[(i, k)] * rhs[(k, j)]).sum::<f64>();
            }
        }
        Ok(out)
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Entrywise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            let (ia, ib) = (self.offset(a, c), self.offset(b, c));
            self.data.swap(ia, ib);
        }
    }

    /// `row ← row / k`
    pub fn divide_row(&mut self, row: usize, k: f64) {
        for c in 0..self.cols {
            self[(row, c)] /= k;
        }
    }

    /// `dst ← dst − k·src`
    pub fn sub_scaled_row(&mut self, dst: usize, src: usize, k: f64) {
        for c in 0..self.cols {
            let v = self[(src, c)];
            self[(dst, c)] -= k * v;
        }
    }

    /// Row index in `from_row..nrows` holding the largest `|value|` in `col`.
    /// Ties keep the earliest row.
    pub fn partial_pivot(&self, col: usize, from_row: usize) -> usize {
        let mut pivot = from_row;
        let mut best = self[(from_row, col)].abs();
        for r in from_row + 1..self.rows {
            let v = self[(r, col)].abs();
            if v > best {
                best = v;
                pivot = r;
            }
        }
        pivot
    }

    pub fn diagonal_product(&self) -> f64 {
        (0..self.rows.min(self.cols)).map(|i| self[(i, i)]).product()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq((0..self.rows).map(|r| self.row_slice(r)))
    }
}
