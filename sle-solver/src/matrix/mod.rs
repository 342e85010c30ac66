//! Dense matrix with exact-rational entries.
//!
//! All transforming operations are pure: they validate shapes, then build and
//! return a new [`Matrix`] without touching the receiver.

use crate::errors::SleSolverError;
use crate::rational::Rational;

use num_traits::Zero;

use serde::{Deserialize, Serialize};

use std::ops::Index;

/// A rectangular `rows x cols` grid of [`Rational`] values.
///
/// Dimensions are at least 1x1 and fixed for the lifetime of the instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<Vec<Rational>>,
}

impl Matrix {
    /// Create a new matrix from an explicit grid of values.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::InvalidDimensions` if either dimension is
    /// zero, the grid has the wrong number of rows, or any row has the wrong
    /// length.
    pub fn try_with(
        rows: usize,
        cols: usize,
        values: Vec<Vec<Rational>>,
    ) -> Result<Self, SleSolverError> {
        if rows < 1 || cols < 1 {
            return Err(SleSolverError::InvalidDimensions(format!(
                "Dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        if values.len() != rows {
            return Err(SleSolverError::InvalidDimensions(format!(
                "Expected {} rows, got {}",
                rows,
                values.len()
            )));
        }
        for (i, row) in values.iter().enumerate() {
            if row.len() != cols {
                return Err(SleSolverError::InvalidDimensions(format!(
                    "Row {} has length {} but expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }

        Ok(Matrix { rows, cols, values })
    }

    /// Create a matrix from integer rows, inferring the dimensions.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::InvalidDimensions` on an empty or ragged grid.
    pub fn from_integer_rows(values: Vec<Vec<i64>>) -> Result<Self, SleSolverError> {
        let rows = values.len();
        let cols = values.first().map_or(0, Vec::len);
        let values = values
            .into_iter()
            .map(|row| row.into_iter().map(Rational::from_integer).collect())
            .collect();

        Self::try_with(rows, cols, values)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the entries of row `i`.
    pub fn row(&self, i: usize) -> &[Rational] {
        &self.values[i]
    }

    /// Computes the element-wise sum `self + other`.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::DimensionMismatch` unless both matrices share
    /// the same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, SleSolverError> {
        self.combine(other, "addition", |a, b| a + b)
    }

    /// Computes the element-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::DimensionMismatch` unless both matrices share
    /// the same shape.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, SleSolverError> {
        self.combine(other, "subtraction", |a, b| a - b)
    }

    fn combine(
        &self,
        other: &Matrix,
        op: &str,
        f: impl Fn(Rational, Rational) -> Rational,
    ) -> Result<Matrix, SleSolverError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(SleSolverError::DimensionMismatch(format!(
                "Sizes must match for {} ({}x{} vs {}x{})",
                op, self.rows, self.cols, other.rows, other.cols
            )));
        }

        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(lhs, rhs)| {
                lhs.iter()
                    .zip(rhs.iter())
                    .map(|(a, b)| f(a.clone(), b.clone()))
                    .collect()
            })
            .collect();

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            values,
        })
    }

    /// Multiplies every entry by the scalar `k`.
    pub fn scale(&self, k: &Rational) -> Matrix {
        let values = self
            .values
            .iter()
            .map(|row| row.iter().map(|v| v.clone() * k.clone()).collect())
            .collect();

        Matrix {
            rows: self.rows,
            cols: self.cols,
            values,
        }
    }

    /// Computes the matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::DimensionMismatch` unless `self.cols`
    /// equals `other.rows`.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, SleSolverError> {
        if self.cols != other.rows {
            return Err(SleSolverError::DimensionMismatch(format!(
                "Inner dimensions must match for multiplication ({} vs {})",
                self.cols, other.rows
            )));
        }

        let mut values = vec![vec![Rational::zero(); other.cols]; self.rows];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = Rational::zero();
                for k in 0..self.cols {
                    sum = sum + self.values[i][k].clone() * other.values[k][j].clone();
                }
                values[i][j] = sum;
            }
        }

        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            values,
        })
    }

    /// Raises a square matrix to a positive integer power by repeated
    /// multiplication; `exp == 1` returns a copy of `self`.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::NotSquare` for a non-square receiver and
    /// `SleSolverError::InvalidExponent` when `exp` is zero.
    pub fn pow(&self, exp: u32) -> Result<Matrix, SleSolverError> {
        if self.rows != self.cols {
            return Err(SleSolverError::NotSquare(format!(
                "Can only raise a square matrix to a power, got {}x{}",
                self.rows, self.cols
            )));
        }
        if exp == 0 {
            return Err(SleSolverError::InvalidExponent(
                "Exponent must be a positive integer, got 0".to_string(),
            ));
        }

        let mut result = self.clone();
        for _ in 1..exp {
            result = result.mul(self)?;
        }
        Ok(result)
    }

    /// Returns the transpose, a `cols x rows` matrix with entry
    /// `(i, j) = self[(j, i)]`.
    pub fn transpose(&self) -> Matrix {
        let values = (0..self.cols)
            .map(|col| (0..self.rows).map(|row| self.values[row][col].clone()).collect())
            .collect();

        Matrix {
            rows: self.cols,
            cols: self.rows,
            values,
        }
    }

    /// Sum of the main-diagonal entries over `0..min(rows, cols)`.
    ///
    /// Defined for any shape, not only square matrices.
    pub fn trace(&self) -> Rational {
        (0..self.rows.min(self.cols))
            .map(|i| self.values[i][i].clone())
            .sum()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Rational {
        &self.values[row][col]
    }
}

/// Left-fold of [`Matrix::mul`] across the given matrices in listed order.
///
/// # Errors
///
/// Returns `SleSolverError::InvalidDimensions` on an empty slice and
/// propagates `SleSolverError::DimensionMismatch` from the first
/// incompatible pair.
pub fn sequential_mul(matrices: &[Matrix]) -> Result<Matrix, SleSolverError> {
    let Some((first, rest)) = matrices.split_first() else {
        return Err(SleSolverError::InvalidDimensions(
            "Sequential multiplication needs at least one matrix".to_string(),
        ));
    };

    rest.iter().try_fold(first.clone(), |acc, m| acc.mul(m))
}
