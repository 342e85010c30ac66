//! Augmented linear system and the Gaussian elimination passes.
//!
//! [`AugmentedSystem`] concatenates a coefficient matrix with a free-term
//! column into one `m x (n+1)` grid. The grid is the only mutable state in
//! the library: after construction it changes exclusively through the three
//! elementary row operations, which the elimination passes in [`engine`]
//! drive and report through the [`RowOp`] trace contract.

pub mod engine;
pub mod trace;

pub use trace::RowOp;

use crate::errors::SleSolverError;
use crate::matrix::Matrix;
use crate::rational::Rational;

use serde::{Deserialize, Serialize};

use std::ops::Index;

/// A system of linear equations as an augmented `m x (n+1)` grid, where
/// column `n` holds the free terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentedSystem {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Rational>>,
}

impl AugmentedSystem {
    /// Build the augmented grid from a coefficient matrix and a free-term
    /// column.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::DimensionMismatch` unless `a` and `b` share
    /// the same row count and `b` has exactly one column.
    pub fn try_with(a: &Matrix, b: &Matrix) -> Result<Self, SleSolverError> {
        if a.rows() != b.rows() {
            return Err(SleSolverError::DimensionMismatch(format!(
                "Coefficient matrix has {} rows but free-term column has {}",
                a.rows(),
                b.rows()
            )));
        }
        if b.cols() != 1 {
            return Err(SleSolverError::DimensionMismatch(format!(
                "Free terms must form a single column, got {} columns",
                b.cols()
            )));
        }

        let grid = (0..a.rows())
            .map(|i| {
                let mut row = a.row(i).to_vec();
                row.push(b[(i, 0)].clone());
                row
            })
            .collect();

        Ok(AugmentedSystem {
            rows: a.rows(),
            cols: a.cols(),
            grid,
        })
    }

    /// Number of rows `m`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of coefficient columns `n` (the grid has `n + 1` columns).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entries of row `i`, free term included.
    pub fn row(&self, i: usize) -> &[Rational] {
        &self.grid[i]
    }

    /// The full augmented grid.
    pub fn grid(&self) -> &[Vec<Rational>] {
        &self.grid
    }

    /// Elementary operation of the first kind: adds `scalar` times row
    /// `source` to row `target`.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scalar: &Rational) {
        for col in 0..=self.cols {
            let term = self.grid[source][col].clone() * scalar.clone();
            self.grid[target][col] = self.grid[target][col].clone() + term;
        }
    }

    /// Elementary operation of the second kind: exchanges rows `i` and `j`.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::DegenerateSwap` when `i == j` (a self-swap
    /// signals a logic error upstream and must surface) and
    /// `SleSolverError::InvalidDimensions` when either index has no row.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), SleSolverError> {
        if i == j {
            return Err(SleSolverError::DegenerateSwap(i));
        }
        if i >= self.rows || j >= self.rows {
            return Err(SleSolverError::InvalidDimensions(format!(
                "Row index {} out of range for {} rows",
                i.max(j),
                self.rows
            )));
        }
        self.grid.swap(i, j);
        Ok(())
    }

    /// Elementary operation of the third kind: multiplies row `i` by
    /// `scalar`.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::ZeroScale` when the scalar is zero, since
    /// that would irreversibly erase the row.
    pub fn scale_row(&mut self, i: usize, scalar: &Rational) -> Result<(), SleSolverError> {
        if scalar.is_zero() {
            return Err(SleSolverError::ZeroScale(i));
        }
        for value in self.grid[i].iter_mut() {
            *value = value.clone() * scalar.clone();
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for AugmentedSystem {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Rational {
        &self.grid[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_traits::Zero;

    fn system(a: Vec<Vec<i64>>, b: Vec<i64>) -> AugmentedSystem {
        let a = Matrix::from_integer_rows(a).unwrap();
        let b = Matrix::from_integer_rows(b.into_iter().map(|v| vec![v]).collect()).unwrap();
        AugmentedSystem::try_with(&a, &b).unwrap()
    }

    #[test]
    fn test_construction_concatenates() {
        let sys = system(vec![vec![2, 1], vec![1, 3]], vec![5, 10]);
        assert_eq!((sys.rows(), sys.cols()), (2, 2));
        assert_eq!(sys[(0, 2)], Rational::from(5));
        assert_eq!(sys[(1, 2)], Rational::from(10));
    }

    #[test]
    fn test_construction_validates_shapes() {
        let a = Matrix::from_integer_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let short = Matrix::from_integer_rows(vec![vec![1]]).unwrap();
        let wide = Matrix::from_integer_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();

        assert!(matches!(
            AugmentedSystem::try_with(&a, &short),
            Err(SleSolverError::DimensionMismatch(_))
        ));
        assert!(matches!(
            AugmentedSystem::try_with(&a, &wide),
            Err(SleSolverError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_add_scaled_row() -> Result<(), SleSolverError> {
        let mut sys = system(vec![vec![2, 1], vec![1, 3]], vec![5, 10]);
        sys.add_scaled_row(1, 0, &Rational::try_with(-1, 2)?);

        assert_eq!(sys[(1, 0)], Rational::zero());
        assert_eq!(sys[(1, 1)], Rational::try_with(5, 2)?);
        assert_eq!(sys[(1, 2)], Rational::try_with(15, 2)?);
        Ok(())
    }

    #[test]
    fn test_swap_rows() -> Result<(), SleSolverError> {
        let mut sys = system(vec![vec![1, 0], vec![0, 1]], vec![7, 8]);
        sys.swap_rows(0, 1)?;
        assert_eq!(sys[(0, 2)], Rational::from(8));

        assert!(matches!(
            sys.swap_rows(1, 1),
            Err(SleSolverError::DegenerateSwap(1))
        ));
        assert!(matches!(
            sys.swap_rows(5, 0),
            Err(SleSolverError::InvalidDimensions(_))
        ));
        Ok(())
    }

    #[test]
    fn test_scale_row() -> Result<(), SleSolverError> {
        let mut sys = system(vec![vec![2, 4]], vec![6]);
        sys.scale_row(0, &Rational::try_with(1, 2)?)?;
        let expected: Vec<Rational> = vec![1.into(), 2.into(), 3.into()];
        assert_eq!(sys.row(0), expected.as_slice());

        assert!(matches!(
            sys.scale_row(0, &Rational::zero()),
            Err(SleSolverError::ZeroScale(0))
        ));
        Ok(())
    }
}
