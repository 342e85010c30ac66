//! Forward elimination and back substitution over an [`AugmentedSystem`].
//!
//! Both passes mutate the grid in place through the elementary operations
//! and report every applied operation to an optional trace callback. The
//! callback is purely observational: `forward` and `backward` run the same
//! code with a no-op tracer.

use crate::errors::SleSolverError;
use crate::gauss::trace::RowOp;
use crate::gauss::AugmentedSystem;
use crate::rational::Rational;

use num_traits::Zero;

/// Observer invoked after each applied elementary operation with the
/// operation descriptor and the current grid state.
pub type Tracer<'a> = &'a mut dyn FnMut(&RowOp, &AugmentedSystem);

impl AugmentedSystem {
    /// Reduces the system to row-echelon form.
    ///
    /// See [`forward_traced`](Self::forward_traced) for the full contract.
    pub fn forward(&mut self) -> Result<(), SleSolverError> {
        self.forward_traced(&mut |_, _| {})
    }

    /// Reduces the system to row-echelon form, reporting each elementary
    /// operation to `tracer`.
    ///
    /// The pass walks a `(pivot_row, pivot_col)` pair down the diagonal:
    /// skip columns that are zero over the scanned rows, swap a nonzero
    /// entry up when the pivot position holds zero, then eliminate every
    /// entry below the pivot. A zero pivot that no swap resolved is skipped
    /// silently and the walk moves on.
    ///
    /// The swap uses the pivot *column* index as its upper endpoint,
    /// `swap_rows(pivot_col, k)`. The two trackers only coincide while no
    /// column has been skipped; once they diverge, the swap can target a row
    /// other than the pivot row, degenerate into a self-swap, or (on a wide
    /// system) point past the last row entirely. The elementary operation
    /// rejects the last two cases and the error propagates to the caller.
    /// Callers relying on solved output for systems with a leading zero
    /// column get exactly this historical behavior.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::DegenerateSwap` or
    /// `SleSolverError::InvalidDimensions` when the swap policy above
    /// degenerates.
    pub fn forward_traced(&mut self, tracer: Tracer<'_>) -> Result<(), SleSolverError> {
        let m = self.rows();
        let n = self.cols();

        let mut pivot_row = 0;
        let mut pivot_col = 0;

        loop {
            if pivot_row >= m || pivot_col >= n {
                return Ok(());
            }
            if self.coefficient_block_is_zero() {
                return Ok(());
            }

            // The original scanned rows 0..n here, using the column count as
            // a row bound; clamped so a wide system cannot index past m.
            let scan_rows = n.min(m);
            while pivot_col < n && (0..scan_rows).all(|i| self[(i, pivot_col)].is_zero()) {
                pivot_col += 1;
            }
            if pivot_col == n {
                return Ok(());
            }

            if self[(pivot_row, pivot_col)].is_zero() {
                if let Some(k) = (pivot_row + 1..m).find(|&k| !self[(k, pivot_col)].is_zero()) {
                    self.swap_rows(pivot_col, k)?;
                    tracer(&RowOp::Swap { a: pivot_col, b: k }, self);
                }
            }

            if !self[(pivot_row, pivot_col)].is_zero() {
                let pivot = self[(pivot_row, pivot_col)].clone();
                for k in pivot_row + 1..m {
                    let scalar = -self[(k, pivot_col)].try_div(&pivot)?;
                    self.add_scaled_row(k, pivot_row, &scalar);
                    tracer(
                        &RowOp::AddScaled {
                            target: k,
                            source: pivot_row,
                            scalar,
                        },
                        self,
                    );
                }
            }

            pivot_row += 1;
            pivot_col += 1;
        }
    }

    /// Reduces a row-echelon system to reduced row-echelon form.
    ///
    /// See [`backward_traced`](Self::backward_traced) for the full contract.
    pub fn backward(&mut self) -> Result<(), SleSolverError> {
        self.backward_traced(&mut |_, _| {})
    }

    /// Back substitution in three passes: normalize each row's leading
    /// entry to 1, clear the columns above every leading 1, then sink
    /// all-zero rows to the bottom (a stable partition, so nonzero rows
    /// keep their relative order).
    ///
    /// The leading-1 search of the middle pass covers the coefficient
    /// columns only; a row whose single 1 sits in the free-term column has
    /// no leading column and is left alone. Such a row witnesses an
    /// inconsistent system, which is not an error here: callers inspect the
    /// final grid.
    ///
    /// The zero-row sink is not an elementary operation and fires no trace
    /// events.
    ///
    /// # Errors
    ///
    /// Propagates errors from the elementary operations; none are reachable
    /// when the grid is well-formed.
    pub fn backward_traced(&mut self, tracer: Tracer<'_>) -> Result<(), SleSolverError> {
        let m = self.rows();
        let n = self.cols();

        for i in 0..m {
            let lead = self.row(i).iter().find(|value| !value.is_zero()).cloned();
            if let Some(lead) = lead {
                let scalar = lead.recip()?;
                self.scale_row(i, &scalar)?;
                tracer(&RowOp::Scale { row: i, scalar }, self);
            }
        }

        for i in (0..m).rev() {
            let Some(rl) = (0..n).find(|&col| self[(i, col)].is_one()) else {
                continue;
            };
            for j in (0..i).rev() {
                let scalar = -self[(j, rl)].clone();
                self.add_scaled_row(j, i, &scalar);
                tracer(
                    &RowOp::AddScaled {
                        target: j,
                        source: i,
                        scalar,
                    },
                    self,
                );
            }
        }

        self.sink_zero_rows();
        Ok(())
    }

    fn coefficient_block_is_zero(&self) -> bool {
        (0..self.rows()).all(|i| (0..self.cols()).all(|j| self[(i, j)].is_zero()))
    }

    fn sink_zero_rows(&mut self) {
        let width = self.cols() + 1;
        let zero_rows = self
            .grid
            .iter()
            .filter(|row| row.iter().all(Rational::is_zero))
            .count();
        if zero_rows == 0 {
            return;
        }

        self.grid.retain(|row| !row.iter().all(Rational::is_zero));
        for _ in 0..zero_rows {
            self.grid.push(vec![Rational::zero(); width]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::matrix::Matrix;

    fn system(a: Vec<Vec<i64>>, b: Vec<i64>) -> AugmentedSystem {
        let a = Matrix::from_integer_rows(a).unwrap();
        let b = Matrix::from_integer_rows(b.into_iter().map(|v| vec![v]).collect()).unwrap();
        AugmentedSystem::try_with(&a, &b).unwrap()
    }

    fn grid_of(sys: &AugmentedSystem) -> Vec<Vec<Rational>> {
        sys.grid().to_vec()
    }

    fn r(num: i64, den: i64) -> Rational {
        Rational::try_with(num, den).unwrap()
    }

    #[test]
    fn test_forward_eliminates_below_pivot() -> Result<(), SleSolverError> {
        let mut sys = system(vec![vec![2, 1], vec![1, 3]], vec![5, 10]);
        sys.forward()?;

        assert_eq!(
            grid_of(&sys),
            vec![
                vec![r(2, 1), r(1, 1), r(5, 1)],
                vec![r(0, 1), r(5, 2), r(15, 2)],
            ]
        );
        Ok(())
    }

    #[test]
    fn test_forward_swaps_on_zero_pivot() -> Result<(), SleSolverError> {
        let mut sys = system(vec![vec![0, 1], vec![1, 0]], vec![2, 3]);
        let mut ops = Vec::new();
        sys.forward_traced(&mut |op, _| ops.push(op.clone()))?;

        assert_eq!(ops[0], RowOp::Swap { a: 0, b: 1 });
        assert_eq!(sys[(0, 0)], r(1, 1));
        Ok(())
    }

    #[test]
    fn test_forward_skips_zero_column() -> Result<(), SleSolverError> {
        let mut sys = system(vec![vec![0, 2], vec![0, 3]], vec![4, 6]);
        sys.forward()?;

        // Column 0 is skipped; the pivot lands on (0, 1) and clears below.
        assert_eq!(sys[(1, 1)], r(0, 1));
        assert_eq!(sys[(1, 2)], r(0, 1));
        Ok(())
    }

    #[test]
    fn test_forward_zero_block_is_untouched() -> Result<(), SleSolverError> {
        let mut sys = system(vec![vec![0, 0], vec![0, 0]], vec![1, 2]);
        let before = grid_of(&sys);
        let mut ops = Vec::new();
        sys.forward_traced(&mut |op, _| ops.push(op.clone()))?;

        assert!(ops.is_empty());
        assert_eq!(grid_of(&sys), before);
        Ok(())
    }

    #[test]
    fn test_forward_swap_policy_can_degenerate() {
        // Column 0 is skipped, so the trackers diverge; the swap endpoint
        // is the column index and collides with the found row.
        let mut sys = system(vec![vec![0, 0], vec![0, 1]], vec![2, 3]);
        assert!(matches!(
            sys.forward(),
            Err(SleSolverError::DegenerateSwap(1))
        ));
    }

    #[test]
    fn test_forward_swap_policy_out_of_range_is_an_error() {
        // Wide system with three skipped columns: the column tracker ends
        // past the last row, so the swap endpoint has no row to point at.
        // The elementary operation surfaces the error instead of panicking.
        let mut sys = system(vec![vec![0, 0, 0, 0], vec![0, 0, 0, 5]], vec![1, 2]);
        assert!(matches!(
            sys.forward(),
            Err(SleSolverError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_backward_reduces_to_identity() -> Result<(), SleSolverError> {
        let mut sys = system(vec![vec![2, 1], vec![1, 3]], vec![5, 10]);
        sys.forward()?;
        sys.backward()?;

        assert_eq!(
            grid_of(&sys),
            vec![
                vec![r(1, 1), r(0, 1), r(1, 1)],
                vec![r(0, 1), r(1, 1), r(3, 1)],
            ]
        );
        Ok(())
    }

    #[test]
    fn test_backward_sinks_zero_rows_stably() -> Result<(), SleSolverError> {
        let mut sys = system(
            vec![vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 1]],
            vec![0, 2, 3],
        );
        sys.backward()?;

        // The zero row drops below both nonzero rows, which keep their order.
        assert_eq!(
            grid_of(&sys),
            vec![
                vec![r(1, 1), r(1, 1), r(0, 1), r(2, 1)],
                vec![r(0, 1), r(0, 1), r(1, 1), r(3, 1)],
                vec![r(0, 1), r(0, 1), r(0, 1), r(0, 1)],
            ]
        );
        Ok(())
    }

    #[test]
    fn test_backward_skips_free_term_leading_one() -> Result<(), SleSolverError> {
        // Row 1 reduces to [0, 0 | 1]: its 1 sits in the free-term column,
        // so the clear-above pass must not treat it as a pivot.
        let mut sys = system(vec![vec![1, 1], vec![0, 0]], vec![3, 1]);
        sys.backward()?;

        assert_eq!(
            grid_of(&sys),
            vec![
                vec![r(1, 1), r(1, 1), r(3, 1)],
                vec![r(0, 1), r(0, 1), r(1, 1)],
            ]
        );
        Ok(())
    }

    #[test]
    fn test_tracer_sees_each_operation() -> Result<(), SleSolverError> {
        let mut sys = system(vec![vec![2, 1], vec![1, 3]], vec![5, 10]);
        let mut ops = Vec::new();
        let mut snapshots = Vec::new();
        sys.forward_traced(&mut |op, state| {
            ops.push(op.clone());
            snapshots.push(state.clone());
        })?;

        assert_eq!(
            ops,
            vec![RowOp::AddScaled {
                target: 1,
                source: 0,
                scalar: r(-1, 2),
            }]
        );
        assert_eq!(snapshots.last().unwrap(), &sys);
        Ok(())
    }
}
