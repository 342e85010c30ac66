//! Random test-case generation for matrices and augmented systems.

use crate::errors::SleSolverError;
use crate::gauss::AugmentedSystem;
use crate::matrix::Matrix;

use rand::prelude::{Rng, SeedableRng, StdRng};

/// Generates a `rows x cols` matrix with integer entries drawn uniformly
/// from `-bound..bound`.
///
/// # Errors
///
/// Returns `SleSolverError::InvalidRange` when `bound < 1` and
/// `SleSolverError::InvalidDimensions` for a non-positive shape.
pub fn random_matrix(
    rows: usize,
    cols: usize,
    bound: i64,
    rng: &mut StdRng,
) -> Result<Matrix, SleSolverError> {
    if bound < 1 {
        return Err(SleSolverError::InvalidRange(bound));
    }

    let values = (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_range(-bound..bound)).collect())
        .collect();

    Matrix::from_integer_rows(values)
}

/// Generates an augmented system with random coefficients and free terms.
///
/// The generator is seeded, so the same `(rows, cols, bound, seed)` always
/// produces the same system.
///
/// # Errors
///
/// Returns `SleSolverError::InvalidRange` when `bound < 1` and
/// `SleSolverError::InvalidDimensions` for a non-positive shape.
pub fn random_system(
    rows: usize,
    cols: usize,
    bound: i64,
    seed: u64,
) -> Result<AugmentedSystem, SleSolverError> {
    let mut rng = StdRng::seed_from_u64(seed);

    let a = random_matrix(rows, cols, bound, &mut rng)?;
    let b = random_matrix(rows, 1, bound, &mut rng)?;

    AugmentedSystem::try_with(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::BigInt;

    const TEST_SEED: u64 = 42;

    #[test]
    fn test_rejects_non_positive_bound() {
        assert!(matches!(
            random_system(2, 2, 0, TEST_SEED),
            Err(SleSolverError::InvalidRange(0))
        ));
        assert!(matches!(
            random_system(2, 2, -5, TEST_SEED),
            Err(SleSolverError::InvalidRange(-5))
        ));
    }

    #[test]
    fn test_rejects_empty_shape() {
        assert!(matches!(
            random_system(0, 3, 10, TEST_SEED),
            Err(SleSolverError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_same_seed_same_system() -> Result<(), SleSolverError> {
        let a = random_system(4, 3, 100, TEST_SEED)?;
        let b = random_system(4, 3, 100, TEST_SEED)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_different_seed_different_system() -> Result<(), SleSolverError> {
        let a = random_system(4, 3, 100, TEST_SEED)?;
        let b = random_system(4, 3, 100, TEST_SEED + 1)?;
        assert_ne!(a, b);
        Ok(())
    }

    #[test]
    fn test_entries_respect_bound() -> Result<(), SleSolverError> {
        let bound = 7i64;
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        let matrix = random_matrix(5, 5, bound, &mut rng)?;

        for i in 0..matrix.rows() {
            for value in matrix.row(i) {
                assert_eq!(value.denominator(), &BigInt::from(1));
                assert!(value.numerator() >= &BigInt::from(-bound));
                assert!(value.numerator() < &BigInt::from(bound));
            }
        }
        Ok(())
    }
}
