//! # SLE Solver
//!
//! A small linear-algebra toolkit over exact rational numbers: a dense
//! [`Matrix`] type, an [`AugmentedSystem`] wrapping a coefficient matrix and
//! its free-term column, and Gaussian elimination to row-echelon and reduced
//! row-echelon form. No floating point is involved at any step, so zero and
//! one tests during pivoting are exact.

pub mod errors;
pub mod gauss;
pub mod matrix;
pub mod rational;
pub mod render;
pub mod testcase;

pub use errors::SleSolverError;
pub use gauss::{AugmentedSystem, RowOp};
pub use matrix::{sequential_mul, Matrix};
pub use rational::Rational;
