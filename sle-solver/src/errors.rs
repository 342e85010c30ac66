#[derive(thiserror::Error, Debug)]
pub enum SleSolverError {
    /// Error when constructing a matrix with a non-positive or ragged shape.
    #[error("InvalidDimensions: {0}")]
    InvalidDimensions(String),
    /// Error when combining matrices whose shapes are incompatible.
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// Error when raising a non-square matrix to a power.
    #[error("NotSquare: {0}")]
    NotSquare(String),
    /// Error when raising a matrix to a non-positive exponent.
    #[error("InvalidExponent: {0}")]
    InvalidExponent(String),
    /// Error when constructing a rational with a zero denominator or dividing by zero.
    #[error("DivisionByZero: {0}")]
    DivisionByZero(String),

    #[error("Cannot swap row {0} with itself")]
    DegenerateSwap(usize),
    #[error("Cannot scale row {0} by zero")]
    ZeroScale(usize),
    #[error("Magnitude bound must be positive, got {0}")]
    InvalidRange(i64),
}
