//! Elementary-operation descriptors for the trace callback.

use crate::rational::Rational;

use serde::{Deserialize, Serialize};

use std::fmt;

/// One applied elementary row operation.
///
/// Indices are zero-based; [`Display`](fmt::Display) renders the classic
/// one-based `e1`/`e2`/`e3` notation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowOp {
    /// Row `target` += `scalar` * row `source`.
    AddScaled {
        target: usize,
        source: usize,
        scalar: Rational,
    },
    /// Rows `a` and `b` exchanged.
    Swap { a: usize, b: usize },
    /// Row `row` multiplied by `scalar`.
    Scale { row: usize, scalar: Rational },
}

impl fmt::Display for RowOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOp::AddScaled {
                target,
                source,
                scalar,
            } => write!(f, "e1({}, {}, {})", target + 1, source + 1, scalar),
            RowOp::Swap { a, b } => write!(f, "e2({}, {})", a + 1, b + 1),
            RowOp::Scale { row, scalar } => write!(f, "e3({}, {})", row + 1, scalar),
        }
    }
}
