//! Tabular rendering of matrices and augmented systems.
//!
//! The grid format mirrors the classic bordered table: a header row naming
//! the unknowns `x1..xn` plus the free-term column `b`, with every cell
//! right-aligned to its column width.

use crate::gauss::AugmentedSystem;
use crate::matrix::Matrix;

use itertools::Itertools;

use std::fmt;

/// Renders the augmented grid as a bordered table with `x1..xn | b` headers.
pub fn grid_string(system: &AugmentedSystem) -> String {
    let headers: Vec<String> = (1..=system.cols())
        .map(|i| format!("x{}", i))
        .chain(std::iter::once("b".to_string()))
        .collect();

    let body: Vec<Vec<String>> = (0..system.rows())
        .map(|i| system.row(i).iter().map(|v| v.to_string()).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            body.iter()
                .map(|row| row[col].len())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let border = |fill: char| -> String {
        format!(
            "+{}+",
            widths
                .iter()
                .map(|w| fill.to_string().repeat(w + 2))
                .join("+")
        )
    };
    let line = |cells: &[String]| -> String {
        format!(
            "|{}|",
            cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, w)| format!(" {:>width$} ", cell, width = *w))
                .join("|")
        )
    };

    let mut out = String::new();
    out.push_str(&border('-'));
    out.push('\n');
    out.push_str(&line(&headers));
    out.push('\n');
    out.push_str(&border('='));
    for row in &body {
        out.push('\n');
        out.push_str(&line(row));
        out.push('\n');
        out.push_str(&border('-'));
    }
    out
}

impl fmt::Display for AugmentedSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {}x{}", self.rows(), self.cols())?;
        write!(f, "{}", grid_string(self))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {}x{}", self.rows(), self.cols())?;

        let cells: Vec<Vec<String>> = (0..self.rows())
            .map(|i| self.row(i).iter().map(|v| v.to_string()).collect())
            .collect();
        let widths: Vec<usize> = (0..self.cols())
            .map(|col| cells.iter().map(|row| row[col].len()).max().unwrap_or(0))
            .collect();

        let lines = cells
            .iter()
            .map(|row| {
                row.iter()
                    .zip(widths.iter())
                    .map(|(cell, w)| format!("{:>width$}", cell, width = *w))
                    .join(" ")
            })
            .join("\n");
        write!(f, "{}", lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::errors::SleSolverError;

    fn system(a: Vec<Vec<i64>>, b: Vec<i64>) -> AugmentedSystem {
        let a = Matrix::from_integer_rows(a).unwrap();
        let b = Matrix::from_integer_rows(b.into_iter().map(|v| vec![v]).collect()).unwrap();
        AugmentedSystem::try_with(&a, &b).unwrap()
    }

    #[test]
    fn test_grid_string_layout() {
        let sys = system(vec![vec![2, 1], vec![1, 3]], vec![5, 10]);
        let expected = "\
+----+----+----+
| x1 | x2 |  b |
+====+====+====+
|  2 |  1 |  5 |
+----+----+----+
|  1 |  3 | 10 |
+----+----+----+";
        assert_eq!(grid_string(&sys), expected);
    }

    #[test]
    fn test_grid_string_fits_fractions() -> Result<(), SleSolverError> {
        let mut sys = system(vec![vec![2, 1], vec![1, 3]], vec![5, 10]);
        sys.forward()?;
        let rendered = grid_string(&sys);
        assert!(rendered.contains("5/2"));
        assert!(rendered.contains("15/2"));
        Ok(())
    }

    #[test]
    fn test_system_display_has_size_header() {
        let sys = system(vec![vec![1]], vec![2]);
        let rendered = sys.to_string();
        assert!(rendered.starts_with("Size: 1x1\n"));
        assert!(rendered.contains("| x1 | b |"));
    }

    #[test]
    fn test_matrix_display_aligns_columns() {
        let m = Matrix::from_integer_rows(vec![vec![1, 200], vec![30, 4]]).unwrap();
        assert_eq!(m.to_string(), "Size: 2x2\n 1 200\n30   4");
    }
}
