//! Row-growing linear systems.

use nalgebra::DMatrix;

use crate::canon::LinearRow;
use crate::error::{LpError, Result};

/// A system `M x (<= | ==) rhs` whose column count is fixed at construction
/// and whose rows are appended one at a time.
///
/// Rows live in a row-major buffer that grows by amortized doubling; the
/// number of rows always equals the number of right-hand-side entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSystem {
    ncols: usize,
    coeffs: Vec<f64>,
    rhs: Vec<f64>,
}

impl ConstraintSystem {
    /// Create an empty system with `ncols` columns.
    pub fn new(ncols: usize) -> Self {
        Self {
            ncols,
            coeffs: Vec::new(),
            rhs: Vec::new(),
        }
    }

    /// Create an empty system with room for `rows` rows.
    pub fn with_capacity(ncols: usize, rows: usize) -> Self {
        Self {
            ncols,
            coeffs: Vec::with_capacity(ncols * rows),
            rhs: Vec::with_capacity(rows),
        }
    }

    pub fn nrows(&self) -> usize {
        self.rhs.len()
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Append a row. Fails without modifying the system if the row length
    /// differs from the column count.
    pub fn push(&mut self, row: LinearRow) -> Result<()> {
        if row.coeffs.len() != self.ncols {
            return Err(LpError::DimensionMismatch {
                expected: self.ncols,
                got: row.coeffs.len(),
            });
        }
        self.coeffs.extend_from_slice(&row.coeffs);
        self.rhs.push(row.bound);
        Ok(())
    }

    /// Coefficients of row `i`.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.nrows() {
            return None;
        }
        Some(&self.coeffs[i * self.ncols..(i + 1) * self.ncols])
    }

    /// Iterate over the rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.nrows()).filter_map(move |i| self.row(i))
    }

    /// Right-hand side, parallel to the rows.
    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    /// Dense copy of the coefficient matrix.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_slice(self.nrows(), self.ncols, &self.coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(coeffs: &[f64], bound: f64) -> LinearRow {
        LinearRow {
            coeffs: coeffs.to_vec(),
            bound,
        }
    }

    #[test]
    fn test_push_grows_rows() {
        let mut sys = ConstraintSystem::new(2);
        assert!(sys.is_empty());
        sys.push(row(&[1.0, 2.0], 3.0)).unwrap();
        sys.push(row(&[4.0, 5.0], 6.0)).unwrap();
        assert_eq!(sys.nrows(), 2);
        assert_eq!(sys.ncols(), 2);
        assert_eq!(sys.row(1), Some(&[4.0, 5.0][..]));
        assert_eq!(sys.row(2), None);
        assert_eq!(sys.rhs(), &[3.0, 6.0]);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let mut sys = ConstraintSystem::with_capacity(2, 4);
        sys.push(row(&[1.0, 2.0], 0.0)).unwrap();
        let err = sys.push(row(&[1.0], 0.0)).unwrap_err();
        assert!(matches!(err, LpError::DimensionMismatch { expected: 2, got: 1 }));
        assert_eq!(sys.nrows(), 1);
    }

    #[test]
    fn test_to_matrix_is_row_major() {
        let mut sys = ConstraintSystem::new(3);
        sys.push(row(&[1.0, 2.0, 3.0], 0.0)).unwrap();
        sys.push(row(&[4.0, 5.0, 6.0], 0.0)).unwrap();
        let m = sys.to_matrix();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
    }

    #[test]
    fn test_zero_columns() {
        let mut sys = ConstraintSystem::new(0);
        sys.push(row(&[], 1.0)).unwrap();
        assert_eq!(sys.nrows(), 1);
        assert_eq!(sys.rows().count(), 1);
        assert_eq!(sys.to_matrix().shape(), (1, 0));
    }
}
