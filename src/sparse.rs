//! Sparse matrix utilities.
//!
//! The builder assembles dense matrices; the Clarabel backend wants a single
//! stacked CSC matrix. These helpers bridge the two.

use clarabel::algebra::CscMatrix as ClarabelCsc;
use nalgebra::DMatrix;
use nalgebra_sparse::{CooMatrix, CscMatrix};

/// Create a CSC matrix from `(row, col, value)` triplets.
///
/// Duplicates are summed together; out-of-range entries are dropped.
pub fn csc_from_triplets(
    nrows: usize,
    ncols: usize,
    triplets: impl IntoIterator<Item = (usize, usize, f64)>,
) -> CscMatrix<f64> {
    let mut coo = CooMatrix::new(nrows, ncols);
    for (row, col, val) in triplets {
        if row < nrows && col < ncols {
            coo.push(row, col, val);
        }
    }
    CscMatrix::from(&coo)
}

/// Convert a dense matrix to CSC format. Only exact zeros are dropped.
pub fn dense_to_csc(dense: &DMatrix<f64>) -> CscMatrix<f64> {
    let triplets = (0..dense.ncols()).flat_map(|j| {
        (0..dense.nrows()).filter_map(move |i| {
            let v = dense[(i, j)];
            (v != 0.0).then_some((i, j, v))
        })
    });
    csc_from_triplets(dense.nrows(), dense.ncols(), triplets)
}

/// Stack CSC matrices vertically. All blocks must have `ncols` columns.
pub fn csc_vstack(ncols: usize, blocks: &[&CscMatrix<f64>]) -> CscMatrix<f64> {
    let nrows = blocks.iter().map(|b| b.nrows()).sum();
    let mut offset = 0;
    let mut triplets = Vec::new();
    for block in blocks {
        triplets.extend(block.triplet_iter().map(|(r, c, v)| (r + offset, c, *v)));
        offset += block.nrows();
    }
    csc_from_triplets(nrows, ncols, triplets)
}

/// Convert nalgebra CSC to Clarabel CSC.
pub fn to_clarabel_csc(m: &CscMatrix<f64>) -> ClarabelCsc<f64> {
    ClarabelCsc::new(
        m.nrows(),
        m.ncols(),
        m.col_offsets().to_vec(),
        m.row_indices().to_vec(),
        m.values().to_vec(),
    )
}
