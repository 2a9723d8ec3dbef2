//! Residual model of the fit
//!
//! The residual stacks two terms, both with unit weight:
//! 1. data error: `C - data` flattened column-major (all x errors, then all y errors)
//! 2. smoothness error: the second difference of the control polygon along the control-point
//!    axis, `(deg - 1) x 2` flattened the same way
//!
//! The scales of the two terms are not normalized against each other.

use nalgebra::{DMatrix, DVector};

/// First difference along rows: `out[i] = m[i + 1] - m[i]`
fn diff_rows(m: &DMatrix<f64>) -> DMatrix<f64> {
    let rows = m.nrows().saturating_sub(1);
    DMatrix::from_fn(rows, m.ncols(), |i, j| m[(i + 1, j)] - m[(i, j)])
}

/// Stacked residual of curve evaluation `c` against `data`, regularized by control points `p`
///
/// `c` and `data` are `n x 2`, `p` is `(deg + 1) x 2`. The result has `2n + 2(deg - 1)` entries
/// (`2n` when `deg <= 1`).
pub fn bezier_error(
    deg: usize,
    data: &DMatrix<f64>,
    c: &DMatrix<f64>,
    p: &DMatrix<f64>,
) -> DVector<f64> {
    debug_assert_eq!(p.nrows(), deg + 1);
    let data_error = c - data;
    let second_diff = diff_rows(&diff_rows(p));

    let fd = data_error.as_slice();
    let fp = second_diff.as_slice();
    DVector::from_iterator(fd.len() + fp.len(), fd.iter().chain(fp).copied())
}
