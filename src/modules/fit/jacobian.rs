//! Forward finite-difference Jacobian of the residual model
//!
//! Parameters are the control points flattened as `w = [x_0 .. x_deg, y_0 .. y_deg]`. Column `i`
//! of the Jacobian is `(f(w + h e_i) - f(w)) / h`.
//!
//! In bounded mode the columns of the end control point coordinates, indices
//! `{0, deg, deg + 1, 2 deg + 1}`, are left at exactly zero.

use super::residual::bezier_error;
use nalgebra::{DMatrix, DVector};

/// Indices into `w` of the first and last control point coordinates
pub fn endpoint_indices(deg: usize) -> [usize; 4] {
    [0, deg, deg + 1, 2 * deg + 1]
}

/// Indices into `w` that are held fixed, empty unless `bounded`
pub fn frozen_indices(deg: usize, bounded: bool) -> Vec<usize> {
    if bounded {
        let mut indices = endpoint_indices(deg).to_vec();
        indices.dedup();
        indices
    } else {
        Vec::new()
    }
}

/// Reshape a flattened parameter vector into the `(deg + 1) x 2` control point matrix
pub fn reshape_control_points(w: &DVector<f64>, deg: usize) -> DMatrix<f64> {
    DMatrix::from_column_slice(deg + 1, 2, w.as_slice())
}

/// Flatten a `(deg + 1) x 2` control point matrix, x coordinates first
pub fn flatten_control_points(p: &DMatrix<f64>) -> DVector<f64> {
    DVector::from_column_slice(p.as_slice())
}

/// Numeric Jacobian of `bezier_error` with respect to `w`
///
/// `b` is the Bernstein basis at the data parameters, `f` the residual at `w`. The result is
/// `f.len() x 2 (deg + 1)`.
pub fn bezier_jacobian(
    deg: usize,
    data: &DMatrix<f64>,
    b: &DMatrix<f64>,
    w: &DVector<f64>,
    f: &DVector<f64>,
    bounded: bool,
    increment: f64,
) -> DMatrix<f64> {
    let num_errs = f.len();
    let num_vars = 2 * (deg + 1);
    let frozen = frozen_indices(deg, bounded);

    let mut jacobian = DMatrix::zeros(num_errs, num_vars);
    for i in 0..num_vars {
        if frozen.contains(&i) {
            continue;
        }

        let mut w_pert = w.clone();
        w_pert[i] += increment;

        let p_pert = reshape_control_points(&w_pert, deg);
        let c_pert = b * &p_pert;
        let df = bezier_error(deg, data, &c_pert, &p_pert) - f;

        jacobian.set_column(i, &(df / increment));
    }

    jacobian
}
