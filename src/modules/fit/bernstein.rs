//! Bernstein basis matrix
//!
//! Row `i` holds the `deg + 1` basis functions evaluated at `t[i]`, so for a `(deg + 1) x 2`
//! control point matrix `P` the product `B * P` evaluates the curve at every `t`.

use super::binomial::binomial;
use crate::error::{BezierError, BezierResult};
use nalgebra::{DMatrix, DVector};

/// Build the `n x (deg + 1)` Bernstein basis matrix, column `j` is `C(deg, j) t^j (1 - t)^(deg - j)`
pub fn bernstein_basis(deg: usize, t: &DVector<f64>) -> BezierResult<DMatrix<f64>> {
    if t.is_empty() {
        return Err(BezierError::EmptyInput);
    }

    let coefficients: Vec<f64> = (0..=deg).map(|j| binomial(deg, j)).collect();
    Ok(DMatrix::from_fn(t.len(), deg + 1, |i, j| {
        let ti = t[i];
        coefficients[j] * ti.powi(j as i32) * (1.0 - ti).powi((deg - j) as i32)
    }))
}
