//! Fit a single bezier curve of any degree with a Gauss-Newton least squares step
//!
//! The objective combines data fidelity with smoothness of the control polygon (see
//! [`residual`](super::residual)). The pipeline goes like this:
//! 1. Initialize control points: the first and last are the first and last data points, every
//!    interior coordinate starts at a fixed placeholder of 1
//! 2. Estimate t values using chord length parameterization
//! 3. Build the Bernstein basis at those t values
//! 4. Evaluate the residual and its forward finite-difference Jacobian
//! 5. Update the flattened control points with `w -= pinv(J) f`
//! 6. Sample the fitted curve at uniformly spaced t
//!
//! By default step 4-5 runs exactly once. Since the residual is linear in the control points one
//! step already lands on the least squares minimum up to finite-difference error; further steps
//! are available through [`FitConfig::max_iterations`].
//!
//! In bounded mode the end control point coordinates are excluded from the solve: only the free
//! columns of the Jacobian are pseudo-inverted and only the free entries of `w` are updated, so
//! the fitted curve starts and ends exactly at the data endpoints.
//!
//! # Example
//!
//! ```rust
//! use bezier_fit::modules::fit::gauss_newton_fit::bezier_fit;
//! use nalgebra::DMatrix;
//!
//! let data = DMatrix::from_row_slice(4, 2, &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
//! let curve = bezier_fit(&data, 3, true).unwrap();
//!
//! assert_eq!(curve.shape(), (4, 2));
//! assert!((curve[(3, 0)] - 1.0).abs() < 1e-12);
//! ```

use super::bernstein::bernstein_basis;
use super::config::FitConfig;
use super::jacobian::{
    bezier_jacobian, flatten_control_points, frozen_indices, reshape_control_points,
};
use super::residual::bezier_error;
use super::t_heuristic::{estimate_t_values_with_heuristic, uniform_parameters, THeuristic};
use crate::constants::{INTERIOR_CONTROL_PLACEHOLDER, MIN_FIT_POINTS};
use crate::data::{points_to_matrix, BezierSegment, Point};
use crate::error::{BezierError, BezierResult};
use log::{debug, warn};
use nalgebra::{DMatrix, DVector};

/// Result of a fit
#[derive(Debug, Clone)]
pub struct BezierFit {
    /// The fitted control polygon
    pub segment: BezierSegment,
    /// The fitted curve sampled at uniformly spaced t, one point per row
    pub curve: DMatrix<f64>,
    /// Norm of the residual at the fitted control points
    pub residual_norm: f64,
    /// Number of Gauss-Newton steps taken
    pub iterations: usize,
}

/// Fit a bezier curve of degree `deg` to the rows of an `n x 2` matrix and return the fitted curve
/// sampled at `n` uniformly spaced parameter values
pub fn bezier_fit(data: &DMatrix<f64>, deg: usize, bounded: bool) -> BezierResult<DMatrix<f64>> {
    let config = FitConfig::new(deg, bounded);
    Ok(bezier_fit_with_config(data, &config)?.curve)
}

/// Fit a bezier curve to a slice of points
pub fn fit_points(points: &[Point], config: &FitConfig) -> BezierResult<BezierFit> {
    bezier_fit_with_config(&points_to_matrix(points), config)
}

/// Fit a bezier curve to the rows of an `n x 2` matrix with full control over the parameters
pub fn bezier_fit_with_config(data: &DMatrix<f64>, config: &FitConfig) -> BezierResult<BezierFit> {
    config.validate()?;
    validate_data(data)?;

    let deg = config.degree;
    let num_points = data.nrows();
    if num_points < deg + 1 {
        warn!(
            "{} points for a degree {} fit: the system is underdetermined, using the minimum norm solution",
            num_points, deg
        );
    }

    let t = estimate_t_values_with_heuristic(data, THeuristic::ChordLength)?;
    let b = bernstein_basis(deg, &t)?;

    let mut w = flatten_control_points(&initial_control_points(data, deg));
    let frozen = frozen_indices(deg, config.bounded);
    let free: Vec<usize> = (0..w.len()).filter(|i| !frozen.contains(i)).collect();

    let mut iterations = 0;
    for _ in 0..config.max_iterations {
        let p = reshape_control_points(&w, deg);
        let c = &b * &p;
        let f = bezier_error(deg, data, &c, &p);
        let jacobian = bezier_jacobian(deg, data, &b, &w, &f, config.bounded, config.increment);
        debug!(
            "step {}: residual norm {}, jacobian {}x{}, {} free parameters",
            iterations + 1,
            f.norm(),
            jacobian.nrows(),
            jacobian.ncols(),
            free.len()
        );

        let step = solve_free_step(&jacobian, &f, &free)?;
        for (k, &i) in free.iter().enumerate() {
            w[i] -= step[k];
        }
        iterations += 1;

        let step_norm = step.norm();
        debug!("step {}: update norm {}", iterations, step_norm);
        if step_norm < config.tolerance {
            break;
        }
    }

    let p = reshape_control_points(&w, deg);
    if p.iter().any(|v| !v.is_finite()) {
        return Err(BezierError::NumericalFailure(
            "fitted control points are not finite".to_string(),
        ));
    }
    let residual_norm = bezier_error(deg, data, &(&b * &p), &p).norm();

    let t_final = uniform_parameters(config.output_points.unwrap_or(num_points))?;
    let b_final = bernstein_basis(deg, &t_final)?;
    let curve = b_final * &p;
    if curve.iter().any(|v| !v.is_finite()) {
        return Err(BezierError::NumericalFailure(
            "fitted curve samples are not finite".to_string(),
        ));
    }

    Ok(BezierFit {
        segment: BezierSegment::from_control_matrix(&p)?,
        curve,
        residual_norm,
        iterations,
    })
}

fn validate_data(data: &DMatrix<f64>) -> BezierResult<()> {
    if data.nrows() == 0 {
        return Err(BezierError::EmptyInput);
    }
    if data.ncols() != 2 {
        return Err(BezierError::InvalidShape {
            rows: data.nrows(),
            cols: data.ncols(),
        });
    }
    if data.nrows() < MIN_FIT_POINTS {
        return Err(BezierError::TooFewPoints {
            required: MIN_FIT_POINTS,
            actual: data.nrows(),
        });
    }
    if let Some((row, _)) = data
        .row_iter()
        .enumerate()
        .find(|(_, r)| r.iter().any(|v| !v.is_finite()))
    {
        return Err(BezierError::NonFiniteInput { row });
    }
    Ok(())
}

/// Control points pinned to the data endpoints, interior at the placeholder value
fn initial_control_points(data: &DMatrix<f64>, deg: usize) -> DMatrix<f64> {
    let mut p = DMatrix::from_element(deg + 1, 2, INTERIOR_CONTROL_PLACEHOLDER);
    p.set_row(0, &data.row(0));
    p.set_row(deg, &data.row(data.nrows() - 1));
    p
}

/// Minimum norm least squares step `pinv(J_free) f` over the free parameters
fn solve_free_step(
    jacobian: &DMatrix<f64>,
    f: &DVector<f64>,
    free: &[usize],
) -> BezierResult<DVector<f64>> {
    if free.is_empty() {
        return Ok(DVector::zeros(0));
    }
    if jacobian.iter().chain(f.iter()).any(|v| !v.is_finite()) {
        return Err(BezierError::NumericalFailure(
            "jacobian or residual is not finite".to_string(),
        ));
    }

    let j_free = jacobian.select_columns(free.iter());
    Ok(pseudo_inverse(j_free)? * f)
}

/// Moore-Penrose pseudo-inverse through the SVD
///
/// Singular values below `max(rows, cols) * sigma_max * eps` are treated as zero.
pub fn pseudo_inverse(m: DMatrix<f64>) -> BezierResult<DMatrix<f64>> {
    let (rows, cols) = m.shape();
    let svd = m.svd(true, true);
    let tolerance = rows.max(cols) as f64 * svd.singular_values.max() * f64::EPSILON;
    svd.pseudo_inverse(tolerance)
        .map_err(|e| BezierError::LinearSolve(e.to_string()))
}
