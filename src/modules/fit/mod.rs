//! Fitting a single bezier curve to an ordered sequence of points
//!
//! - [`binomial`]: binomial coefficients
//! - [`t_heuristic`]: parameter estimation for the sample points
//! - [`bernstein`]: the Bernstein basis matrix
//! - [`residual`]: data plus smoothness residual
//! - [`jacobian`]: finite-difference Jacobian of the residual
//! - [`gauss_newton_fit`]: the fitting pipeline

pub mod bernstein;
pub mod binomial;
pub mod config;
pub mod gauss_newton_fit;
pub mod jacobian;
pub mod residual;
pub mod t_heuristic;

pub use config::FitConfig;
pub use gauss_newton_fit::{bezier_fit, bezier_fit_with_config, fit_points, BezierFit};
