//! Fit configuration
//!
//! The defaults reproduce the one-shot fit: a single Gauss-Newton step with endpoint anchoring.
//! Iteration is opt-in through `max_iterations`.

use crate::constants::{
    DEFAULT_BOUNDED, DEFAULT_DEGREE, DEFAULT_FD_INCREMENT, DEFAULT_MAX_ITERATIONS,
};
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};

/// All fitting parameters in one struct, serializable for presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Bezier degree; the curve has `degree + 1` control points
    pub degree: usize,
    /// Hold the first and last control points at the first and last data points
    pub bounded: bool,
    /// Forward finite-difference step of the numeric Jacobian
    pub increment: f64,
    /// Number of Gauss-Newton steps. 1 is the single linearization.
    pub max_iterations: usize,
    /// Stop before `max_iterations` once the update norm drops below this
    pub tolerance: f64,
    /// Number of samples of the fitted curve. `None` uses the input point count.
    pub output_points: Option<usize>,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            bounded: DEFAULT_BOUNDED,
            increment: DEFAULT_FD_INCREMENT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: 0.0,
            output_points: None,
        }
    }
}

impl FitConfig {
    pub fn new(degree: usize, bounded: bool) -> Self {
        Self {
            degree,
            bounded,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, max_iterations: usize, tolerance: f64) -> Self {
        self.max_iterations = max_iterations;
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> BezierResult<()> {
        if self.degree == 0 {
            return Err(BezierError::InvalidDegree(self.degree));
        }
        if !(self.increment.is_finite() && self.increment > 0.0) {
            return Err(BezierError::InvalidConfig(format!(
                "increment must be positive and finite, got {}",
                self.increment
            )));
        }
        if self.max_iterations == 0 {
            return Err(BezierError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(BezierError::InvalidConfig(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        if self.output_points == Some(0) {
            return Err(BezierError::InvalidConfig(
                "output_points must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
