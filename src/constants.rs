//! Default values shared by the fitting routines and the binaries.

/// Default Bézier degree used by the command-line tool.
pub const DEFAULT_DEGREE: usize = 5;

/// Endpoints are anchored unless asked otherwise.
pub const DEFAULT_BOUNDED: bool = true;

/// Forward finite-difference step for the numeric Jacobian.
pub const DEFAULT_FD_INCREMENT: f64 = 1e-5;

/// Initial value of every coordinate of the interior control points.
pub const INTERIOR_CONTROL_PLACEHOLDER: f64 = 1.0;

/// Chord-length parameterization needs at least one chord.
pub const MIN_FIT_POINTS: usize = 2;

/// One linearization, no refinement.
pub const DEFAULT_MAX_ITERATIONS: usize = 1;
