//! Heuristics for assigning curve parameters `t` to sample points
//!
//! * `ChordLength` (default): `t_i` is the cumulative straight-line distance travelled up to point
//!   `i`, normalized by the total path length.
//! * `Uniform`: `t_i = i / (n - 1)`, independent of the point positions. This is also the grid the
//!   fitted curve is sampled on.

use crate::constants::MIN_FIT_POINTS;
use crate::error::{BezierError, BezierResult};
use log::debug;
use nalgebra::{DMatrix, DVector};

/// Methods for estimating t values of sample points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum THeuristic {
    #[default]
    ChordLength,
    Uniform,
}

/// Estimate t values for the rows of an `n x 2` point matrix
pub fn estimate_t_values_with_heuristic(
    data: &DMatrix<f64>,
    heuristic: THeuristic,
) -> BezierResult<DVector<f64>> {
    match heuristic {
        THeuristic::ChordLength => chord_length_parameterize(data),
        THeuristic::Uniform => uniform_parameters(data.nrows()),
    }
}

/// Chord length parameterization of an ordered polyline
///
/// The first value is 0 and the last is exactly 1. Fails with `DegenerateGeometry` when every
/// point coincides, since the total length to normalize by is zero.
pub fn chord_length_parameterize(data: &DMatrix<f64>) -> BezierResult<DVector<f64>> {
    let n = data.nrows();
    if n < MIN_FIT_POINTS {
        return Err(BezierError::TooFewPoints {
            required: MIN_FIT_POINTS,
            actual: n,
        });
    }

    let mut t = DVector::<f64>::zeros(n);
    for i in 1..n {
        let dx = data[(i, 0)] - data[(i - 1, 0)];
        let dy = data[(i, 1)] - data[(i - 1, 1)];
        t[i] = t[i - 1] + dx.hypot(dy);
    }

    let total = t[n - 1];
    if !total.is_finite() {
        return Err(BezierError::NumericalFailure(
            "total chord length is not finite".to_string(),
        ));
    }
    if total <= 0.0 {
        return Err(BezierError::DegenerateGeometry);
    }
    debug!("chord length parameterization: {} points, length {}", n, total);

    t /= total;
    // pin the end exactly, the division may leave it one ulp off
    t[n - 1] = 1.0;
    Ok(t)
}

/// `n` evenly spaced values over `[0, 1]`, endpoints exact
pub fn uniform_parameters(n: usize) -> BezierResult<DVector<f64>> {
    match n {
        0 => Err(BezierError::EmptyInput),
        1 => Ok(DVector::from_element(1, 0.0)),
        _ => Ok(DVector::from_fn(n, |i, _| i as f64 / (n - 1) as f64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn matrix(points: &[(f64, f64)]) -> DMatrix<f64> {
        DMatrix::from_fn(points.len(), 2, |i, j| {
            if j == 0 {
                points[i].0
            } else {
                points[i].1
            }
        })
    }

    #[test]
    fn test_chord_length_values() {
        // chords of length 1, 3 and 4: total 8
        let data = matrix(&[(0.0, 0.0), (1.0, 0.0), (1.0, 3.0), (5.0, 3.0)]);
        let t = chord_length_parameterize(&data).unwrap();
        let expected = [0.0, 0.125, 0.5, 1.0];
        for (value, expected) in t.iter().zip(expected) {
            assert_relative_eq!(*value, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_chord_length_endpoints_and_monotonic() {
        let polylines: [&[(f64, f64)]; 3] = [
            &[(0.0, 0.0), (3.0, 4.0)],
            &[(0.1, 0.7), (0.3, 0.9), (0.3, 0.9), (1.7, -2.2), (9.0, 1.0)],
            &[(-5.0, 2.0), (-4.9, 2.1), (100.0, 300.0), (100.0, 301.0), (0.0, 0.0)],
        ];
        for points in polylines {
            let t = chord_length_parameterize(&matrix(points)).unwrap();
            assert_eq!(t.len(), points.len());
            assert_eq!(t[0], 0.0);
            assert_eq!(t[t.len() - 1], 1.0);
            assert!(t.as_slice().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_chord_length_degenerate() {
        let data = matrix(&[(2.0, 2.0), (2.0, 2.0), (2.0, 2.0)]);
        assert!(matches!(
            chord_length_parameterize(&data),
            Err(BezierError::DegenerateGeometry)
        ));
    }

    #[test]
    fn test_chord_length_too_few_points() {
        let data = matrix(&[(2.0, 2.0)]);
        assert!(matches!(
            chord_length_parameterize(&data),
            Err(BezierError::TooFewPoints {
                required: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_uniform_parameters() {
        let t = uniform_parameters(5).unwrap();
        assert_eq!(t.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(uniform_parameters(1).unwrap().as_slice(), &[0.0]);
        assert!(matches!(uniform_parameters(0), Err(BezierError::EmptyInput)));
    }

    #[test]
    fn test_heuristic_dispatch() {
        let data = matrix(&[(0.0, 0.0), (1.0, 0.0), (1.0, 3.0)]);
        let chord = estimate_t_values_with_heuristic(&data, THeuristic::default()).unwrap();
        let uniform = estimate_t_values_with_heuristic(&data, THeuristic::Uniform).unwrap();
        assert_relative_eq!(chord[1], 0.25, epsilon = 1e-12);
        assert_relative_eq!(uniform[1], 0.5, epsilon = 1e-12);
    }
}
