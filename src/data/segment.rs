//! Bezier segment: a single bezier curve of arbitrary degree
//!
//! A segment of degree `n` owns `n + 1` control points. The first and last control points are the
//! curve's endpoints; the interior ones shape it.

use crate::data::point::{matrix_to_points, points_to_matrix, Point};
use crate::error::{BezierError, BezierResult};
use nalgebra::DMatrix;

/// A bezier segment defined by its control polygon
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSegment {
    points: Vec<Point>,
}

impl BezierSegment {
    /// Create a segment from its control points, at least 2 (a line) are required
    pub fn new(points: Vec<Point>) -> BezierResult<Self> {
        if points.len() < 2 {
            return Err(BezierError::TooFewPoints {
                required: 2,
                actual: points.len(),
            });
        }
        if let Some(row) = points.iter().position(|p| !p.is_finite()) {
            return Err(BezierError::NonFiniteInput { row });
        }
        Ok(Self { points })
    }

    /// Build a segment from a `(deg + 1) x 2` control point matrix
    pub fn from_control_matrix(p: &DMatrix<f64>) -> BezierResult<Self> {
        if p.ncols() != 2 {
            return Err(BezierError::InvalidShape {
                rows: p.nrows(),
                cols: p.ncols(),
            });
        }
        Self::new(matrix_to_points(p))
    }

    /// The control points as a `(deg + 1) x 2` matrix
    pub fn control_matrix(&self) -> DMatrix<f64> {
        points_to_matrix(&self.points)
    }

    /// Polynomial degree of the segment
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Get all control points for this segment
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Get a point on the bezier curve at parameter t (0 <= t <= 1)
    ///
    /// Evaluated with de Casteljau's algorithm.
    pub fn point_at(&self, t: f64) -> Point {
        let mut work = self.points.clone();
        for level in 1..work.len() {
            for i in 0..work.len() - level {
                work[i] = work[i].lerp(&work[i + 1], t);
            }
        }
        work[0]
    }

    /// Generate a series of points along the bezier curve at uniformly spaced t
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => Vec::new(),
            1 => vec![self.start()],
            _ => (0..num_points)
                .map(|i| {
                    let t = i as f64 / (num_points - 1) as f64;
                    self.point_at(t)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic_bezier_endpoint() {
        let segment = segment!([(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0)]);

        // At t=0, should be at first control point
        assert_eq!(segment.point_at(0.0), Point::new(0.0, 0.0));

        // At t=1, should be at last control point
        assert_eq!(segment.point_at(1.0), Point::new(3.0, 0.0));
    }

    #[test]
    fn test_segment_sampling() {
        let segment = segment!([(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)]);

        let samples = segment.sample_points(5);
        assert_eq!(samples.len(), 5);

        // B(0.25) = 0.5625*P0 + 0.375*P1 + 0.0625*P2 = (25, 37.5)
        let expected = [
            (0.0, 0.0),
            (25.0, 37.5),
            (50.0, 50.0),
            (75.0, 37.5),
            (100.0, 0.0),
        ];
        for (sample, (x, y)) in samples.iter().zip(expected) {
            assert_relative_eq!(sample.x, x, epsilon = 1e-12);
            assert_relative_eq!(sample.y, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_quintic_degree_and_midpoint() {
        // symmetric control polygon, the midpoint lies on the axis of symmetry
        let segment = segment!([(0, 0), (1, 3), (2, -1), (3, -1), (4, 3), (5, 0)]);
        assert_eq!(segment.degree(), 5);
        assert_relative_eq!(segment.point_at(0.5).x, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_control_matrix_round_trip() {
        let segment = segment!([(1, 2), (3, 4), (5, 6)]);
        let m = segment.control_matrix();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[(2, 1)], 6.0);
        assert_eq!(BezierSegment::from_control_matrix(&m).unwrap(), segment);
    }

    #[test]
    fn test_rejects_single_point() {
        let err = BezierSegment::new(vec![Point::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            BezierError::TooFewPoints {
                required: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_rejects_nan_control_point() {
        let err = BezierSegment::new(vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)])
            .unwrap_err();
        assert!(matches!(err, BezierError::NonFiniteInput { row: 1 }));
    }
}
