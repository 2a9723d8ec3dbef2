//! A 2-D point.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Linear interpolation towards `other`, `t = 0` gives `self`
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Stack points into an `n x 2` matrix, one point per row
pub fn points_to_matrix(points: &[Point]) -> DMatrix<f64> {
    DMatrix::from_fn(points.len(), 2, |i, j| match j {
        0 => points[i].x,
        _ => points[i].y,
    })
}

/// Read the rows of an `n x 2` matrix back as points
pub fn matrix_to_points(m: &DMatrix<f64>) -> Vec<Point> {
    m.row_iter().map(|row| Point::new(row[0], row[1])).collect()
}
