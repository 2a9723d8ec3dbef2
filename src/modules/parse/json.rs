//! JSON point lists
//!
//! The format is an array of objects with `x` and `y` fields:
//! `[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}]`

use crate::data::{points_to_matrix, Point};
use crate::error::BezierResult;
use nalgebra::DMatrix;

/// Parse a JSON point list into points
pub fn parse_json(input: &str) -> BezierResult<Vec<Point>> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a JSON point list into an `n x 2` matrix
pub fn parse_points_json(input: &str) -> BezierResult<DMatrix<f64>> {
    Ok(points_to_matrix(&parse_json(input)?))
}
