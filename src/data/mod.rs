//! Core data structures: points and single bezier segments of any degree.

pub mod macros;
pub mod point;
pub mod segment;

pub use point::{matrix_to_points, points_to_matrix, Point};
pub use segment::BezierSegment;
