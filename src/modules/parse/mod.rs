//! Parsing point sequences for fitting
//!
//! Now supported format:
//! - Raw ASCII:
//!     one point per line, two numbers separated by whitespace or a comma. Blank lines and lines
//!     starting with `#` are skipped.
//! - JSON:
//!     in the form of `[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}]`. Extra fields are ignored.

pub mod json;
pub mod raw_ascii;

use crate::error::BezierResult;
use nalgebra::DMatrix;

/// Input formats understood by the parsers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointFormat {
    #[default]
    RawAscii,
    Json,
}

/// Parse an `n x 2` point matrix in the given format
pub fn parse_points_as(input: &str, format: PointFormat) -> BezierResult<DMatrix<f64>> {
    match format {
        PointFormat::RawAscii => raw_ascii::parse_points(input),
        PointFormat::Json => json::parse_points_json(input),
    }
}
