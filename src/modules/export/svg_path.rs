//! SVG path data for fitted curves
//!
//! Segments up to degree 3 map directly onto SVG commands (`L`, `Q`, `C`). SVG has no higher
//! degree command, so those segments are emitted as a sampled polyline.
//!
//! # Example
//!
//! ```rust
//! use bezier_fit::{segment, modules::export::svg_path::ToSvgPath};
//!
//! let cubic = segment!([(50.0, 200.0), (100.0, 50.0), (200.0, 50.0), (250.0, 200.0)]);
//! assert_eq!(cubic.to_svg_path(), "M50,200 C100,50,200,50,250,200");
//! ```

use crate::data::{BezierSegment, Point};

/// Samples used for segments above degree 3
pub const POLYLINE_SAMPLES: usize = 64;

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> String;
}

fn coords(p: &Point) -> String {
    format!("{},{}", p.x, p.y)
}

impl ToSvgPath for [Point] {
    fn to_svg_path(&self) -> String {
        let mut parts = Vec::with_capacity(self.len());
        for (i, p) in self.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            parts.push(format!("{}{}", command, coords(p)));
        }
        parts.join(" ")
    }
}

impl ToSvgPath for BezierSegment {
    fn to_svg_path(&self) -> String {
        let points = self.points();
        let tail: Vec<String> = points[1..].iter().map(coords).collect();
        match self.degree() {
            1 => format!("M{} L{}", coords(&points[0]), tail.join(",")),
            2 => format!("M{} Q{}", coords(&points[0]), tail.join(",")),
            3 => format!("M{} C{}", coords(&points[0]), tail.join(",")),
            _ => self.sample_points(POLYLINE_SAMPLES).to_svg_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{points, segment};

    #[test]
    fn test_segment_export_to_svg_path() {
        struct SvgPathExportTestCase<'a> {
            name: &'a str,
            segment: BezierSegment,
            expected_path: &'a str,
        }

        let test_cases = [
            SvgPathExportTestCase {
                name: "line",
                segment: segment!([(10, 20), (40, 50)]),
                expected_path: "M10,20 L40,50",
            },
            SvgPathExportTestCase {
                name: "quadratic_segment",
                segment: segment!([(10, 20), (40, 50), (70, 80)]),
                expected_path: "M10,20 Q40,50,70,80",
            },
            SvgPathExportTestCase {
                name: "cubic_segment",
                segment: segment!([(10, 20), (20, 30), (30, 40), (40, 50)]),
                expected_path: "M10,20 C20,30,30,40,40,50",
            },
        ];

        for test_case in test_cases {
            assert_eq!(
                test_case.segment.to_svg_path(),
                test_case.expected_path,
                "Test case: {}",
                test_case.name
            );
        }
    }

    #[test]
    fn test_high_degree_segment_is_polyline() {
        let quintic = segment!([(0, 0), (1, 3), (2, -1), (3, -1), (4, 3), (5, 0)]);
        let path = quintic.to_svg_path();
        assert!(path.starts_with("M0,0 L"));
        assert!(path.ends_with(" L5,0"));
        assert_eq!(path.matches('L').count(), POLYLINE_SAMPLES - 1);
    }

    #[test]
    fn test_points_export() {
        let pts = points!([(0, 0), (1.5, 2), (3, -1)]);
        assert_eq!(pts.to_svg_path(), "M0,0 L1.5,2 L3,-1");
        assert_eq!(Vec::<Point>::new().to_svg_path(), "");
    }
}
