//! This module provides convenient macros for creating points and segments.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a bezier segment of any degree from its control points
///
/// ```rust
/// use bezier_fit::segment;
///
/// let cubic = segment!([(0, 0), (1, 2), (2, 2), (3, 0)]);
/// assert_eq!(cubic.degree(), 3);
/// ```
#[macro_export]
macro_rules! segment {
    ([$($point:expr),* $(,)?]) => {{
        let points = vec![$($crate::pt!($point.0, $point.1)),*];
        assert!(points.len() >= 2, "Bezier segment requires at least 2 control points");
        $crate::data::BezierSegment::new(points)
            .expect("Bezier segment control points must be finite")
    }};
}

/// Macro for creating a vector of points
#[macro_export]
macro_rules! points {
    ([$($point:expr),* $(,)?]) => {
        vec![$($crate::pt!($point.0, $point.1)),*]
    };
}
