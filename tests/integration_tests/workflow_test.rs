use bezier_fit::data::{matrix_to_points, points_to_matrix};
use bezier_fit::modules::export::raw_ascii::to_raw_ascii;
use bezier_fit::modules::export::svg_path::ToSvgPath;
use bezier_fit::modules::parse::raw_ascii::parse_points;
use bezier_fit::{bezier_fit, bezier_fit_with_config, segment, BezierError, FitConfig, Point};

#[test]
fn test_complete_workflow() {
    // Sample a cubic, write the samples as text, then read them back for the fit
    let original = segment!([
        (50.0, 200.0),  // Start point
        (100.0, 50.0),  // Control point 1
        (200.0, 50.0),  // Control point 2
        (250.0, 200.0)  // End point
    ]);
    let text = to_raw_ascii(&points_to_matrix(&original.sample_points(30)));
    let data = parse_points(&text).unwrap();

    let fit = bezier_fit_with_config(&data, &FitConfig::new(3, true)).unwrap();
    assert_eq!(fit.curve.shape(), (30, 2));
    assert_eq!(fit.segment.start(), original.start());
    assert_eq!(fit.segment.end(), original.end());

    // The smoothness term pulls the interior control points inward, symmetric about x = 150
    let expected = [
        Point::new(50.0, 200.0),
        Point::new(113.39, 83.85),
        Point::new(186.61, 83.85),
        Point::new(250.0, 200.0),
    ];
    for (fitted, expected) in fit.segment.points().iter().zip(&expected) {
        assert!(
            fitted.distance(expected) < 0.01,
            "{:?} != {:?}",
            fitted,
            expected
        );
    }

    // and the sampled fit stays within a bounded distance of the data
    let max_deviation = matrix_to_points(&fit.curve)
        .iter()
        .zip(matrix_to_points(&data).iter())
        .map(|(a, b)| a.distance(b))
        .fold(0.0, f64::max);
    assert!(max_deviation < 30.0, "max deviation {}", max_deviation);

    let path = fit.segment.to_svg_path();
    assert!(path.starts_with("M50,200 C"));
    assert!(path.ends_with(",250,200"));
}

#[test]
fn test_square_bounded_versus_unbounded() {
    let data = parse_points("0 0\n0 1\n1 1\n1 0\n").unwrap();

    let bounded = bezier_fit(&data, 3, true).unwrap();
    assert!((bounded[(0, 0)] - 0.0).abs() < 1e-12);
    assert!((bounded[(0, 1)] - 0.0).abs() < 1e-12);
    assert!((bounded[(3, 0)] - 1.0).abs() < 1e-12);
    assert!((bounded[(3, 1)] - 0.0).abs() < 1e-12);

    let unbounded = bezier_fit(&data, 3, false).unwrap();
    assert_eq!(unbounded.shape(), (4, 2));
    assert!(unbounded.iter().all(|v| v.is_finite()));
}

#[test]
fn test_coincident_points_fail() {
    let data = parse_points("3 3\n3 3\n").unwrap();
    assert!(matches!(
        bezier_fit(&data, 1, true),
        Err(BezierError::DegenerateGeometry)
    ));
}
