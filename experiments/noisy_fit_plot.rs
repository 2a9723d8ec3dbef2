// Sample a known quintic, perturb the samples with gaussian noise and fit it bounded and unbounded.
// The data and both fits are drawn to an SVG so the effect of endpoint anchoring is visible.

use bezier_fit::data::{matrix_to_points, Point};
use bezier_fit::{fit_points, segment, FitConfig};
use log::info;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

const OUTPUT_PATH: &str = "noisy_fit_plot.svg";
const NUM_SAMPLES: usize = 60;
const NOISE_SIGMA: f64 = 4.0;
const SEED: u64 = 7;

fn bounds(points: &[Point]) -> (f64, f64, f64, f64) {
    points.iter().fold(
        (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
        |(x0, x1, y0, y1), p| (x0.min(p.x), x1.max(p.x), y0.min(p.y), y1.max(p.y)),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let original = segment!([
        (0.0, 0.0),
        (40.0, 120.0),
        (90.0, -60.0),
        (140.0, 150.0),
        (200.0, -20.0),
        (250.0, 60.0)
    ]);

    let mut rng = StdRng::seed_from_u64(SEED);
    let noise = Normal::new(0.0, NOISE_SIGMA)?;
    let samples: Vec<Point> = original
        .sample_points(NUM_SAMPLES)
        .into_iter()
        .map(|p| Point::new(p.x + noise.sample(&mut rng), p.y + noise.sample(&mut rng)))
        .collect();

    let bounded = fit_points(&samples, &FitConfig::new(5, true))?;
    let unbounded = fit_points(&samples, &FitConfig::new(5, false))?;
    info!(
        "residual norm: bounded {:.4}, unbounded {:.4}",
        bounded.residual_norm, unbounded.residual_norm
    );

    let bounded_curve = matrix_to_points(&bounded.curve);
    let unbounded_curve = matrix_to_points(&unbounded.curve);

    let (x0, x1, y0, y1) = bounds(&samples);
    let pad = 20.0;

    let root = SVGBackend::new(OUTPUT_PATH, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Degree 5 fit of noisy samples", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d((x0 - pad)..(x1 + pad), (y0 - pad)..(y1 + pad))?;
    chart.configure_mesh().draw()?;

    chart
        .draw_series(
            samples
                .iter()
                .map(|p| Circle::new((p.x, p.y), 3, BLACK.filled())),
        )?
        .label("samples")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLACK.filled()));

    chart
        .draw_series(LineSeries::new(
            bounded_curve.iter().map(|p| (p.x, p.y)),
            &RED,
        ))?
        .label("bounded")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(
            unbounded_curve.iter().map(|p| (p.x, p.y)),
            &BLUE,
        ))?
        .label("unbounded")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("wrote {}", OUTPUT_PATH);
    Ok(())
}
