use std::{error::Error, fs, path::Path};

use bezier_fit::modules::export::raw_ascii::to_raw_ascii;
use bezier_fit::modules::parse::{parse_points_as, PointFormat};
use bezier_fit::{bezier_fit_with_config, FitConfig};
use clap::{Parser, ValueEnum};
use log::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    Raw,
    Json,
}

impl From<InputFormat> for PointFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Raw => PointFormat::RawAscii,
            InputFormat::Json => PointFormat::Json,
        }
    }
}

/// Fit a single bezier curve to an ordered point list and print the sampled curve.
#[derive(Debug, Parser)]
#[command(author, version, about = "Least squares bezier curve fit")]
struct Args {
    /// Path to the input points, one `x y` pair per line (or JSON with --format json).
    #[arg(long)]
    input: String,

    /// Where to write the sampled curve. Printed to stdout if omitted.
    #[arg(long)]
    output: Option<String>,

    /// Optional path to a JSON FitConfig. Command-line flags override it.
    #[arg(long)]
    config: Option<String>,

    /// Bezier degree.
    #[arg(long)]
    degree: Option<usize>,

    /// Let the end control points move instead of pinning them to the data endpoints.
    #[arg(long)]
    unbounded: bool,

    /// Number of Gauss-Newton steps.
    #[arg(long)]
    iterations: Option<usize>,

    /// Stop iterating once the update norm drops below this.
    #[arg(long)]
    tolerance: Option<f64>,

    #[arg(long, value_enum, default_value_t = InputFormat::Raw)]
    format: InputFormat,
}

fn load_config(args: &Args) -> Result<FitConfig, Box<dyn Error>> {
    let mut config: FitConfig = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => FitConfig::default(),
    };
    if let Some(degree) = args.degree {
        config.degree = degree;
    }
    if args.unbounded {
        config.bounded = false;
    }
    if let Some(iterations) = args.iterations {
        config.max_iterations = iterations;
    }
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    Ok(config)
}

fn fit_file(
    input_path: &Path,
    format: PointFormat,
    config: &FitConfig,
) -> Result<String, Box<dyn Error>> {
    let data = parse_points_as(&fs::read_to_string(input_path)?, format)?;
    info!(
        "fitting degree {} bezier to {} points from {}",
        config.degree,
        data.nrows(),
        input_path.display()
    );
    let fit = bezier_fit_with_config(&data, config)?;
    info!(
        "fit done after {} step(s), residual norm {}",
        fit.iterations, fit.residual_norm
    );
    Ok(to_raw_ascii(&fit.curve))
}

fn main() {
    env_logger::init();
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = load_config(&args)?;
    let text = fit_file(Path::new(&args.input), args.format.into(), &config)?;
    match &args.output {
        Some(path) => fs::write(path, text)?,
        None => print!("{}", text),
    }
    Ok(())
}
