// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure and fitting entry points at crate level
pub use data::point::Point;
pub use data::segment::BezierSegment;
pub use error::{BezierError, BezierResult};
pub use modules::fit::{bezier_fit, bezier_fit_with_config, fit_points, BezierFit, FitConfig};
