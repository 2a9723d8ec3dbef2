//! Export fitted curves to various formats
//!
//! # Available Export Formats
//!
//! - [Raw ASCII](raw_ascii/index.html) - one sampled point per line, readable by the parser
//! - [SVG path data](svg_path/index.html) - control polygons and sampled polylines as path data

pub mod raw_ascii;
pub mod svg_path;
