//! Error types for bezier fitting

use thiserror::Error;

/// Errors that can occur while fitting a bezier curve or marshaling its data.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BezierError {
    #[error("empty input: at least one point is required")]
    EmptyInput,

    #[error("too few points: {required} required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("invalid degree {0}: degree must be at least 1")]
    InvalidDegree(usize),

    #[error("invalid point matrix shape {rows}x{cols}: expected N x 2")]
    InvalidShape { rows: usize, cols: usize },

    #[error("degenerate geometry: all points coincide, total chord length is zero")]
    DegenerateGeometry,

    #[error("non-finite coordinate in input row {row}")]
    NonFiniteInput { row: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("linear solve failed: {0}")]
    LinearSolve(String),

    #[error("numerical failure: {0}")]
    NumericalFailure(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BezierResult<T> = Result<T, BezierError>;
