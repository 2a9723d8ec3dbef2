//! Whitespace delimited numeric text, one point per row

use crate::error::{BezierError, BezierResult};
use nalgebra::DMatrix;

/// Parse rows of `x y` (or `x,y`) into an `n x 2` matrix
pub fn parse_points(input: &str) -> BezierResult<DMatrix<f64>> {
    let mut values = Vec::new();

    for (line_no, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let row = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map_err(|e| {
                    BezierError::Parse(format!("line {}: '{}': {}", line_no + 1, token, e))
                })
            })
            .collect::<BezierResult<Vec<f64>>>()?;

        if row.len() != 2 {
            return Err(BezierError::Parse(format!(
                "line {}: expected 2 columns, found {}",
                line_no + 1,
                row.len()
            )));
        }
        values.extend(row);
    }

    Ok(DMatrix::from_row_slice(values.len() / 2, 2, &values))
}
