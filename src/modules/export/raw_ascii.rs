//! Write point matrices as whitespace delimited text

use nalgebra::DMatrix;

/// One row per line, columns separated by a space, shortest round-trip float formatting
pub fn to_raw_ascii(m: &DMatrix<f64>) -> String {
    let mut out = String::new();
    for row in m.row_iter() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
