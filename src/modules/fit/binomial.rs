//! Binomial coefficients for the Bernstein basis

/// Binomial coefficient `C(n, k)` as a float
///
/// Uses the symmetry `C(n, k) = C(n, n - k)` to run the fewest steps, then accumulates
/// `n (n - 1) ... (n - k + 1) / k!` with one multiply and one divide per step so the running
/// value stays an exact integer and never holds a full factorial. Returns 0 when `k > n`.
///
/// Very large `n` overflows to infinity; no attempt is made to correct that.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    if k == 0 {
        return 1.0;
    }

    let n = n as f64;
    let mut result = n;
    for i in 2..=k {
        let i = i as f64;
        result *= n - i + 1.0;
        result /= i;
    }
    result
}
