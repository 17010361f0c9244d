use bk_core::{HalfKernel, Radius};
use tracing::debug;

/// Row `n` of Pascal's triangle, built by repeated row expansion.
///
/// Each step reads the previous row and writes a separate buffer; the two are
/// swapped afterwards. Entries are exact up to `n = 56`, beyond which the
/// largest coefficients exceed `2^53` and carry `f64` rounding.
pub fn pascal_row(n: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(n + 1);
    let mut next = Vec::with_capacity(n + 1);
    row.push(1.0f64);

    for _ in 0..n {
        next.clear();
        next.push(1.0);
        next.extend(row.windows(2).map(|pair| pair[0] + pair[1]));
        next.push(1.0);
        core::mem::swap(&mut row, &mut next);
    }

    row
}

/// Binomial approximation of a Gaussian, center tap first.
///
/// Uses row `2*radius` of Pascal's triangle normalized by its sum
/// (`2^(2*radius)`), keeping entries `radius` down to `0`.
///
/// The divisor is the exact power of two rather than the sum of the `f64`
/// row, whose entries past row 56 are rounded and no longer add up to it.
pub fn gaussian_kernel(radius: Radius) -> HalfKernel {
    let r = radius.get();
    let row = pascal_row(2 * r);
    let sum = row_sum(2 * r);
    debug!(radius = r, taps = row.len(), sum, "expanded binomial row");

    let values = row[..=r].iter().rev().map(|&c| c / sum).collect();
    HalfKernel::from_center_to_edge(radius, values)
}

/// `2^n`, the sum of row `n`. Exact: every intermediate is a power of two and
/// `n <= 2 * MAX_RADIUS` stays inside the `f64` exponent range.
fn row_sum(n: usize) -> f64 {
    2f64.powi(n as i32)
}
