/// Correctly rounded sum of finite `f64` values.
///
/// Keeps a list of non-overlapping partial sums (Shewchuk's algorithm), so the
/// result equals the exact real sum rounded once, independent of input order.
/// Non-finite inputs are not supported.
pub fn exact_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut partials: Vec<f64> = Vec::new();

    for value in values {
        let mut x = value;
        let mut kept = 0;
        for j in 0..partials.len() {
            let mut y = partials[j];
            if x.abs() < y.abs() {
                core::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[kept] = lo;
                kept += 1;
            }
            x = hi;
        }
        partials.truncate(kept);
        partials.push(x);
    }

    round_partials(&partials)
}

// Partials are ordered by increasing magnitude; sum from the top until the
// result stops being exact, then fix a half-way case so rounding is to nearest.
fn round_partials(partials: &[f64]) -> f64 {
    let Some((&top, rest)) = partials.split_last() else {
        return 0.0;
    };

    let mut hi = top;
    let mut lo = 0.0;
    let mut n = rest.len();
    while n > 0 {
        let x = hi;
        n -= 1;
        let y = rest[n];
        hi = x + y;
        lo = y - (hi - x);
        if lo != 0.0 {
            break;
        }
    }

    if n > 0 && ((lo < 0.0 && rest[n - 1] < 0.0) || (lo > 0.0 && rest[n - 1] > 0.0)) {
        let y = lo * 2.0;
        let x = hi + y;
        if y == x - hi {
            hi = x;
        }
    }

    hi
}
