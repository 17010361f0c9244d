use bk_core::{BorderMode, HalfKernel, map_index};

/// One separable blur pass over `signal` using a center-to-edge half kernel.
///
/// `out[i] = w[0]*s[i] + sum_{k=1..=R} w[k] * (s[i-k] + s[i+k])`, with taps
/// outside the signal resolved by `border`. Weights are cast to `f32` once.
pub fn blur_1d(signal: &[f32], kernel: &HalfKernel, border: BorderMode, out: &mut [f32]) {
    assert_eq!(out.len(), signal.len(), "out must match signal length");

    let n = signal.len();
    if n == 0 {
        return;
    }

    let weights = kernel.to_f32();
    let radius = kernel.radius().get();

    if n > 2 * radius {
        blur_interior(signal, &weights, radius, out);
        blur_edges(signal, &weights, radius, border, out, 0..radius);
        blur_edges(signal, &weights, radius, border, out, n - radius..n);
    } else {
        blur_edges(signal, &weights, radius, border, out, 0..n);
    }
}

// Every tap in bounds for `i` in `radius..n-radius`.
fn blur_interior(signal: &[f32], weights: &[f32], radius: usize, out: &mut [f32]) {
    let n = signal.len();
    for i in radius..n - radius {
        let mut acc = weights[0] * signal[i];
        for (k, &w) in weights.iter().enumerate().skip(1) {
            acc += w * (signal[i - k] + signal[i + k]);
        }
        out[i] = acc;
    }
}

fn blur_edges(
    signal: &[f32],
    weights: &[f32],
    radius: usize,
    border: BorderMode,
    out: &mut [f32],
    range: core::ops::Range<usize>,
) {
    let n = signal.len();
    let fill = match border {
        BorderMode::Constant(c) => c,
        _ => 0.0,
    };
    let tap = |i: isize| map_index(i, n, border).map_or(fill, |j| signal[j]);

    for i in range {
        let center = i as isize;
        let mut acc = weights[0] * signal[i];
        for k in 1..=radius {
            let k = k as isize;
            acc += weights[k as usize] * (tap(center - k) + tap(center + k));
        }
        out[i] = acc;
    }
}
