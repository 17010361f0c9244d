use bk_core::{HalfKernel, Radius, exact_sum};
use tracing::debug;

/// Half-widths of a hemisphere of radius `radius + 0.5`, sampled at integer
/// offsets `-radius..=radius`.
pub fn hemisphere_profile(radius: Radius) -> Vec<f64> {
    let r = radius.get() as i64;
    let r2 = radius.effective().powi(2);
    (-r..=r)
        .map(|x| {
            let xf = x as f64;
            (r2 - xf * xf).sqrt()
        })
        .collect()
}

/// Hemisphere-profile kernel, center tap first.
pub fn hemisphere_kernel(radius: Radius) -> HalfKernel {
    let r = radius.get();
    let profile = hemisphere_profile(radius);
    let sum = exact_sum(profile.iter().copied());
    debug!(radius = r, taps = profile.len(), sum, "sampled hemisphere profile");

    let values = profile[..=r].iter().rev().map(|&w| w / sum).collect();
    HalfKernel::from_center_to_edge(radius, values)
}
