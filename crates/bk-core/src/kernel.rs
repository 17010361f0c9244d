use core::fmt;

use crate::{Radius, exact_sum};

/// Center-to-edge half of a symmetric, normalized blur kernel.
///
/// Conventions:
/// - `values[0]` is the center tap, `values[radius]` the outermost tap.
/// - The mirrored full kernel has `2*radius + 1` taps and sums to ~1.
/// - Values stay in `f64`; casting to `f32` happens in [`HalfKernel::to_f32`]
///   and in the `Display` impl.
#[derive(Debug, Clone, PartialEq)]
pub struct HalfKernel {
    radius: Radius,
    values: Vec<f64>,
}

impl HalfKernel {
    pub fn from_center_to_edge(radius: Radius, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            radius.get() + 1,
            "half kernel len must be radius+1"
        );
        Self { radius, values }
    }

    #[inline]
    pub fn radius(&self) -> Radius {
        self.radius
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.values[0]
    }

    pub fn to_f32(&self) -> Vec<f32> {
        self.values.iter().map(|&v| v as f32).collect()
    }

    /// Full symmetric kernel, edge to center to edge.
    pub fn to_full(&self) -> Vec<f64> {
        let r = self.radius.get();
        let mut full = Vec::with_capacity(self.radius.full_len());
        full.extend(self.values[1..].iter().rev());
        full.extend_from_slice(&self.values);
        debug_assert_eq!(full.len(), 2 * r + 1);
        full
    }

    /// Sum of the mirrored full kernel: center once, every other tap twice.
    pub fn full_sum(&self) -> f64 {
        let center = self.values[0];
        exact_sum(
            core::iter::once(center).chain(self.values[1..].iter().map(|&v| 2.0 * v)),
        )
    }
}

impl fmt::Display for HalfKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            // Debug keeps a trailing `.0` on whole numbers.
            write!(f, "{:?}", *v as f32)?;
        }
        f.write_str(" }")
    }
}

/// The two printed lines: effective radius, then the brace literal.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelReport {
    pub kernel: HalfKernel,
}

impl KernelReport {
    pub fn new(kernel: HalfKernel) -> Self {
        Self { kernel }
    }
}

impl fmt::Display for KernelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Radius = {:?}", self.kernel.radius().effective())?;
        writeln!(f, "{}", self.kernel)
    }
}

#[cfg(test)]
mod tests {
    use super::{HalfKernel, KernelReport};
    use crate::Radius;

    fn radius(r: i64) -> Radius {
        Radius::new(r).unwrap()
    }

    #[test]
    fn mirrors_edge_to_center_to_edge() {
        let k = HalfKernel::from_center_to_edge(radius(2), vec![0.375, 0.25, 0.0625]);
        assert_eq!(k.to_full(), vec![0.0625, 0.25, 0.375, 0.25, 0.0625]);
        assert_eq!(k.full_sum(), 1.0);
        assert_eq!(k.center(), 0.375);
    }

    #[test]
    fn display_uses_single_precision_round_trip() {
        let k = HalfKernel::from_center_to_edge(radius(2), vec![0.375, 0.25, 0.1]);
        assert_eq!(k.to_string(), "{ 0.375, 0.25, 0.1 }");

        let unit = HalfKernel::from_center_to_edge(radius(0), vec![1.0]);
        assert_eq!(unit.to_string(), "{ 1.0 }");
    }

    #[test]
    fn report_prints_two_lines() {
        let unit = HalfKernel::from_center_to_edge(radius(0), vec![1.0]);
        assert_eq!(
            KernelReport::new(unit).to_string(),
            "Radius = 0.5\n{ 1.0 }\n"
        );
    }

    #[test]
    #[should_panic(expected = "half kernel len must be radius+1")]
    fn rejects_mismatched_length() {
        let _ = HalfKernel::from_center_to_edge(radius(3), vec![1.0]);
    }
}
