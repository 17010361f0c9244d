//! Blur kernel generators.
//!
//! Both generators return a [`HalfKernel`](bk_core::HalfKernel): center tap
//! first, normalized so the mirrored full kernel sums to 1.
//!
//! - [`gaussian_kernel`]: binomial coefficients from row `2*radius` of
//!   Pascal's triangle, a discrete Gaussian approximation.
//! - [`hemisphere_kernel`]: cross-sectional half-widths of a hemisphere of
//!   radius `radius + 0.5`.
//!
//! [`blur_1d`] applies a half kernel as one separable pass, the way a
//! horizontal or vertical blur shader consumes it.

pub mod binomial;
pub mod blur1d;
pub mod hemisphere;

use bk_core::{HalfKernel, Radius};

pub use binomial::{gaussian_kernel, pascal_row};
pub use blur1d::blur_1d;
pub use hemisphere::{hemisphere_kernel, hemisphere_profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelKind {
    Gaussian,
    Hemisphere,
}

impl KernelKind {
    pub fn generate(self, radius: Radius) -> HalfKernel {
        match self {
            Self::Gaussian => gaussian_kernel(radius),
            Self::Hemisphere => hemisphere_kernel(radius),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Gaussian => "gaussian",
            Self::Hemisphere => "hemisphere",
        }
    }
}
