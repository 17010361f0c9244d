//! Foundational types for blur kernel generation.
//!
//! ## Half Kernels
//! Symmetric kernels are stored as their center-to-edge half: index 0 is the
//! center tap, index `radius` the outermost. The mirrored full kernel has
//! `2*radius + 1` taps and sums to 1 within rounding.
//!
//! ## Precision
//! All arithmetic is done in `f64`. Values are cast to `f32` only at the
//! output boundary, which is the precision shaders consume them in.
//!
//! ## Radius Bound
//! [`Radius`] rejects negative values and anything above [`MAX_RADIUS`].

mod border;
mod error;
mod kernel;
mod radius;
mod sum;

pub use border::{BorderMode, map_index};
pub use error::Error;
pub use kernel::{HalfKernel, KernelReport};
pub use radius::{MAX_RADIUS, Radius};
pub use sum::exact_sum;
