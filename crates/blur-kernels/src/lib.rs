//! Umbrella crate for the `blur-kernels` workspace.
//!
//! Re-exports the core types and the kernel generators.

pub use bk_core::*;
pub use bk_kernels::*;
