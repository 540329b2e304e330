//! lane-kernels: data-parallel batch kernels with scalar baselines.
//!
//! Elementwise add/multiply over `i32`/`f32`, a dot-product reduction, and
//! substring occurrence counting, each paired with the sequential
//! reference loops in `lane-scalar-ops`. The crate provides:
//! - **Runtime ISA selection**: AVX2 / NEON detected once per process,
//!   baseline loops everywhere else
//! - **Explicit tails**: every vectorized kernel covers the remainder
//!   range with a scalar loop; batches plus tail span the input exactly
//!   once
//! - **Checked preconditions**: misaligned aligned-fast calls, length
//!   mismatches, and empty patterns come back as typed errors before any
//!   output is written
//! - **Equivalence reporting**: exact for integers and float elementwise
//!   results, tolerance-bounded with relative-deviation diagnostics for
//!   float reductions
//!
//! Everything is single-threaded and synchronous; parallelism exists only
//! at the instruction level. Kernels never retain references to caller
//! buffers.
//!
//! # Quick start
//!
//! ```
//! use lane_kernels::{check_i32, vec_add_i32};
//!
//! let a = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let b = [1; 9];
//! let mut out = [0; 9];
//! vec_add_i32(&a, &b, &mut out)?;
//!
//! let mut baseline = [0; 9];
//! lane_scalar_ops::elementwise::add_i32(&a, &b, &mut baseline);
//! assert!(check_i32(&out, &baseline)?.matches);
//! # Ok::<(), lane_kernels::KernelError>(())
//! ```

pub mod aligned;
pub mod cpu_kernels;
pub mod equivalence;
pub mod error;
pub mod ops;
mod validation;

#[cfg(test)]
mod tests_parity;

pub use aligned::AlignedVec;
pub use cpu_kernels::{get_isa_level, IsaLevel};
pub use equivalence::{check_f32, check_f32_exact, check_i32, check_scalar_f32, EquivalenceReport};
pub use error::{KernelError, KernelResult};
pub use ops::elementwise::{
    vec_add_f32, vec_add_f32_aligned, vec_add_i32, vec_add_i32_aligned, vec_mul_f32,
    vec_mul_f32_aligned, vec_mul_i32, vec_mul_i32_aligned,
};
pub use ops::reduction::{dot_f32, DOT_ABS_TOLERANCE};
pub use ops::search::substring_count;
