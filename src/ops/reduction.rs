//! Horizontal reductions.

use crate::cpu_kernels::{get_isa_level, IsaLevel};
use crate::error::KernelResult;
use crate::validation;

/// Absolute tolerance for comparing the vector dot product against the
/// sequential baseline.
pub const DOT_ABS_TOLERANCE: f32 = 1e-5;

/// Dot product: Σ `a[k] * b[k]`.
///
/// The vector path keeps one lane-wide accumulator (multiply, then add
/// into the accumulator — nothing is stored to memory per batch), folds
/// the lanes to a scalar once after the last full batch, and finishes with
/// a sequential multiply-accumulate over the tail. Because the summation
/// order differs from the purely sequential baseline, the two results are
/// not bit-identical; compare them with
/// [`crate::equivalence::check_scalar_f32`] and [`DOT_ABS_TOLERANCE`].
/// `N = 0` returns 0.0.
///
/// # Errors
/// [`crate::KernelError::InvalidLength`] if the lengths differ.
pub fn dot_f32(a: &[f32], b: &[f32]) -> KernelResult<f32> {
    validation::check_same_len(a.len(), b.len())?;
    let dot = match get_isa_level() {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: level Avx2 implies the feature was detected at runtime;
        // lengths were validated above.
        IsaLevel::Avx2 => unsafe { crate::cpu_kernels::avx2::dot_f32(a, b) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON is baseline on aarch64; lengths validated above.
        IsaLevel::Neon => unsafe { crate::cpu_kernels::neon::dot_f32(a, b) },
        _ => lane_scalar_ops::blas::dot_f32(a, b),
    };
    Ok(dot)
}
