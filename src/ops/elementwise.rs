//! Element-wise add and multiply over `i32` and `f32`.
//!
//! Each operation comes in two flavors:
//! - the plain entry point accepts any buffer alignment and uses
//!   unaligned-safe loads;
//! - the `_aligned` entry point requires every buffer to start on the
//!   active ISA's vector boundary and uses aligned load/store, trading a
//!   checked precondition for lower load latency.
//!
//! Batches of [`IsaLevel::lanes_32`] elements run lane-parallel; the
//! remainder runs the identical scalar loop inside the same kernel, so the
//! full index range is written exactly once. Input/output aliasing is
//! unrepresentable through `&[T]` / `&mut [T]`.

use crate::cpu_kernels::{get_isa_level, IsaLevel};
use crate::error::KernelResult;
use crate::validation;

/// `out[k] = a[k] + b[k]` for 32-bit integers, wrapping on overflow.
///
/// Results are bit-identical to the scalar baseline
/// (`lane_scalar_ops::elementwise::add_i32`) on every input: integer
/// addition is order-insensitive and both paths wrap.
///
/// # Errors
/// [`crate::KernelError::InvalidLength`] if `a` or `b` differ in length
/// from `out`. Nothing is written on error.
pub fn vec_add_i32(a: &[i32], b: &[i32], out: &mut [i32]) -> KernelResult<()> {
    validation::check_elementwise_len(a.len(), b.len(), out.len())?;
    match get_isa_level() {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: level Avx2 implies the feature was detected at runtime;
        // lengths were validated above.
        IsaLevel::Avx2 => unsafe { crate::cpu_kernels::avx2::add_i32(a, b, out) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON is baseline on aarch64; lengths validated above.
        IsaLevel::Neon => unsafe { crate::cpu_kernels::neon::add_i32(a, b, out) },
        _ => lane_scalar_ops::elementwise::add_i32(a, b, out),
    }
    Ok(())
}

/// Aligned-fast flavor of [`vec_add_i32`].
///
/// # Errors
/// - [`crate::KernelError::InvalidLength`] on length mismatch.
/// - [`crate::KernelError::AlignmentViolation`] if any buffer does not
///   start on the boundary [`IsaLevel::required_alignment`] names for the
///   active level. The check runs before any load or store; a misaligned
///   call never faults and never writes output. On the scalar level no
///   boundary is required.
pub fn vec_add_i32_aligned(a: &[i32], b: &[i32], out: &mut [i32]) -> KernelResult<()> {
    validation::check_elementwise_len(a.len(), b.len(), out.len())?;
    let isa = get_isa_level();
    validation::check_elementwise_alignment(a.as_ptr(), b.as_ptr(), out.as_ptr(), isa)?;
    match isa {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: feature detected, lengths and 32-byte alignment validated.
        IsaLevel::Avx2 => unsafe { crate::cpu_kernels::avx2::add_i32_aligned(a, b, out) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON loads carry no alignment requirement; the 16-byte
        // precondition above is the contract, not a hardware need.
        IsaLevel::Neon => unsafe { crate::cpu_kernels::neon::add_i32(a, b, out) },
        _ => lane_scalar_ops::elementwise::add_i32(a, b, out),
    }
    Ok(())
}

/// `out[k] = a[k] * b[k]` for 32-bit integers, wrapping (low 32 bits).
///
/// # Errors
/// As [`vec_add_i32`].
pub fn vec_mul_i32(a: &[i32], b: &[i32], out: &mut [i32]) -> KernelResult<()> {
    validation::check_elementwise_len(a.len(), b.len(), out.len())?;
    match get_isa_level() {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: feature detected at runtime, lengths validated.
        IsaLevel::Avx2 => unsafe { crate::cpu_kernels::avx2::mul_i32(a, b, out) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON is baseline on aarch64; lengths validated.
        IsaLevel::Neon => unsafe { crate::cpu_kernels::neon::mul_i32(a, b, out) },
        _ => lane_scalar_ops::elementwise::mul_i32(a, b, out),
    }
    Ok(())
}

/// Aligned-fast flavor of [`vec_mul_i32`].
///
/// # Errors
/// As [`vec_add_i32_aligned`].
pub fn vec_mul_i32_aligned(a: &[i32], b: &[i32], out: &mut [i32]) -> KernelResult<()> {
    validation::check_elementwise_len(a.len(), b.len(), out.len())?;
    let isa = get_isa_level();
    validation::check_elementwise_alignment(a.as_ptr(), b.as_ptr(), out.as_ptr(), isa)?;
    match isa {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: feature detected, lengths and alignment validated.
        IsaLevel::Avx2 => unsafe { crate::cpu_kernels::avx2::mul_i32_aligned(a, b, out) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: see vec_add_i32_aligned.
        IsaLevel::Neon => unsafe { crate::cpu_kernels::neon::mul_i32(a, b, out) },
        _ => lane_scalar_ops::elementwise::mul_i32(a, b, out),
    }
    Ok(())
}

/// `out[k] = a[k] + b[k]` for 32-bit floats.
///
/// No reordering happens inside an elementwise op, so results are
/// bit-identical to the scalar baseline.
///
/// # Errors
/// As [`vec_add_i32`].
pub fn vec_add_f32(a: &[f32], b: &[f32], out: &mut [f32]) -> KernelResult<()> {
    validation::check_elementwise_len(a.len(), b.len(), out.len())?;
    match get_isa_level() {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: feature detected at runtime, lengths validated.
        IsaLevel::Avx2 => unsafe { crate::cpu_kernels::avx2::add_f32(a, b, out) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON is baseline on aarch64; lengths validated.
        IsaLevel::Neon => unsafe { crate::cpu_kernels::neon::add_f32(a, b, out) },
        _ => lane_scalar_ops::elementwise::add_f32(a, b, out),
    }
    Ok(())
}

/// Aligned-fast flavor of [`vec_add_f32`].
///
/// # Errors
/// As [`vec_add_i32_aligned`].
pub fn vec_add_f32_aligned(a: &[f32], b: &[f32], out: &mut [f32]) -> KernelResult<()> {
    validation::check_elementwise_len(a.len(), b.len(), out.len())?;
    let isa = get_isa_level();
    validation::check_elementwise_alignment(a.as_ptr(), b.as_ptr(), out.as_ptr(), isa)?;
    match isa {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: feature detected, lengths and alignment validated.
        IsaLevel::Avx2 => unsafe { crate::cpu_kernels::avx2::add_f32_aligned(a, b, out) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: see vec_add_i32_aligned.
        IsaLevel::Neon => unsafe { crate::cpu_kernels::neon::add_f32(a, b, out) },
        _ => lane_scalar_ops::elementwise::add_f32(a, b, out),
    }
    Ok(())
}

/// `out[k] = a[k] * b[k]` for 32-bit floats.
///
/// # Errors
/// As [`vec_add_i32`].
pub fn vec_mul_f32(a: &[f32], b: &[f32], out: &mut [f32]) -> KernelResult<()> {
    validation::check_elementwise_len(a.len(), b.len(), out.len())?;
    match get_isa_level() {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: feature detected at runtime, lengths validated.
        IsaLevel::Avx2 => unsafe { crate::cpu_kernels::avx2::mul_f32(a, b, out) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON is baseline on aarch64; lengths validated.
        IsaLevel::Neon => unsafe { crate::cpu_kernels::neon::mul_f32(a, b, out) },
        _ => lane_scalar_ops::elementwise::mul_f32(a, b, out),
    }
    Ok(())
}

/// Aligned-fast flavor of [`vec_mul_f32`].
///
/// # Errors
/// As [`vec_add_i32_aligned`].
pub fn vec_mul_f32_aligned(a: &[f32], b: &[f32], out: &mut [f32]) -> KernelResult<()> {
    validation::check_elementwise_len(a.len(), b.len(), out.len())?;
    let isa = get_isa_level();
    validation::check_elementwise_alignment(a.as_ptr(), b.as_ptr(), out.as_ptr(), isa)?;
    match isa {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: feature detected, lengths and alignment validated.
        IsaLevel::Avx2 => unsafe { crate::cpu_kernels::avx2::mul_f32_aligned(a, b, out) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: see vec_add_i32_aligned.
        IsaLevel::Neon => unsafe { crate::cpu_kernels::neon::mul_f32(a, b, out) },
        _ => lane_scalar_ops::elementwise::mul_f32(a, b, out),
    }
    Ok(())
}
