//! Precondition checks shared by the public entry points.
//!
//! All checks run before the dispatched kernel performs any load or store,
//! so a rejected call never faults and never leaves partial results.

use crate::cpu_kernels::IsaLevel;
use crate::error::{KernelError, KernelResult};

/// Both inputs of an elementwise op must match the output length.
#[inline]
pub(crate) fn check_elementwise_len(a: usize, b: usize, out: usize) -> KernelResult<()> {
    if a != out {
        return Err(KernelError::InvalidLength {
            name: "a",
            actual: a,
            expected: out,
        });
    }
    if b != out {
        return Err(KernelError::InvalidLength {
            name: "b",
            actual: b,
            expected: out,
        });
    }
    Ok(())
}

/// Paired input buffers (reductions, equivalence checks) must agree.
#[inline]
pub(crate) fn check_same_len(a: usize, b: usize) -> KernelResult<()> {
    if a != b {
        return Err(KernelError::InvalidLength {
            name: "b",
            actual: b,
            expected: a,
        });
    }
    Ok(())
}

/// `ptr` must start on a `required`-byte boundary.
#[inline]
pub(crate) fn check_alignment<T>(
    ptr: *const T,
    required: usize,
    name: &'static str,
) -> KernelResult<()> {
    let addr = ptr as usize;
    if addr % required != 0 {
        return Err(KernelError::AlignmentViolation {
            name,
            addr,
            required,
        });
    }
    Ok(())
}

/// Alignment precondition of the aligned-fast elementwise variants: all
/// three buffers on the active ISA's vector boundary. The scalar level has
/// no vector registers to align for, so it imposes nothing.
#[inline]
pub(crate) fn check_elementwise_alignment<T>(
    a: *const T,
    b: *const T,
    out: *const T,
    isa: IsaLevel,
) -> KernelResult<()> {
    let required = match isa.required_alignment() {
        Some(required) => required,
        None => return Ok(()),
    };
    check_alignment(a, required, "a")?;
    check_alignment(b, required, "b")?;
    check_alignment(out, required, "out")
}

/// Substring patterns must be non-empty.
#[inline]
pub(crate) fn check_pattern(len: usize) -> KernelResult<()> {
    if len == 0 {
        return Err(KernelError::InvalidPattern);
    }
    Ok(())
}
