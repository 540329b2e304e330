//! Pattern-occurrence counting.

use crate::cpu_kernels::{get_isa_level, IsaLevel};
use crate::error::KernelResult;
use crate::validation;

/// Count starting positions `p` in `[0, L - M]` where `pattern` occurs in
/// `text`. Occurrences may overlap.
///
/// A chunk of byte lanes is filtered against the pattern's first byte and
/// only candidate lanes pay the full `M`-byte verification, keeping the
/// average cost near `O(L)` instead of the naive `O(L * M)`. Texts shorter
/// than one chunk skip the lane filter and run the byte loop only.
///
/// Patterns longer than the text count zero occurrences. Both paths count
/// identically on every input — counting is order-independent.
///
/// # Errors
/// [`crate::KernelError::InvalidPattern`] if `pattern` is empty.
pub fn substring_count(text: &[u8], pattern: &[u8]) -> KernelResult<usize> {
    validation::check_pattern(pattern.len())?;
    if pattern.len() > text.len() {
        return Ok(0);
    }
    let count = match get_isa_level() {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: level Avx2 implies the feature was detected at runtime;
        // the pattern was validated non-empty and no longer than the text.
        IsaLevel::Avx2 => unsafe { crate::cpu_kernels::avx2::substring_count(text, pattern) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON is baseline on aarch64; pattern validated as above.
        IsaLevel::Neon => unsafe { crate::cpu_kernels::neon::substring_count(text, pattern) },
        _ => lane_scalar_ops::search::count_occurrences(text, pattern),
    };
    Ok(count)
}
