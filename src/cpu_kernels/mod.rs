//! Runtime ISA selection and the per-ISA kernel implementations.
//!
//! The vector ISA is resolved once per process and cached; every public
//! entry point in [`crate::ops`] dispatches through [`get_isa_level`].
//! Lane widths are hardware constants of the selected level, never
//! per-call configurable.

use std::sync::OnceLock;

#[cfg(target_arch = "x86_64")]
pub mod avx2;
#[cfg(target_arch = "aarch64")]
pub mod neon;

/// Vector instruction set selected for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsaLevel {
    /// No vector unit in use; every kernel runs the baseline loop.
    Scalar,
    /// 256-bit registers: 8 x 32-bit lanes, 32 byte lanes.
    Avx2,
    /// 128-bit registers: 4 x 32-bit lanes, 16 byte lanes.
    Neon,
}

impl IsaLevel {
    /// 32-bit lanes processed per vector operation.
    pub fn lanes_32(self) -> usize {
        match self {
            IsaLevel::Scalar => 1,
            IsaLevel::Avx2 => 8,
            IsaLevel::Neon => 4,
        }
    }

    /// Byte lanes processed per vector compare.
    pub fn lanes_8(self) -> usize {
        match self {
            IsaLevel::Scalar => 1,
            IsaLevel::Avx2 => 32,
            IsaLevel::Neon => 16,
        }
    }

    /// Boundary (bytes) the aligned-fast variants require of their
    /// buffers, or `None` when the level has no vector registers to
    /// align for.
    pub fn required_alignment(self) -> Option<usize> {
        match self {
            IsaLevel::Scalar => None,
            IsaLevel::Avx2 => Some(32),
            IsaLevel::Neon => Some(16),
        }
    }
}

static ISA_LEVEL: OnceLock<IsaLevel> = OnceLock::new();

/// ISA level for this process, detected on first call and cached.
pub fn get_isa_level() -> IsaLevel {
    *ISA_LEVEL.get_or_init(|| {
        let level = detect_isa_features();
        log::debug!("selected ISA level {:?}", level);
        level
    })
}

#[cfg(target_arch = "x86_64")]
fn detect_isa_features() -> IsaLevel {
    if is_x86_feature_detected!("avx2") {
        IsaLevel::Avx2
    } else {
        IsaLevel::Scalar
    }
}

#[cfg(target_arch = "aarch64")]
fn detect_isa_features() -> IsaLevel {
    IsaLevel::Neon
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_isa_features() -> IsaLevel {
    IsaLevel::Scalar
}
