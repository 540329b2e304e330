use thiserror::Error;

/// Errors surfaced by the kernel entry points.
///
/// Every precondition is checked before the dispatched kernel touches its
/// output buffer; a failed call never produces partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// An input buffer does not match the expected element count.
    #[error("buffer {name} has len {actual}, expected {expected}")]
    InvalidLength {
        name: &'static str,
        actual: usize,
        expected: usize,
    },
    /// An aligned-fast variant was handed a buffer that does not start on
    /// the vector boundary the active ISA loads from.
    #[error("buffer {name} at {addr:#x} is not aligned to {required} bytes")]
    AlignmentViolation {
        name: &'static str,
        addr: usize,
        required: usize,
    },
    /// Substring search was handed an empty pattern.
    #[error("pattern must not be empty")]
    InvalidPattern,
}

pub type KernelResult<T> = Result<T, KernelError>;
