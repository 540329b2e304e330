//! Result comparison between kernel paths.
//!
//! Integer buffers must agree exactly at every index — any mismatch is a
//! hard correctness failure. Float elementwise results also agree exactly
//! (no reordering happens inside a lane op); only reduction results are
//! compared with a tolerance, because the vector path folds lanes in a
//! different order than the sequential baseline. On mismatch the report
//! carries the worst relative deviation as a percentage for diagnostics.

use crate::error::KernelResult;
use crate::validation;

/// Outcome of an equivalence check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquivalenceReport {
    /// Whether every element (or the scalar pair) agreed within tolerance.
    pub matches: bool,
    /// Largest relative deviation among elements that broke the tolerance,
    /// as a percentage of the first operand. 0.0 when everything agreed.
    pub max_deviation: f32,
}

impl EquivalenceReport {
    fn agreement() -> Self {
        Self {
            matches: true,
            max_deviation: 0.0,
        }
    }
}

/// Relative deviation of `other` from `reference`, in percent.
fn relative_deviation(reference: f32, other: f32) -> f32 {
    if reference == 0.0 {
        if other == 0.0 {
            0.0
        } else {
            f32::INFINITY
        }
    } else {
        ((reference - other).abs() / reference.abs()) * 100.0
    }
}

/// Exact comparison of integer result buffers.
///
/// # Errors
/// [`crate::KernelError::InvalidLength`] if the lengths differ.
pub fn check_i32(a: &[i32], b: &[i32]) -> KernelResult<EquivalenceReport> {
    validation::check_same_len(a.len(), b.len())?;
    let mut report = EquivalenceReport::agreement();
    for (&x, &y) in a.iter().zip(b) {
        if x != y {
            report.matches = false;
            report.max_deviation = report
                .max_deviation
                .max(relative_deviation(x as f32, y as f32));
        }
    }
    Ok(report)
}

/// Exact comparison of float elementwise result buffers (tolerance zero).
///
/// # Errors
/// [`crate::KernelError::InvalidLength`] if the lengths differ.
pub fn check_f32_exact(a: &[f32], b: &[f32]) -> KernelResult<EquivalenceReport> {
    check_f32(a, b, 0.0)
}

/// Tolerance-bounded comparison of float result buffers.
///
/// # Errors
/// [`crate::KernelError::InvalidLength`] if the lengths differ.
pub fn check_f32(a: &[f32], b: &[f32], tolerance: f32) -> KernelResult<EquivalenceReport> {
    validation::check_same_len(a.len(), b.len())?;
    let mut report = EquivalenceReport::agreement();
    for (&x, &y) in a.iter().zip(b) {
        if (x - y).abs() > tolerance {
            report.matches = false;
            report.max_deviation = report.max_deviation.max(relative_deviation(x, y));
        }
    }
    Ok(report)
}

/// Tolerance-bounded comparison of two scalar results (dot products).
pub fn check_scalar_f32(a: f32, b: f32, tolerance: f32) -> EquivalenceReport {
    if (a - b).abs() <= tolerance {
        EquivalenceReport::agreement()
    } else {
        EquivalenceReport {
            matches: false,
            max_deviation: relative_deviation(a, b),
        }
    }
}
