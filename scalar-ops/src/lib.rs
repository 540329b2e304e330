//! Scalar reference implementations — the golden baseline for every
//! vectorized kernel in `lane-kernels`.
//!
//! These serve as:
//! 1. Correctness oracle: the parity suite compares each SIMD path against
//!    the loops in this crate.
//! 2. Honest timing baseline: this crate is compiled with `opt-level = 1`
//!    (configured in the workspace root Cargo.toml) so the compiler does
//!    not auto-vectorize the reference loops. A baseline that silently
//!    turns into SIMD would make scalar-vs-vector comparisons meaningless.
//!
//! Every function is a plain sequential loop over caller-owned slices; no
//! allocation, no retained references.

pub mod blas;
pub mod elementwise;
pub mod search;
