//! Parity suite: every dispatched path must agree with the baseline crate
//! on the same inputs, exactly for integers and elementwise floats,
//! within tolerance for the dot product, exactly for substring counts.

use lane_scalar_ops as scalar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::equivalence::{check_f32_exact, check_i32, check_scalar_f32};
use crate::ops::elementwise::*;
use crate::ops::reduction::{dot_f32, DOT_ABS_TOLERANCE};
use crate::ops::search::substring_count;
use crate::{AlignedVec, KernelError};

// Sizes around the batch boundaries of every supported lane width:
// empty, sub-batch (tail only), exact batches, batch + tail, large.
const SIZES: &[usize] = &[0, 1, 3, 4, 7, 8, 9, 16, 31, 32, 33, 100, 1000];

fn random_i32_vec(rng: &mut StdRng, n: usize) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(0..100)).collect()
}

fn random_f32_vec(rng: &mut StdRng, n: usize) -> Vec<f32> {
    (0..n).map(|_| rng.gen_range(0.0..100.0)).collect()
}

fn random_lowercase_vec(rng: &mut StdRng, n: usize) -> Vec<u8> {
    (0..n).map(|_| rng.gen_range(b'a'..=b'z')).collect()
}

// ============================================================================
// Elementwise
// ============================================================================

#[test]
fn test_add_i32_single_full_batch() {
    let a = [1, 2, 3, 4, 5, 6, 7, 8];
    let b = [8, 7, 6, 5, 4, 3, 2, 1];
    let mut out = [0; 8];
    vec_add_i32(&a, &b, &mut out).unwrap();
    assert_eq!(out, [9; 8]);
}

#[test]
fn test_add_i32_batch_plus_tail() {
    let a: Vec<i32> = (1..=9).collect();
    let b = vec![1i32; 9];
    let mut out = vec![0i32; 9];
    vec_add_i32(&a, &b, &mut out).unwrap();
    let expected: Vec<i32> = (2..=10).collect();
    assert_eq!(out, expected);
}

#[test]
fn test_add_i32_matches_baseline() {
    let mut rng = StdRng::seed_from_u64(11);
    for &n in SIZES {
        let a = random_i32_vec(&mut rng, n);
        let b = random_i32_vec(&mut rng, n);
        let mut out = vec![0i32; n];
        let mut baseline = vec![0i32; n];
        vec_add_i32(&a, &b, &mut out).unwrap();
        scalar::elementwise::add_i32(&a, &b, &mut baseline);
        assert!(check_i32(&out, &baseline).unwrap().matches, "n = {n}");
    }
}

#[test]
fn test_mul_i32_matches_baseline() {
    let mut rng = StdRng::seed_from_u64(12);
    for &n in SIZES {
        let a = random_i32_vec(&mut rng, n);
        let b = random_i32_vec(&mut rng, n);
        let mut out = vec![0i32; n];
        let mut baseline = vec![0i32; n];
        vec_mul_i32(&a, &b, &mut out).unwrap();
        scalar::elementwise::mul_i32(&a, &b, &mut baseline);
        assert!(check_i32(&out, &baseline).unwrap().matches, "n = {n}");
    }
}

#[test]
fn test_i32_ops_wrap_like_baseline() {
    let a = vec![i32::MAX, i32::MIN, -1, i32::MAX, 2, 3, 4, 5, i32::MAX];
    let b = vec![2i32; 9];
    let mut out = vec![0i32; 9];
    let mut baseline = vec![0i32; 9];

    vec_add_i32(&a, &b, &mut out).unwrap();
    scalar::elementwise::add_i32(&a, &b, &mut baseline);
    assert_eq!(out, baseline);

    vec_mul_i32(&a, &b, &mut out).unwrap();
    scalar::elementwise::mul_i32(&a, &b, &mut baseline);
    assert_eq!(out, baseline);
}

#[test]
fn test_add_f32_matches_baseline_exactly() {
    let mut rng = StdRng::seed_from_u64(13);
    for &n in SIZES {
        let a = random_f32_vec(&mut rng, n);
        let b = random_f32_vec(&mut rng, n);
        let mut out = vec![0.0f32; n];
        let mut baseline = vec![0.0f32; n];
        vec_add_f32(&a, &b, &mut out).unwrap();
        scalar::elementwise::add_f32(&a, &b, &mut baseline);
        assert!(check_f32_exact(&out, &baseline).unwrap().matches, "n = {n}");
    }
}

#[test]
fn test_mul_f32_matches_baseline_exactly() {
    let mut rng = StdRng::seed_from_u64(14);
    for &n in SIZES {
        let a = random_f32_vec(&mut rng, n);
        let b = random_f32_vec(&mut rng, n);
        let mut out = vec![0.0f32; n];
        let mut baseline = vec![0.0f32; n];
        vec_mul_f32(&a, &b, &mut out).unwrap();
        scalar::elementwise::mul_f32(&a, &b, &mut baseline);
        assert!(check_f32_exact(&out, &baseline).unwrap().matches, "n = {n}");
    }
}

#[test]
fn test_elementwise_empty_input() {
    let mut out: Vec<f32> = vec![];
    vec_add_f32(&[], &[], &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_elementwise_length_mismatch_writes_nothing() {
    let a = [1, 2, 3];
    let b = [1, 2, 3, 4];
    let mut out = [7i32; 4];
    let err = vec_add_i32(&a, &b, &mut out).unwrap_err();
    assert!(matches!(err, KernelError::InvalidLength { name: "a", .. }));
    assert_eq!(out, [7; 4], "failed call must not touch the output");
}

// ============================================================================
// Aligned-fast variants
// ============================================================================

#[test]
fn test_aligned_variants_match_unaligned() {
    let mut rng = StdRng::seed_from_u64(15);
    for &n in SIZES {
        let a = AlignedVec::from_slice(&random_i32_vec(&mut rng, n));
        let b = AlignedVec::from_slice(&random_i32_vec(&mut rng, n));
        let mut fast = AlignedVec::<i32>::new(n);
        let mut plain = vec![0i32; n];
        vec_add_i32_aligned(&a, &b, &mut fast).unwrap();
        vec_add_i32(&a, &b, &mut plain).unwrap();
        assert_eq!(&fast[..], &plain[..], "n = {n}");

        let af = AlignedVec::from_slice(&random_f32_vec(&mut rng, n));
        let bf = AlignedVec::from_slice(&random_f32_vec(&mut rng, n));
        let mut fast_f = AlignedVec::<f32>::new(n);
        let mut plain_f = vec![0.0f32; n];
        vec_mul_f32_aligned(&af, &bf, &mut fast_f).unwrap();
        vec_mul_f32(&af, &bf, &mut plain_f).unwrap();
        assert!(check_f32_exact(&fast_f, &plain_f).unwrap().matches, "n = {n}");
    }
}

#[test]
fn test_aligned_variant_rejects_misaligned_buffer() {
    if crate::get_isa_level().required_alignment().is_none() {
        println!("skipping alignment-rejection test: scalar level");
        return;
    }
    let a = AlignedVec::<i32>::new(16);
    let b = AlignedVec::<i32>::new(16);
    let mut out = AlignedVec::<i32>::new(16);
    // One element past an aligned base can never sit on a vector boundary.
    let err = vec_add_i32_aligned(&a[1..], &b[1..], &mut out[1..]).unwrap_err();
    assert!(matches!(err, KernelError::AlignmentViolation { name: "a", .. }));

    // Misaligned output alone must also be caught.
    let err = vec_add_i32_aligned(&a[..15], &b[..15], &mut out[1..]).unwrap_err();
    assert!(matches!(err, KernelError::AlignmentViolation { name: "out", .. }));
}

// ============================================================================
// Dot product
// ============================================================================

#[test]
fn test_dot_tail_only_is_exact() {
    // N = 4 fits no 8-lane batch; both paths reduce sequentially.
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [5.0, 6.0, 7.0, 8.0];
    let dot = dot_f32(&a, &b).unwrap();
    assert_eq!(dot, 70.0);
    assert_eq!(scalar::blas::dot_f32(&a, &b), 70.0);
}

#[test]
fn test_dot_empty_is_zero() {
    assert_eq!(dot_f32(&[], &[]).unwrap(), 0.0);
}

#[test]
fn test_dot_length_mismatch() {
    assert!(dot_f32(&[1.0], &[1.0, 2.0]).is_err());
}

#[test]
fn test_dot_matches_baseline_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(16);
    for &n in SIZES {
        // Unit-range values keep the absolute tolerance meaningful at the
        // larger sizes.
        let a: Vec<f32> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let b: Vec<f32> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let vector = dot_f32(&a, &b).unwrap();
        let baseline = scalar::blas::dot_f32(&a, &b);
        let report = check_scalar_f32(baseline, vector, DOT_ABS_TOLERANCE);
        assert!(
            report.matches,
            "n = {n}: baseline {baseline}, vector {vector}, deviation {}%",
            report.max_deviation
        );
    }
}

// ============================================================================
// Substring count
// ============================================================================

#[test]
fn test_substring_scenario() {
    assert_eq!(substring_count(b"aaabaaab", b"aab").unwrap(), 2);
}

#[test]
fn test_substring_empty_pattern_rejected() {
    assert_eq!(substring_count(b"abc", b"").unwrap_err(), KernelError::InvalidPattern);
}

#[test]
fn test_substring_pattern_longer_than_text() {
    assert_eq!(substring_count(b"ab", b"abc").unwrap(), 0);
}

#[test]
fn test_substring_pattern_equals_text() {
    assert_eq!(substring_count(b"abc", b"abc").unwrap(), 1);
    assert_eq!(substring_count(b"abc", b"abd").unwrap(), 0);
}

#[test]
fn test_substring_text_shorter_than_chunk() {
    // The lane filter never runs; the byte loop must still count.
    assert_eq!(substring_count(b"abcabc", b"abc").unwrap(), 2);
}

#[test]
fn test_substring_overlapping_matches() {
    assert_eq!(substring_count(b"aaaaaaaa", b"aaa").unwrap(), 6);
}

#[test]
fn test_substring_matches_baseline() {
    let mut rng = StdRng::seed_from_u64(17);
    // Short alphabet plus short needles keeps the candidate filter busy.
    for &len in &[1usize, 15, 16, 31, 32, 33, 100, 4096] {
        let text: Vec<u8> = (0..len).map(|_| rng.gen_range(b'a'..=b'c')).collect();
        for m in 1..=4usize.min(len) {
            let pattern: Vec<u8> = (0..m).map(|_| rng.gen_range(b'a'..=b'c')).collect();
            let vector = substring_count(&text, &pattern).unwrap();
            let baseline = scalar::search::count_occurrences(&text, &pattern);
            assert_eq!(vector, baseline, "len = {len}, pattern = {pattern:?}");
        }
    }
}

#[test]
fn test_substring_random_ascii_like_fixture() {
    let mut rng = StdRng::seed_from_u64(18);
    let text = random_lowercase_vec(&mut rng, 100_000);
    let pattern = random_lowercase_vec(&mut rng, 4);
    let vector = substring_count(&text, &pattern).unwrap();
    let baseline = scalar::search::count_occurrences(&text, &pattern);
    assert_eq!(vector, baseline);
}
