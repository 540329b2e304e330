//! Scalar vs. vector A/B comparison harness.
//!
//! Builds random fixtures, warms up, times both paths with wall-clock
//! `Instant`, checks the results for equivalence, and prints a report.
//! The kernels themselves carry no timing logic; this binary wraps them.

use std::time::{Duration, Instant};

use lane_kernels::{
    check_f32_exact, check_i32, check_scalar_f32, dot_f32, get_isa_level, substring_count,
    vec_add_f32, vec_add_i32, vec_add_i32_aligned, vec_mul_f32, AlignedVec, DOT_ABS_TOLERANCE,
};
use lane_scalar_ops as scalar;
use rand::Rng;

const WARMUP_ITERS: usize = 3;
const TIMED_ITERS: usize = 20;

fn time<F: FnMut()>(mut f: F) -> Duration {
    for _ in 0..WARMUP_ITERS {
        f();
    }
    let start = Instant::now();
    for _ in 0..TIMED_ITERS {
        f();
    }
    start.elapsed() / TIMED_ITERS as u32
}

fn gibs(bytes: usize, elapsed: Duration) -> f64 {
    bytes as f64 / elapsed.as_secs_f64() / (1024.0 * 1024.0 * 1024.0)
}

fn report_pair(label: &str, bytes: usize, scalar_time: Duration, vector_time: Duration) {
    println!(
        "  scalar: {:>10.2?}  ({:.2} GiB/s)",
        scalar_time,
        gibs(bytes, scalar_time)
    );
    println!(
        "  vector: {:>10.2?}  ({:.2} GiB/s, {:.2}x)",
        vector_time,
        gibs(bytes, vector_time),
        scalar_time.as_secs_f64() / vector_time.as_secs_f64()
    );
    println!("  [{label}]");
}

fn bench_add_i32(n: usize) {
    println!("add_i32, n = {n}:");
    let mut rng = rand::thread_rng();
    let a: Vec<i32> = (0..n).map(|_| rng.gen_range(0..100)).collect();
    let b: Vec<i32> = (0..n).map(|_| rng.gen_range(0..100)).collect();
    let mut baseline = vec![0i32; n];
    let mut result = vec![0i32; n];

    let scalar_time = time(|| scalar::elementwise::add_i32(&a, &b, &mut baseline));
    let vector_time = time(|| vec_add_i32(&a, &b, &mut result).unwrap());

    let verdict = if check_i32(&baseline, &result).unwrap().matches {
        "results match"
    } else {
        "RESULTS DO NOT MATCH"
    };
    report_pair(verdict, 3 * n * 4, scalar_time, vector_time);
    println!();
}

fn bench_add_i32_aligned(n: usize) {
    println!("add_i32 (aligned-fast), n = {n}:");
    let mut rng = rand::thread_rng();
    let src_a: Vec<i32> = (0..n).map(|_| rng.gen_range(0..100)).collect();
    let src_b: Vec<i32> = (0..n).map(|_| rng.gen_range(0..100)).collect();
    let a = AlignedVec::from_slice(&src_a);
    let b = AlignedVec::from_slice(&src_b);
    let mut baseline = vec![0i32; n];
    let mut result = AlignedVec::<i32>::new(n);

    let scalar_time = time(|| scalar::elementwise::add_i32(&a, &b, &mut baseline));
    let vector_time = time(|| vec_add_i32_aligned(&a, &b, &mut result).unwrap());

    let verdict = if check_i32(&baseline, &result).unwrap().matches {
        "results match"
    } else {
        "RESULTS DO NOT MATCH"
    };
    report_pair(verdict, 3 * n * 4, scalar_time, vector_time);
    println!();
}

fn bench_elementwise_f32(n: usize) {
    let mut rng = rand::thread_rng();
    let a: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0..100.0)).collect();
    let b: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0..100.0)).collect();
    let mut baseline = vec![0.0f32; n];
    let mut result = vec![0.0f32; n];

    println!("add_f32, n = {n}:");
    let scalar_time = time(|| scalar::elementwise::add_f32(&a, &b, &mut baseline));
    let vector_time = time(|| vec_add_f32(&a, &b, &mut result).unwrap());
    let verdict = if check_f32_exact(&baseline, &result).unwrap().matches {
        "results match"
    } else {
        "RESULTS DO NOT MATCH"
    };
    report_pair(verdict, 3 * n * 4, scalar_time, vector_time);
    println!();

    println!("mul_f32, n = {n}:");
    let scalar_time = time(|| scalar::elementwise::mul_f32(&a, &b, &mut baseline));
    let vector_time = time(|| vec_mul_f32(&a, &b, &mut result).unwrap());
    let verdict = if check_f32_exact(&baseline, &result).unwrap().matches {
        "results match"
    } else {
        "RESULTS DO NOT MATCH"
    };
    report_pair(verdict, 3 * n * 4, scalar_time, vector_time);
    println!();
}

fn bench_dot(n: usize) {
    println!("dot_f32, n = {n}:");
    let mut rng = rand::thread_rng();
    let a: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0..1.0)).collect();
    let b: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0..1.0)).collect();

    let mut baseline = 0.0f32;
    let mut result = 0.0f32;
    let scalar_time = time(|| baseline = scalar::blas::dot_f32(&a, &b));
    let vector_time = time(|| result = dot_f32(&a, &b).unwrap());

    println!("  scalar dot: {baseline}");
    println!("  vector dot: {result}");
    let report = check_scalar_f32(baseline, result, DOT_ABS_TOLERANCE);
    let verdict = if report.matches {
        "dot products match".to_string()
    } else {
        // Lane-grouped summation drifts from the sequential order; report
        // how far, the same diagnostic the equivalence checker carries.
        format!("deviation {:.6}%", report.max_deviation)
    };
    report_pair(&verdict, 2 * n * 4, scalar_time, vector_time);
    println!();
}

fn bench_substring(text_len: usize, pattern_len: usize) {
    println!("substring_count, L = {text_len}, M = {pattern_len}:");
    let mut rng = rand::thread_rng();
    let text: Vec<u8> = (0..text_len).map(|_| rng.gen_range(b'a'..=b'z')).collect();
    let pattern: Vec<u8> = (0..pattern_len).map(|_| rng.gen_range(b'a'..=b'z')).collect();
    println!("  pattern: {:?}", std::str::from_utf8(&pattern).unwrap());

    let mut baseline = 0usize;
    let mut result = 0usize;
    let scalar_time = time(|| baseline = scalar::search::count_occurrences(&text, &pattern));
    let vector_time = time(|| result = substring_count(&text, &pattern).unwrap());

    println!("  occurrences: scalar {baseline}, vector {result}");
    let verdict = if baseline == result {
        "counts match"
    } else {
        "COUNTS DO NOT MATCH"
    };
    report_pair(verdict, text_len, scalar_time, vector_time);
    println!();
}

fn main() {
    env_logger::init();

    println!("================================================");
    println!("     LANE KERNEL A/B COMPARISON                 ");
    println!("================================================");
    println!("ISA level: {:?}", get_isa_level());
    println!();

    bench_add_i32(1_000_000);
    bench_add_i32_aligned(100_000);
    bench_elementwise_f32(1_000_000);
    bench_dot(1_000_000);
    bench_substring(10_000_000, 4);

    println!("================================================");
    println!("Comparison completed.");
}
