//! Benchmark runner that outputs a markdown table for the README.
//!
//! Run with: `cargo run --package duedate-bench --bin benchmark_table --release`

use duedate_bench::{SAMPLE_SIZES, format_duration, synthetic_sample, time_estimates};

/// Number of estimates timed per sample size.
const ITERATIONS: u32 = 200;

/// Lag-1 coefficient of the generated samples.
const PHI: f64 = 0.4;

fn main() {
    println!("duedate Estimate Benchmark");
    println!("==========================\n");
    println!("Running benchmarks ({ITERATIONS} estimates each)...\n");

    let results: Vec<_> = SAMPLE_SIZES
        .iter()
        .map(|&size| {
            let sample = synthetic_sample(size, PHI, size as u64);
            // Warm up
            time_estimates(&sample, 10);
            time_estimates(&sample, ITERATIONS)
        })
        .collect();

    println!("| Sample size | Per estimate | Throughput |");
    println!("|------------:|-------------:|-----------:|");
    for result in &results {
        println!(
            "| {} | {} | {:.1} M values/s |",
            result.sample_size,
            format_duration(result.per_estimate()),
            result.values_per_sec() / 1_000_000.0
        );
    }
}
