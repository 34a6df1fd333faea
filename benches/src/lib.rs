//! Benchmark utilities for duedate.

use duedate_lib::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Mean of generated inter-completion times (hours).
const SYNTHETIC_MEAN: f64 = 39.0;

/// Half-width of the uniform innovation added at each step (hours).
const SYNTHETIC_SPREAD: f64 = 10.0;

/// Smallest generated time, keeping every observation positive.
const SYNTHETIC_FLOOR: f64 = 1.0;

/// Sample sizes used by the benchmarks.
pub const SAMPLE_SIZES: [usize; 4] = [29, 1_000, 10_000, 100_000];

/// Generates `len` autocorrelated inter-completion times.
///
/// Each value reverts toward the mean with coefficient `phi`, so the lag-1
/// autocorrelation of a long series is close to `phi`.
///
/// # Panics
///
/// Panics if `len` is below [`Sample::MIN_LEN`].
pub fn synthetic_sample(len: usize, phi: f64, seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut previous = SYNTHETIC_MEAN;
    let values: Vec<f64> = (0..len)
        .map(|_| {
            let noise = rng.gen_range(-SYNTHETIC_SPREAD..=SYNTHETIC_SPREAD);
            previous = (SYNTHETIC_MEAN + phi * (previous - SYNTHETIC_MEAN) + noise)
                .max(SYNTHETIC_FLOOR);
            previous
        })
        .collect();
    Sample::new(values).expect("synthetic sample must be valid")
}

/// Result of timing repeated estimates.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Number of observations in the sample.
    pub sample_size: usize,
    /// Number of estimates computed.
    pub iterations: u32,
    /// Total elapsed time.
    pub duration: Duration,
}

impl BenchmarkResult {
    /// Average time per estimate.
    pub fn per_estimate(&self) -> Duration {
        self.duration / self.iterations.max(1)
    }

    /// Observations processed per second.
    pub fn values_per_sec(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.sample_size as f64 * f64::from(self.iterations) / secs
        } else {
            0.0
        }
    }
}

/// Times `iterations` estimates of a 25-unit order at 90% confidence.
pub fn time_estimates(sample: &Sample, iterations: u32) -> BenchmarkResult {
    let estimator = Estimator::default();
    let units = UnitCount::new(25).expect("25 units is valid");
    let level = ConfidenceLevel::default();

    let start = Instant::now();
    for _ in 0..iterations {
        let estimate = estimator.estimate(sample, units, level);
        std::hint::black_box(&estimate);
    }

    BenchmarkResult {
        sample_size: sample.len(),
        iterations,
        duration: start.elapsed(),
    }
}

/// Formats a duration for display.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos < 1_000 {
        format!("{nanos} ns")
    } else if nanos < 1_000_000 {
        format!("{:.2} us", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_sample_is_deterministic() {
        let a = synthetic_sample(100, 0.4, 7);
        let b = synthetic_sample(100, 0.4, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|&x| x >= SYNTHETIC_FLOOR));
    }

    #[test]
    fn test_synthetic_autocorrelation() {
        let sample = synthetic_sample(20_000, 0.5, 1);
        let rho = duedate_lib::stats::lag1_autocorrelation(sample.values()).unwrap();
        assert!((rho - 0.5).abs() < 0.05, "rho {rho}");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "500 ns");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50 ms");
        assert_eq!(format_duration(Duration::from_secs(2)), "2.00 s");
    }
}
