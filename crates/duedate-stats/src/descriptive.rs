//! Mean, variance and a streaming accumulator.

use serde::Serialize;

/// Arithmetic mean, or `None` for an empty slice.
#[must_use]
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sum of squared deviations from the mean.
fn sum_squared_deviations(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    Some(data.iter().map(|x| (x - m) * (x - m)).sum())
}

/// Unbiased sample variance (divides by `n - 1`), or `None` when `n < 2`.
#[must_use]
pub fn sample_variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    Some(sum_squared_deviations(data)? / (data.len() - 1) as f64)
}

/// Population variance (divides by `n`), or `None` for an empty slice.
#[must_use]
pub fn population_variance(data: &[f64]) -> Option<f64> {
    Some(sum_squared_deviations(data)? / data.len() as f64)
}

/// Sample standard deviation, the square root of [`sample_variance`].
#[must_use]
pub fn std_dev(data: &[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Streaming accumulator for count, mean, variance and range.
///
/// Uses Welford's update so that a single pass over the data is enough and
/// the variance stays accurate for large, tightly clustered values.
#[derive(Debug, Clone)]
pub struct RunningStats {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Adds an observation.
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Number of observations seen.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Running mean, or `None` before the first observation.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Unbiased variance, or `None` with fewer than two observations.
    #[must_use]
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count > 1).then(|| self.m2 / (self.count - 1) as f64)
    }

    /// Smallest observation.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    /// Largest observation.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    /// Freezes the accumulator into a [`Summary`].
    #[must_use]
    pub fn summary(&self) -> Option<Summary> {
        let variance = self.sample_variance()?;
        Some(Summary {
            count: self.count,
            mean: self.mean,
            variance,
            std_dev: variance.sqrt(),
            min: self.min,
            max: self.max,
        })
    }
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl<'a> Extend<&'a f64> for RunningStats {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

/// Descriptive summary of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Unbiased sample variance.
    pub variance: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
}

impl Summary {
    /// Summarizes a slice, or `None` with fewer than two observations.
    #[must_use]
    pub fn of(data: &[f64]) -> Option<Self> {
        data.iter().copied().collect::<RunningStats>().summary()
    }

    /// Coefficient of variation (std dev / mean), or `None` for a zero mean.
    #[must_use]
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        (self.mean != 0.0).then(|| self.std_dev / self.mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_sample_variance() {
        assert_eq!(sample_variance(&[1.0]), None);
        // deviations from 5: 9, 1, 1, 9 -> 20 / 3
        assert_relative_eq!(
            sample_variance(&[2.0, 4.0, 6.0, 8.0]).unwrap(),
            20.0 / 3.0
        );
    }

    #[test]
    fn test_bessel_correction() {
        let data = [32.5, 35.5, 40.0, 38.5, 29.5, 37.0, 40.0];
        let n = data.len() as f64;
        let population = population_variance(&data).unwrap();
        assert_relative_eq!(
            sample_variance(&data).unwrap(),
            population * n / (n - 1.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_std_dev() {
        assert_relative_eq!(std_dev(&[2.0, 4.0, 6.0, 8.0]).unwrap(), (20.0f64 / 3.0).sqrt());
    }

    #[test]
    fn test_running_stats_matches_two_pass() {
        let data = [32.5, 35.5, 40.0, 38.5, 29.5, 37.0, 40.0, 49.0, 44.0];
        let stats: RunningStats = data.iter().copied().collect();

        assert_eq!(stats.count(), data.len());
        assert_relative_eq!(stats.mean().unwrap(), mean(&data).unwrap(), max_relative = 1e-12);
        assert_relative_eq!(
            stats.sample_variance().unwrap(),
            sample_variance(&data).unwrap(),
            max_relative = 1e-12
        );
        assert_eq!(stats.min(), Some(29.5));
        assert_eq!(stats.max(), Some(49.0));
    }

    #[test]
    fn test_running_stats_empty() {
        let stats = RunningStats::new();
        assert_eq!(stats.mean(), None);
        assert_eq!(stats.min(), None);
        assert!(stats.summary().is_none());
    }

    #[test]
    fn test_summary() {
        let summary = Summary::of(&[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert_relative_eq!(summary.mean, 5.0);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 8.0);
        assert_relative_eq!(
            summary.coefficient_of_variation().unwrap(),
            summary.std_dev / 5.0
        );
        assert!(Summary::of(&[1.0]).is_none());
    }
}
