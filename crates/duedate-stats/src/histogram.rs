//! Equal-width histogram binning.

use serde::Serialize;

/// Default number of bins, matching the classroom histogram.
pub const DEFAULT_BINS: usize = 12;

/// Largest number of bins accepted by [`Histogram::from_data`].
pub const MAX_BINS: usize = 200;

/// Histogram over `[lower, upper]` with equal-width bins.
///
/// The last bin is closed on the right so the maximum observation is counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    lower: f64,
    upper: f64,
    counts: Vec<usize>,
}

/// A single histogram bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    /// Inclusive lower edge.
    pub start: f64,
    /// Upper edge (exclusive except for the last bin).
    pub end: f64,
    /// Number of observations in the bin.
    pub count: usize,
}

impl Histogram {
    /// Bins `data` into `bins` equal-width intervals spanning its range.
    ///
    /// A constant series gets the range `[v - 0.5, v + 0.5]`. Returns `None`
    /// for empty data, zero bins, more than [`MAX_BINS`] bins, or non-finite
    /// values.
    #[must_use]
    pub fn from_data(data: &[f64], bins: usize) -> Option<Self> {
        if data.is_empty() || bins == 0 || bins > MAX_BINS || data.iter().any(|x| !x.is_finite()) {
            return None;
        }
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (lower, upper) = if max > min {
            (min, max)
        } else {
            (min - 0.5, max + 0.5)
        };

        let width = (upper - lower) / bins as f64;
        let mut counts = vec![0; bins];
        for &x in data {
            let index = (((x - lower) / width).floor() as usize).min(bins - 1);
            counts[index] += 1;
        }

        Some(Self {
            lower,
            upper,
            counts,
        })
    }

    /// Width of each bin.
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.counts.len() as f64
    }

    /// Per-bin counts.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Iterates over the bins with their edges.
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        let width = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &count)| Bin {
            start: self.lower + width * i as f64,
            end: self.lower + width * (i + 1) as f64,
            count,
        })
    }

    /// Total number of observations.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
