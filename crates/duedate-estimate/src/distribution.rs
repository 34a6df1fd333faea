//! Fitted-normal view of an order's completion time.

use duedate_stats::{normal_pdf, standard_normal_cdf};
use serde::Serialize;

use crate::DueDateEstimate;

/// Half-width of the charted range, in standard deviations of the order time.
pub const DISTRIBUTION_SPAN: f64 = 4.0;

/// Default number of bins for [`completion_distribution`].
pub const DEFAULT_DISTRIBUTION_BINS: usize = 24;

/// One slice of the completion-time distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityBin {
    /// Lower edge (days).
    pub start_days: f64,
    /// Upper edge (days).
    pub end_days: f64,
    /// Normal density at the bin midpoint, per day.
    pub density: f64,
    /// Probability that the order is finished by `end_days`.
    pub cumulative: f64,
    /// Whether the bin midpoint falls at or before the due date.
    pub within_due_date: bool,
}

/// Splits `mu_b +/- 4 sigma_b` into `bins` equal slices of the normal
/// distribution fitted to the order's completion time.
///
/// The slices marked `within_due_date` form the confidence region. Returns
/// `None` for zero bins or when the estimate has no spread.
#[must_use]
pub fn completion_distribution(estimate: &DueDateEstimate, bins: usize) -> Option<Vec<DensityBin>> {
    let mean = estimate.scaled_mean;
    let sd = estimate.scaled_std_dev;
    if bins == 0 || !sd.is_finite() || sd <= 0.0 || !mean.is_finite() || mean <= 0.0 {
        return None;
    }
    let to_days = estimate.average_days / mean;
    let lower = mean - DISTRIBUTION_SPAN * sd;
    let width = 2.0 * DISTRIBUTION_SPAN * sd / bins as f64;

    (0..bins)
        .map(|i| {
            let start = lower + width * i as f64;
            let end = start + width;
            let mid = start + width / 2.0;
            Some(DensityBin {
                start_days: start * to_days,
                end_days: end * to_days,
                density: normal_pdf(mid, mean, sd)? / to_days,
                cumulative: standard_normal_cdf((end - mean) / sd)?,
                within_due_date: mid <= estimate.due_date_hours,
            })
        })
        .collect()
}
