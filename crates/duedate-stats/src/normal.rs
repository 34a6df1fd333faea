//! Normal distribution helpers backed by `statrs`.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Inverse CDF of the standard normal distribution (the z-score of `p`).
///
/// Returns `None` when `p` is not strictly inside `(0, 1)`, where the
/// quantile is infinite or undefined.
#[must_use]
pub fn standard_normal_quantile(p: f64) -> Option<f64> {
    if !p.is_finite() || p <= 0.0 || p >= 1.0 {
        return None;
    }
    let z = Normal::new(0.0, 1.0).ok()?.inverse_cdf(p);
    z.is_finite().then_some(z)
}

/// CDF of the standard normal distribution.
#[must_use]
pub fn standard_normal_cdf(z: f64) -> Option<f64> {
    Normal::new(0.0, 1.0).ok().map(|n| n.cdf(z))
}

/// Density of `N(mean, std_dev^2)` at `x`, or `None` for an invalid `std_dev`.
#[must_use]
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> Option<f64> {
    Normal::new(mean, std_dev).ok().map(|n| n.pdf(x))
}
