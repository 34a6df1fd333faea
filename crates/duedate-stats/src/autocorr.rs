//! Autocorrelation of a series with its lagged self.

/// Pearson correlation between `data[..n - lag]` and `data[lag..]`.
///
/// Each shifted series is centered on its own mean, which is what a plain
/// correlation of the two slices computes. Returns `None` when the lag is
/// zero, fewer than two pairs remain, or either shifted series is constant
/// (zero variance makes the correlation undefined).
///
/// The result is not clamped. Floating-point error can push a perfectly
/// correlated series marginally past 1; callers decide how to treat that.
#[must_use]
pub fn autocorrelation(data: &[f64], lag: usize) -> Option<f64> {
    if lag == 0 || data.len() < lag + 2 {
        return None;
    }
    let n = data.len() - lag;
    let head = &data[..n];
    let tail = &data[lag..];

    let mean_head = head.iter().sum::<f64>() / n as f64;
    let mean_tail = tail.iter().sum::<f64>() / n as f64;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in head.iter().zip(tail) {
        let dx = x - mean_head;
        let dy = y - mean_tail;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx <= 0.0 || syy <= 0.0 {
        return None;
    }
    let r = sxy / (sxx * syy).sqrt();
    r.is_finite().then_some(r)
}

/// Lag-1 autocorrelation: correlation between consecutive observations.
#[must_use]
pub fn lag1_autocorrelation(data: &[f64]) -> Option<f64> {
    autocorrelation(data, 1)
}

/// Autocorrelations for lags `1..=max_lag`; undefined lags are `None`.
#[must_use]
pub fn autocorrelation_function(data: &[f64], max_lag: usize) -> Vec<Option<f64>> {
    (1..=max_lag).map(|lag| autocorrelation(data, lag)).collect()
}
