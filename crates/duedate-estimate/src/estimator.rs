//! Due-date estimation logic.

use std::sync::OnceLock;

use chrono::{NaiveDateTime, TimeDelta};
use duedate_stats::{lag1_autocorrelation, mean, sample_variance, standard_normal_quantile};
use duedate_types::{ConfidenceLevel, DueDateError, Result, Sample, SampleError, UnitCount};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interpret::AutocorrelationStrength;

/// Default hours per calendar day (continuous 24-hour operation).
pub const DEFAULT_HOURS_PER_DAY: f64 = 24.0;

/// Autocorrelations within this distance of 1 are treated as exactly 1.
pub const AUTOCORRELATION_TOLERANCE: f64 = 1e-9;

/// Confidence levels used by [`Estimator::sweep_default`].
pub const DEFAULT_SWEEP_LEVELS: [f64; 5] = [0.5, 0.8, 0.9, 0.95, 0.99];

/// Static estimator instance.
static ESTIMATOR: OnceLock<Estimator> = OnceLock::new();

/// Estimator settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Working hours per calendar day, used to convert hours to days.
    pub hours_per_day: f64,
    /// Whether to inflate the variance by `(1 + rho) / (1 - rho)`.
    pub adjust_for_autocorrelation: bool,
}

impl EstimatorConfig {
    /// Creates the default configuration: 24-hour days, autocorrelation adjusted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            adjust_for_autocorrelation: true,
        }
    }

    /// Sets the working hours per day.
    #[must_use]
    pub const fn with_hours_per_day(mut self, hours_per_day: f64) -> Self {
        self.hours_per_day = hours_per_day;
        self
    }

    /// Sets whether the variance is adjusted for autocorrelation.
    #[must_use]
    pub const fn with_autocorrelation_adjustment(mut self, adjust: bool) -> Self {
        self.adjust_for_autocorrelation = adjust;
        self
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics of a sample that do not depend on the order size or confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleStatistics {
    /// Number of observations.
    pub sample_size: usize,
    /// Mean inter-completion time (hours).
    pub mean: f64,
    /// Unbiased sample variance (hours squared).
    pub variance: f64,
    /// Sample standard deviation (hours).
    pub std_dev: f64,
    /// Lag-1 autocorrelation; 0 when undefined for a constant series.
    pub autocorrelation: f64,
    /// Variance multiplier `(1 + rho) / (1 - rho)`.
    pub variance_multiplier: f64,
}

impl SampleStatistics {
    /// Computes the statistics of a sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the lag-1 autocorrelation is at or above 1 or
    /// yields an invalid variance multiplier.
    pub fn of(sample: &Sample) -> Result<Self> {
        let data = sample.values();
        let too_few = || SampleError::TooFewValues {
            len: data.len(),
            min: Sample::MIN_LEN,
        };
        let mean = mean(data).ok_or_else(too_few)?;
        let variance = sample_variance(data).ok_or_else(too_few)?;

        let autocorrelation = lag1_autocorrelation(data).map_or_else(
            || {
                debug!("lag-1 autocorrelation undefined because a shifted series is constant, using 0");
                0.0
            },
            snap_to_lower_bound,
        );
        let variance_multiplier = variance_multiplier(autocorrelation)?;

        Ok(Self {
            sample_size: data.len(),
            mean: ensure_finite(mean, "mean")?,
            variance: ensure_finite(variance, "variance")?,
            std_dev: variance.sqrt(),
            autocorrelation,
            variance_multiplier,
        })
    }

    /// Classifies the strength of the lag-1 autocorrelation.
    #[must_use]
    pub fn autocorrelation_strength(&self) -> AutocorrelationStrength {
        AutocorrelationStrength::from_rho(self.autocorrelation)
    }
}

/// Rounds a correlation just below -1 (floating-point error) up to -1.
fn snap_to_lower_bound(rho: f64) -> f64 {
    if rho < -1.0 && rho >= -1.0 - AUTOCORRELATION_TOLERANCE {
        -1.0
    } else {
        rho
    }
}

/// Computes `(1 + rho) / (1 - rho)`, the variance inflation for lag-1 autocorrelation.
///
/// Values of `rho` below -1 by no more than [`AUTOCORRELATION_TOLERANCE`]
/// are treated as exactly -1.
///
/// # Errors
///
/// Returns [`DueDateError::DegenerateAutocorrelation`] when `rho` is at or
/// above 1 (within [`AUTOCORRELATION_TOLERANCE`]), and
/// [`DueDateError::InvalidVarianceMultiplier`] when the result is negative or
/// not finite.
pub fn variance_multiplier(rho: f64) -> Result<f64> {
    if !rho.is_finite() {
        return Err(DueDateError::NonFinite("autocorrelation"));
    }
    let rho = snap_to_lower_bound(rho);
    if rho >= 1.0 - AUTOCORRELATION_TOLERANCE {
        return Err(DueDateError::DegenerateAutocorrelation(rho));
    }
    let multiplier = (1.0 + rho) / (1.0 - rho);
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(DueDateError::InvalidVarianceMultiplier(multiplier));
    }
    Ok(multiplier)
}

/// Result of a due-date estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueDateEstimate {
    /// Number of observations in the sample.
    pub sample_size: usize,
    /// Units in the order (b).
    pub unit_count: u32,
    /// Confidence level as a probability.
    pub confidence: f64,
    /// Mean inter-completion time (hours).
    pub mean: f64,
    /// Unbiased sample variance (hours squared).
    pub variance: f64,
    /// Sample standard deviation (hours).
    pub std_dev: f64,
    /// Lag-1 autocorrelation (rho).
    pub autocorrelation: f64,
    /// Variance multiplier applied (1 when adjustment is disabled).
    pub variance_multiplier: f64,
    /// Expected completion time for the order, `b * mean` (hours).
    pub scaled_mean: f64,
    /// Standard deviation of the completion time for the order (hours).
    pub scaled_std_dev: f64,
    /// Standard normal quantile of the confidence level.
    pub z_score: f64,
    /// Due date (hours).
    pub due_date_hours: f64,
    /// Due date (days).
    pub due_date_days: f64,
    /// Expected (50% confidence) completion time (days).
    pub average_days: f64,
    /// Due date minus the expected completion time (days).
    pub safety_days: f64,
}

impl DueDateEstimate {
    /// Safety time as a percentage of the average completion time.
    ///
    /// Returns 0 when the average is 0.
    #[must_use]
    pub fn safety_percent(&self) -> f64 {
        if self.average_days == 0.0 {
            0.0
        } else {
            self.safety_days / self.average_days * 100.0
        }
    }

    /// Safety time in hours.
    #[must_use]
    pub fn safety_hours(&self) -> f64 {
        self.due_date_hours - self.scaled_mean
    }

    /// Calendar due date when production starts at `start`.
    ///
    /// Returns `None` if the result is out of range.
    #[must_use]
    pub fn due_date_from(&self, start: NaiveDateTime) -> Option<NaiveDateTime> {
        let millis = (self.due_date_hours * 3_600_000.0).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return None;
        }
        start.checked_add_signed(TimeDelta::try_milliseconds(millis as i64)?)
    }

    /// Classifies the strength of the lag-1 autocorrelation.
    #[must_use]
    pub fn autocorrelation_strength(&self) -> AutocorrelationStrength {
        AutocorrelationStrength::from_rho(self.autocorrelation)
    }
}

/// Due-date estimator.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Creates a new estimator with the given configuration.
    #[must_use]
    pub const fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Returns the global estimator instance with default settings.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(Self::default)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimates the due date for `units` at `confidence`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample's autocorrelation is degenerate, the
    /// configured hours per day is invalid, or a derived value is not finite.
    pub fn estimate(
        &self,
        sample: &Sample,
        units: UnitCount,
        confidence: ConfidenceLevel,
    ) -> Result<DueDateEstimate> {
        let stats = SampleStatistics::of(sample)?;
        self.project(&stats, units, confidence)
    }

    /// Estimates the due date at each of `levels`, computing the sample
    /// statistics once.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn sweep(
        &self,
        sample: &Sample,
        units: UnitCount,
        levels: &[ConfidenceLevel],
    ) -> Result<Vec<DueDateEstimate>> {
        let stats = SampleStatistics::of(sample)?;
        levels
            .iter()
            .map(|&level| self.project(&stats, units, level))
            .collect()
    }

    /// Estimates the due date at [`DEFAULT_SWEEP_LEVELS`].
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Self::sweep`].
    pub fn sweep_default(&self, sample: &Sample, units: UnitCount) -> Result<Vec<DueDateEstimate>> {
        let levels = DEFAULT_SWEEP_LEVELS
            .iter()
            .map(|&level| ConfidenceLevel::new(level))
            .collect::<Result<Vec<_>>>()?;
        self.sweep(sample, units, &levels)
    }

    /// Scales precomputed sample statistics to an order of `units` at `confidence`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hours per day is invalid or a
    /// derived value is not finite.
    pub fn project(
        &self,
        stats: &SampleStatistics,
        units: UnitCount,
        confidence: ConfidenceLevel,
    ) -> Result<DueDateEstimate> {
        let hours_per_day = self.config.hours_per_day;
        if !hours_per_day.is_finite() || hours_per_day <= 0.0 {
            return Err(DueDateError::InvalidHoursPerDay(hours_per_day));
        }

        let b = units.as_f64();
        let multiplier = if self.config.adjust_for_autocorrelation {
            stats.variance_multiplier
        } else {
            1.0
        };

        let scaled_mean = ensure_finite(b * stats.mean, "scaled mean")?;
        let scaled_std_dev = ensure_finite((multiplier * b * stats.variance).sqrt(), "scaled std dev")?;
        let z_score = standard_normal_quantile(confidence.value())
            .ok_or(DueDateError::InvalidConfidence(confidence.value()))?;

        let due_date_hours = ensure_finite(scaled_mean + z_score * scaled_std_dev, "due date")?;
        let due_date_days = ensure_finite(due_date_hours / hours_per_day, "due date days")?;
        let average_days = ensure_finite(scaled_mean / hours_per_day, "average days")?;
        let safety_days = ensure_finite(due_date_days - average_days, "safety days")?;

        debug!(
            units = units.get(),
            confidence = confidence.value(),
            rho = stats.autocorrelation,
            multiplier,
            scaled_mean,
            scaled_std_dev,
            z_score,
            due_date_hours,
            "estimated due date"
        );

        Ok(DueDateEstimate {
            sample_size: stats.sample_size,
            unit_count: units.get(),
            confidence: confidence.value(),
            mean: stats.mean,
            variance: stats.variance,
            std_dev: stats.std_dev,
            autocorrelation: stats.autocorrelation,
            variance_multiplier: multiplier,
            scaled_mean,
            scaled_std_dev,
            z_score,
            due_date_hours,
            due_date_days,
            average_days,
            safety_days,
        })
    }
}

/// Computes a due-date estimate from raw inputs with the default estimator.
///
/// `confidence_level` is a probability, e.g. `0.9`.
///
/// # Errors
///
/// Returns an error if the sample has fewer than two values or a
/// non-positive value, `unit_count` is zero, `confidence_level` is outside
/// `(0, 1)`, or the sample's lag-1 autocorrelation is degenerate.
pub fn compute_due_date(
    sample: &[f64],
    unit_count: u32,
    confidence_level: f64,
) -> Result<DueDateEstimate> {
    let sample = Sample::try_from(sample)?;
    let units = UnitCount::new(unit_count)?;
    let confidence = ConfidenceLevel::new(confidence_level)?;
    Estimator::global().estimate(&sample, units, confidence)
}

fn ensure_finite(value: f64, what: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DueDateError::NonFinite(what))
    }
}
