//! Error types for duedate.

use thiserror::Error;

/// Result type alias for duedate operations.
pub type Result<T> = std::result::Result<T, DueDateError>;

/// Errors that can occur while validating inputs or computing an estimate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DueDateError {
    /// The sample failed validation.
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// Confidence level is not finite or lies outside the open interval (0, 1).
    #[error("Invalid confidence level: {0} (must lie strictly between 0 and 1)")]
    InvalidConfidence(f64),

    /// Unit count must be at least one.
    #[error("Invalid unit count: {0} (must be at least 1)")]
    InvalidUnitCount(u32),

    /// Lag-1 autocorrelation is at or above 1, so the variance multiplier diverges.
    #[error("Degenerate autocorrelation: rho = {0} (must be below 1)")]
    DegenerateAutocorrelation(f64),

    /// The autocorrelation variance multiplier is negative or not finite.
    #[error("Invalid variance multiplier: {0}")]
    InvalidVarianceMultiplier(f64),

    /// Hours per working day must be finite and positive.
    #[error("Invalid hours per day: {0}")]
    InvalidHoursPerDay(f64),

    /// A derived quantity came out NaN or infinite.
    #[error("Non-finite result for {0}")]
    NonFinite(&'static str),

    /// Dataset not found in the registry.
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),
}

/// Errors for invalid samples.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    /// Fewer observations than variance and autocorrelation require.
    #[error("Sample has {len} value(s); at least {min} are required")]
    TooFewValues {
        /// Number of values supplied.
        len: usize,
        /// Minimum number of values.
        min: usize,
    },

    /// An observation is not a finite, positive number.
    #[error("Invalid observation at position {index}: {value} (must be finite and positive)")]
    InvalidObservation {
        /// Zero-based index of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A token in comma-separated text could not be parsed as a number.
    #[error("Cannot parse {token:?} at position {index} as a number")]
    InvalidNumber {
        /// Zero-based index of the offending token.
        index: usize,
        /// The offending token, trimmed.
        token: String,
    },
}
