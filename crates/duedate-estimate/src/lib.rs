//! Due-date estimation for the duedate teaching tool.
//!
//! This crate turns a sample of inter-completion times into a due date for
//! an order, inflating the variance for lag-1 autocorrelation:
//!
//! - [`Estimator`] - Computes estimates with an [`EstimatorConfig`]
//! - [`compute_due_date`] - One-call estimate from raw inputs
//! - [`DueDateEstimate`] - Estimated quantities in hours and days
//! - [`SampleStatistics`] - Order-independent statistics of a sample
//! - [`AutocorrelationStrength`] / [`interpretation`] - Plain-language reading
//! - [`breakdown`] / [`headline`] - Formatted figures for display
//! - [`completion_distribution`] - Fitted-normal confidence region

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duedate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod distribution;
mod estimator;
mod interpret;
mod report;

pub use distribution::{
    DEFAULT_DISTRIBUTION_BINS, DISTRIBUTION_SPAN, DensityBin, completion_distribution,
};
pub use estimator::{
    AUTOCORRELATION_TOLERANCE, DEFAULT_HOURS_PER_DAY, DEFAULT_SWEEP_LEVELS, DueDateEstimate,
    Estimator, EstimatorConfig, SampleStatistics, compute_due_date, variance_multiplier,
};
pub use interpret::{
    AutocorrelationStrength, MODERATE_AUTOCORRELATION, WEAK_AUTOCORRELATION, interpretation,
};
pub use report::{BreakdownRow, breakdown, format_days, format_hours, headline};
