//! Statistics for the duedate due-date estimator.
//!
//! This crate provides the building blocks the estimator combines:
//!
//! - [`mean`], [`sample_variance`], [`population_variance`], [`std_dev`] - Descriptive statistics
//! - [`RunningStats`] / [`Summary`] - Single-pass accumulation of a sample
//! - [`autocorrelation`] / [`lag1_autocorrelation`] - Correlation with a lagged copy
//! - [`standard_normal_quantile`] - z-score for a confidence level
//! - [`Histogram`] - Equal-width binning

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duedate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod autocorr;
mod descriptive;
mod histogram;
mod normal;

pub use autocorr::{autocorrelation, autocorrelation_function, lag1_autocorrelation};
pub use descriptive::{RunningStats, Summary, mean, population_variance, sample_variance, std_dev};
pub use histogram::{Bin, DEFAULT_BINS, Histogram, MAX_BINS};
pub use normal::{normal_pdf, standard_normal_cdf, standard_normal_quantile};
