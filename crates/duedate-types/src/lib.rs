//! Core types for the duedate due-date estimator.
//!
//! This crate provides the validated inputs shared by every duedate crate:
//!
//! - [`Sample`] - Ordered inter-completion times, at least two, all positive
//! - [`UnitCount`] - Number of units in an order
//! - [`ConfidenceLevel`] - Probability of meeting the due date
//! - [`DueDateError`] - Errors raised by validation and estimation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duedate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod params;
mod sample;

pub use error::{DueDateError, Result, SampleError};
pub use params::{ConfidenceLevel, UnitCount};
pub use sample::Sample;
