//! Output formatters for duedate estimates.
//!
//! This crate provides formatters for writing due-date estimates and
//! confidence sweeps to various output formats:
//!
//! - [`TextFormatter`] - Human-readable headline, breakdown and interpretation
//! - [`CsvFormatter`] - CSV or TSV format
//! - [`JsonFormatter`] - JSON or NDJSON format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duedate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod text;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use text::TextFormatter;
