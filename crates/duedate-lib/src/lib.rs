//! Due-date estimation for orders with autocorrelated completion times.
//!
//! This is a facade crate that re-exports functionality from the duedate
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use duedate_lib::prelude::*;
//!
//! let sample: Sample = "30, 40, 35, 45, 38".parse()?;
//! let estimate = Estimator::default().estimate(
//!     &sample,
//!     UnitCount::new(10)?,
//!     ConfidenceLevel::default(),
//! )?;
//! println!("{}", interpretation(&estimate));
//! # Ok::<(), DueDateError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duedate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use duedate_types::*;

// Re-export statistics
pub use duedate_stats as stats;

// Re-export estimation
pub use duedate_estimate::{
    AUTOCORRELATION_TOLERANCE, AutocorrelationStrength, BreakdownRow, DEFAULT_DISTRIBUTION_BINS,
    DEFAULT_HOURS_PER_DAY, DEFAULT_SWEEP_LEVELS, DISTRIBUTION_SPAN, DensityBin, DueDateEstimate,
    Estimator, EstimatorConfig, SampleStatistics, breakdown, completion_distribution,
    compute_due_date, format_days, format_hours, headline, interpretation, variance_multiplier,
};

// Re-export datasets
#[cfg(feature = "datasets")]
pub use duedate_datasets::{DEFAULT_DATASET_ID, Dataset, DatasetRegistry, SampleSource};

// Re-export formatters
#[cfg(feature = "format")]
pub use duedate_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, TextFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use duedate_lib::prelude::*;
/// ```
pub mod prelude {
    pub use duedate_types::{
        ConfidenceLevel, DueDateError, Result, Sample, SampleError, UnitCount,
    };

    pub use duedate_estimate::{
        DueDateEstimate, Estimator, EstimatorConfig, compute_due_date, interpretation,
    };

    #[cfg(feature = "datasets")]
    pub use duedate_datasets::{DatasetRegistry, SampleSource};

    #[cfg(feature = "format")]
    pub use duedate_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat, TextFormatter};
}
