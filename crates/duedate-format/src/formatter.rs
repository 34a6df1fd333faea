//! Output format abstraction.

use duedate_estimate::DueDateEstimate;
use std::io::Write;
use thiserror::Error;

use crate::{CsvFormatter, JsonFormatter, TextFormatter};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// CSV format.
    Csv,
    /// JSON format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Text, Self::Csv, Self::Json, Self::Ndjson]
    }

    /// Writes a single estimate with this format's default formatter.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_estimate<W: Write + Send>(
        &self,
        estimate: &DueDateEstimate,
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Text => TextFormatter::new().write_estimate(estimate, writer),
            Self::Csv => CsvFormatter::new().write_estimate(estimate, writer),
            Self::Json => JsonFormatter::new()
                .with_pretty(true)
                .write_estimate(estimate, writer),
            Self::Ndjson => JsonFormatter::ndjson().write_estimate(estimate, writer),
        }
    }

    /// Writes a confidence sweep with this format's default formatter.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_sweep<W: Write + Send>(
        &self,
        estimates: &[DueDateEstimate],
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Text => TextFormatter::new().write_sweep(estimates, writer),
            Self::Csv => CsvFormatter::new().write_sweep(estimates, writer),
            Self::Json => JsonFormatter::new()
                .with_pretty(true)
                .write_sweep(estimates, writer),
            Self::Ndjson => JsonFormatter::ndjson().write_sweep(estimates, writer),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            other => other.extension(),
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes a single estimate to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_estimate<W: Write + Send>(
        &self,
        estimate: &DueDateEstimate,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes estimates of the same order at several confidence levels.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_sweep<W: Write + Send>(
        &self,
        estimates: &[DueDateEstimate],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
