//! CSV output format.

use duedate_estimate::DueDateEstimate;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Column names, in output order.
const COLUMNS: [&str; 15] = [
    "sample_size",
    "unit_count",
    "confidence",
    "mean",
    "variance",
    "std_dev",
    "autocorrelation",
    "variance_multiplier",
    "scaled_mean",
    "scaled_std_dev",
    "z_score",
    "due_date_hours",
    "due_date_days",
    "average_days",
    "safety_days",
];

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    fn write_header<W: Write>(&self, writer: &mut W) -> Result<(), FormatError> {
        if self.include_header {
            writeln!(writer, "{}", COLUMNS.join(&self.delimiter.to_string()))?;
        }
        Ok(())
    }

    fn write_row<W: Write>(&self, e: &DueDateEstimate, writer: &mut W) -> Result<(), FormatError> {
        let d = self.delimiter;
        writeln!(
            writer,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
            e.sample_size,
            e.unit_count,
            e.confidence,
            e.mean,
            e.variance,
            e.std_dev,
            e.autocorrelation,
            e.variance_multiplier,
            e.scaled_mean,
            e.scaled_std_dev,
            e.z_score,
            e.due_date_hours,
            e.due_date_days,
            e.average_days,
            e.safety_days,
        )?;
        Ok(())
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_estimate<W: Write + Send>(
        &self,
        estimate: &DueDateEstimate,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_sweep(std::slice::from_ref(estimate), writer)
    }

    fn write_sweep<W: Write + Send>(
        &self,
        estimates: &[DueDateEstimate],
        mut writer: W,
    ) -> Result<(), FormatError> {
        self.write_header(&mut writer)?;
        for estimate in estimates {
            self.write_row(estimate, &mut writer)?;
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
