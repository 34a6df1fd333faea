//! Display utilities and shared argument handling for the duedate CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use duedate_lib::DensityBin;
use duedate_lib::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Width of the longest bar in text charts.
const BAR_WIDTH: usize = 40;

/// Output format for estimates.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the library output format for this choice.
    pub(crate) const fn output_format(self) -> OutputFormat {
        match self {
            Self::Text => OutputFormat::Text,
            Self::Csv => OutputFormat::Csv,
            Self::Json => OutputFormat::Json,
            Self::Ndjson => OutputFormat::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.output_format())
    }
}

/// Where the completion-time sample comes from.
#[derive(clap::Args)]
pub(crate) struct DataArgs {
    /// Embedded dataset identifier (see `duedate datasets`)
    #[arg(short, long, conflicts_with = "data")]
    dataset: Option<String>,

    /// Custom comma-separated inter-completion times in hours
    #[arg(long)]
    data: Option<String>,

    /// Fail on invalid custom data instead of using the default dataset
    #[arg(long)]
    strict: bool,
}

impl DataArgs {
    /// Returns the sample source selected by the flags.
    pub(crate) fn source(&self) -> SampleSource {
        match (&self.dataset, &self.data) {
            (_, Some(text)) => SampleSource::Custom(text.clone()),
            (Some(id), None) => SampleSource::Dataset(id.clone()),
            (None, None) => SampleSource::Default,
        }
    }

    /// Resolves the sample.
    ///
    /// Unknown dataset identifiers are always an error. Invalid custom data
    /// falls back to the default dataset unless `--strict` is set.
    pub(crate) fn resolve(&self) -> Result<Sample> {
        let source = self.source();
        if self.strict || matches!(source, SampleSource::Dataset(_)) {
            return source
                .resolve_strict()
                .with_context(|| format!("Failed to load sample from {source}"));
        }
        Ok(source.resolve())
    }
}

/// Opens the output destination, defaulting to stdout.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    let writer: Box<dyn Write + Send> = match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };
    Ok(writer)
}

/// Parses a date in YYYY-MM-DD form.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid date: {s}"))
}

/// Parses comma-separated confidence percentages (e.g., "80,90,95").
pub(crate) fn parse_levels(s: &str) -> Result<Vec<ConfidenceLevel>> {
    s.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| -> Result<ConfidenceLevel> {
            let percent: f64 = token
                .parse()
                .with_context(|| format!("Invalid confidence level: {token}"))?;
            Ok(ConfidenceLevel::from_percent(percent)?)
        })
        .collect()
}

/// Writes the fitted completion-time distribution as a bar chart.
///
/// Bins inside the confidence region (up to the due date) are marked `*`.
pub(crate) fn write_distribution<W: Write>(writer: &mut W, bins: &[DensityBin]) -> Result<()> {
    let max = bins.iter().map(|b| b.density).fold(0.0, f64::max);
    writeln!(writer, "Completion time distribution (normal fit, * = confidence region):")?;
    writeln!(writer, "{:>17} {:>7}", "DAYS", "P(DONE)")?;
    for bin in bins {
        let marker = if bin.within_due_date { '*' } else { ' ' };
        writeln!(
            writer,
            "{:>7.1} - {:<7.1} {:>6.1}% {marker} {}",
            bin.start_days,
            bin.end_days,
            bin.cumulative * 100.0,
            bar(bin.density, max)
        )?;
    }
    Ok(())
}

/// Renders a horizontal bar scaled so that `max` fills the chart width.
pub(crate) fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || !value.is_finite() {
        return String::new();
    }
    let len = (value / max * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64);
    "#".repeat(len as usize)
}
