//! Estimate command implementation.
//!
//! This module computes a single due date and writes it in the chosen format.

use crate::display::{DataArgs, Format, open_output, parse_date, write_distribution};
use anyhow::{Context, Result};
use chrono::NaiveTime;
use duedate_lib::prelude::*;
use duedate_lib::{DEFAULT_DISTRIBUTION_BINS, completion_distribution};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Estimate the due date for an order of `boats` units.
#[allow(clippy::too_many_arguments)]
pub(crate) fn estimate(
    data: &DataArgs,
    boats: u32,
    confidence: f64,
    config: EstimatorConfig,
    start_date: Option<&str>,
    distribution: bool,
    format: Format,
    output: Option<&Path>,
) -> Result<()> {
    let sample = data.resolve()?;
    let units = UnitCount::new(boats)?;
    let level = ConfidenceLevel::from_percent(confidence)?;
    let start = start_date.map(parse_date).transpose()?;

    let estimate = Estimator::new(config)
        .estimate(&sample, units, level)
        .context("Failed to estimate due date")?;
    info!(
        samples = sample.len(),
        units = boats,
        due_days = estimate.due_date_days,
        "estimated due date"
    );

    let mut writer = open_output(output)?;
    format.output_format().write_estimate(&estimate, &mut writer)?;

    if let Some(start) = start {
        let due = estimate
            .due_date_from(start.and_time(NaiveTime::MIN))
            .context("Due date is out of the calendar range")?;
        match format {
            Format::Text => {
                writeln!(writer)?;
                writeln!(writer, "Start:          {}", start.format("%Y-%m-%d"))?;
                writeln!(writer, "Due by:         {}", due.format("%Y-%m-%d %H:%M"))?;
            }
            _ => warn!("--start-date is only shown in text output (due by {due})"),
        }
    }

    if distribution {
        match (format, completion_distribution(&estimate, DEFAULT_DISTRIBUTION_BINS)) {
            (Format::Text, Some(bins)) => {
                writeln!(writer)?;
                write_distribution(&mut writer, &bins)?;
            }
            (Format::Text, None) => warn!("The sample has no spread; nothing to chart"),
            _ => warn!("--distribution is only shown in text output"),
        }
    }

    writer.flush()?;
    if let Some(path) = output {
        info!("Wrote estimate to {}", path.display());
    }
    Ok(())
}
