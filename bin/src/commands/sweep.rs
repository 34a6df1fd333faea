//! Sweep command implementation.
//!
//! This module estimates the same order at several confidence levels to show
//! how the safety time grows with the required confidence.

use crate::display::{DataArgs, Format, open_output, parse_levels};
use anyhow::{Context, Result};
use duedate_lib::prelude::*;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Estimate due dates at each confidence level in `levels` (percentages).
pub(crate) fn sweep(
    data: &DataArgs,
    boats: u32,
    levels: Option<&str>,
    config: EstimatorConfig,
    format: Format,
    output: Option<&Path>,
) -> Result<()> {
    let sample = data.resolve()?;
    let units = UnitCount::new(boats)?;
    let estimator = Estimator::new(config);

    let estimates = match levels {
        Some(levels) => {
            let levels = parse_levels(levels)?;
            if levels.is_empty() {
                anyhow::bail!("No confidence levels given");
            }
            estimator.sweep(&sample, units, &levels)
        }
        None => estimator.sweep_default(&sample, units),
    }
    .context("Failed to estimate due dates")?;
    info!(levels = estimates.len(), units = boats, "swept confidence levels");

    let mut writer = open_output(output)?;
    format.output_format().write_sweep(&estimates, &mut writer)?;
    writer.flush()?;
    Ok(())
}
