//! Sample command implementation.
//!
//! This module describes the resolved completion-time sample: summary
//! statistics, autocorrelations, a histogram and the series in order.

use crate::display::{DataArgs, bar};
use anyhow::{Context, Result};
use duedate_lib::AutocorrelationStrength;
use duedate_lib::stats::{Histogram, Summary, autocorrelation_function};

/// Number of lags listed in the autocorrelation table.
const MAX_LAG: usize = 5;

/// Describe the sample selected by `data`.
pub(crate) fn describe(data: &DataArgs, bins: usize) -> Result<()> {
    let sample = data.resolve()?;
    let values = sample.values();
    let summary = Summary::of(values).context("Sample is too small to summarize")?;

    println!("Source:        {}", data.source());
    println!("Observations:  {}", summary.count);
    println!("Mean:          {:.2} hours", summary.mean);
    println!("Std deviation: {:.2} hours", summary.std_dev);
    println!("Variance:      {:.2} hours^2", summary.variance);
    println!("Range:         {:.1} - {:.1} hours", summary.min, summary.max);
    if let Some(cv) = summary.coefficient_of_variation() {
        println!("CV:            {:.1}%", cv * 100.0);
    }

    println!("\nAutocorrelation:");
    println!("{:<6} {:>8}  STRENGTH", "LAG", "RHO");
    println!("{}", "-".repeat(30));
    for (i, rho) in autocorrelation_function(values, MAX_LAG).into_iter().enumerate() {
        match rho {
            Some(rho) => println!(
                "{:<6} {:>8.3}  {}",
                i + 1,
                rho,
                AutocorrelationStrength::from_rho(rho)
            ),
            None => println!("{:<6} {:>8}  -", i + 1, "n/a"),
        }
    }

    if let Some(histogram) = Histogram::from_data(values, bins) {
        println!("\nHistogram ({} bins, {:.2} hours wide):", bins, histogram.bin_width());
        let max = histogram.max_count() as f64;
        for bin in histogram.bins() {
            println!(
                "{:>7.1} - {:<7.1} {:>3} {}",
                bin.start,
                bin.end,
                bin.count,
                bar(bin.count as f64, max)
            );
        }
    }

    println!("\nSeries:");
    println!("{:<6} {:>8}", "UNIT", "HOURS");
    println!("{}", "-".repeat(15));
    for (i, value) in values.iter().enumerate() {
        println!("{:<6} {:>8.1} {}", i + 1, value, bar(*value, summary.max));
    }

    Ok(())
}
