//! Human-readable figures for displaying an estimate.

use serde::Serialize;

use crate::DueDateEstimate;

/// One row of the calculation breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    /// Name of the quantity.
    pub parameter: &'static str,
    /// Formatted value with unit.
    pub value: String,
}

impl BreakdownRow {
    const fn new(parameter: &'static str, value: String) -> Self {
        Self { parameter, value }
    }
}

/// Step-by-step breakdown of how the due date was reached.
#[must_use]
pub fn breakdown(estimate: &DueDateEstimate) -> Vec<BreakdownRow> {
    vec![
        BreakdownRow::new("Units needed", estimate.unit_count.to_string()),
        BreakdownRow::new("Mean inter-completion time", format_hours(estimate.mean, 2)),
        BreakdownRow::new("Standard deviation", format_hours(estimate.std_dev, 2)),
        BreakdownRow::new(
            "Autocorrelation (rho)",
            format!("{:.3}", estimate.autocorrelation),
        ),
        BreakdownRow::new(
            "Expected time (mu_b)",
            format!(
                "{} ({})",
                format_hours(estimate.scaled_mean, 1),
                format_days(estimate.average_days)
            ),
        ),
        BreakdownRow::new(
            "Std dev with autocorr (sigma_b)",
            format_hours(estimate.scaled_std_dev, 2),
        ),
        BreakdownRow::new("Z-score", format!("{:.2}", estimate.z_score)),
        BreakdownRow::new(
            "Due date",
            format!(
                "{} ({})",
                format_hours(estimate.due_date_hours, 1),
                format_days(estimate.due_date_days)
            ),
        ),
    ]
}

/// Formats days with one decimal (e.g., "43.0 days").
#[must_use]
pub fn format_days(days: f64) -> String {
    format!("{days:.1} days")
}

/// Formats hours with the given number of decimals (e.g., "972.4 hours").
#[must_use]
pub fn format_hours(hours: f64, decimals: usize) -> String {
    format!("{hours:.decimals$} hours")
}

/// Headline figures: due date, average time and safety time.
#[must_use]
pub fn headline(estimate: &DueDateEstimate) -> [(&'static str, String); 3] {
    [
        (
            "Due Date",
            format!(
                "{} ({:.0}% confidence)",
                format_days(estimate.due_date_days),
                estimate.confidence * 100.0
            ),
        ),
        (
            "Average Time",
            format!("{} (50% confidence)", format_days(estimate.average_days)),
        ),
        (
            "Safety Time",
            format!(
                "{} ({:+.1}%)",
                format_days(estimate.safety_days),
                estimate.safety_percent()
            ),
        ),
    ]
}
