//! Plain text output format.

use duedate_estimate::{DueDateEstimate, breakdown, format_days, headline, interpretation};
use std::io::Write;

use crate::{FormatError, Formatter};

/// Human-readable text formatter.
///
/// Single estimates render as headline figures followed by the calculation
/// breakdown. Sweeps render as one table row per confidence level.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Whether to append the interpretation paragraph.
    interpretation: bool,
}

impl TextFormatter {
    /// Creates a new text formatter that includes the interpretation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interpretation: true,
        }
    }

    /// Sets whether to append the interpretation paragraph.
    #[must_use]
    pub const fn with_interpretation(mut self, include: bool) -> Self {
        self.interpretation = include;
        self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn write_estimate<W: Write + Send>(
        &self,
        estimate: &DueDateEstimate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        for (label, value) in headline(estimate) {
            writeln!(writer, "{label:<14} {value}")?;
        }
        writeln!(writer)?;

        let rows = breakdown(estimate);
        let width = rows.iter().map(|r| r.parameter.len()).max().unwrap_or(0);
        writeln!(writer, "{:<width$}  VALUE", "PARAMETER")?;
        writeln!(writer, "{}", "-".repeat(width + 24))?;
        for row in &rows {
            writeln!(writer, "{:<width$}  {}", row.parameter, row.value)?;
        }

        if self.interpretation {
            writeln!(writer)?;
            writeln!(writer, "{}", interpretation(estimate))?;
        }
        Ok(())
    }

    fn write_sweep<W: Write + Send>(
        &self,
        estimates: &[DueDateEstimate],
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(
            writer,
            "{:<12} {:>8} {:>14} {:>14} {:>10}",
            "CONFIDENCE", "Z", "DUE", "SAFETY", "SAFETY %"
        )?;
        writeln!(writer, "{}", "-".repeat(62))?;
        for e in estimates {
            writeln!(
                writer,
                "{:<12} {:>8.3} {:>14} {:>14} {:>9.1}%",
                format!("{:.1}%", e.confidence * 100.0),
                e.z_score,
                format_days(e.due_date_days),
                format_days(e.safety_days),
                e.safety_percent(),
            )?;
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
