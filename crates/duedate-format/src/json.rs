//! JSON output format.

use duedate_estimate::DueDateEstimate;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Standard JSON: an object for one estimate, an array for a sweep.
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL), one estimate per line.
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_value<W: Write, T: serde::Serialize + ?Sized>(
        &self,
        value: &T,
        writer: &mut W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, value)?;
        } else {
            serde_json::to_writer(&mut *writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_estimate<W: Write + Send>(
        &self,
        estimate: &DueDateEstimate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => self.write_value(estimate, &mut writer),
            JsonStyle::Ndjson => {
                serde_json::to_writer(&mut writer, estimate)?;
                writeln!(writer)?;
                Ok(())
            }
        }
    }

    fn write_sweep<W: Write + Send>(
        &self,
        estimates: &[DueDateEstimate],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => self.write_value(estimates, &mut writer)?,
            JsonStyle::Ndjson => {
                for estimate in estimates {
                    serde_json::to_writer(&mut writer, estimate)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duedate_estimate::compute_due_date;
    use std::io::Cursor;

    fn estimate(confidence: f64) -> DueDateEstimate {
        compute_due_date(&[30.0, 40.0, 35.0, 45.0, 38.0], 10, confidence).unwrap()
    }

    #[test]
    fn test_json_estimate() {
        let formatter = JsonFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter.write_estimate(&estimate(0.9), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('{'));
        assert!(result.contains("\"unit_count\":10"));
        let parsed: DueDateEstimate = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed.unit_count, 10);
    }

    #[test]
    fn test_json_sweep_is_array() {
        let formatter = JsonFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_sweep(&[estimate(0.8), estimate(0.9)], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        let parsed: Vec<DueDateEstimate> = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_sweep(&[estimate(0.8), estimate(0.9)], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
        assert_eq!(formatter.extension(), "ndjson");
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let mut output = Cursor::new(Vec::new());

        formatter.write_estimate(&estimate(0.9), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("  \"due_date_days\""));
    }
}
