//! Interactive command implementation.
//!
//! Prompts for the data source, order size and confidence level, then prints
//! a fresh estimate. Each round is computed from that round's answers alone.

use anyhow::{Context, Result};
use duedate_lib::prelude::*;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, InquireError, Select, Text};
use std::io;
use std::ops::RangeInclusive;

/// Allowed number of boats per order.
const BOATS: RangeInclusive<u32> = 1..=50;

/// Allowed confidence levels in percent.
const CONFIDENCE: RangeInclusive<f64> = 50.0..=99.0;

const CUSTOM_DATA: &str = "Custom data";

/// Answers from one prompt round, reused as the next round's defaults.
struct Answers {
    source: String,
    custom_text: String,
    boats: u32,
    confidence: f64,
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            source: String::new(),
            custom_text: DatasetRegistry::global().default_sample().to_string(),
            boats: 25,
            confidence: 90.0,
        }
    }
}

/// Run the prompt loop until the user declines another round or cancels.
pub(crate) fn run() -> Result<()> {
    let mut answers = Answers::default();

    loop {
        match round(&mut answers) {
            Ok(true) => continue,
            Ok(false) => return Ok(()),
            Err(e) if is_cancelled(&e) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}

fn is_cancelled(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

/// Runs one prompt round and returns whether to continue.
fn round(answers: &mut Answers) -> Result<bool> {
    let registry = DatasetRegistry::global();
    let mut options: Vec<String> = registry
        .all()
        .map(|d| format!("{} ({})", d.name(), d.id()))
        .collect();
    options.push(CUSTOM_DATA.to_string());
    let cursor = options
        .iter()
        .position(|o| *o == answers.source)
        .unwrap_or(0);

    answers.source = Select::new("Data source:", options)
        .with_starting_cursor(cursor)
        .prompt()?;

    let source = if answers.source == CUSTOM_DATA {
        answers.custom_text = Text::new("Inter-completion times (comma-separated hours):")
            .with_initial_value(&answers.custom_text)
            .prompt()?;
        SampleSource::Custom(answers.custom_text.clone())
    } else {
        let id = answers
            .source
            .rsplit_once('(')
            .and_then(|(_, rest)| rest.strip_suffix(')'))
            .context("Failed to parse dataset selection")?;
        SampleSource::Dataset(id.to_string())
    };

    answers.boats = CustomType::<u32>::new("Number of boats:")
        .with_default(answers.boats)
        .with_error_message("Please type a whole number")
        .with_validator(|boats: &u32| -> Result<Validation, CustomUserError> {
            Ok(if BOATS.contains(boats) {
                Validation::Valid
            } else {
                Validation::Invalid(
                    format!("Choose between {} and {}", BOATS.start(), BOATS.end()).into(),
                )
            })
        })
        .prompt()?;

    answers.confidence = CustomType::<f64>::new("Confidence level (%):")
        .with_default(answers.confidence)
        .with_error_message("Please type a number")
        .with_validator(|percent: &f64| -> Result<Validation, CustomUserError> {
            Ok(if CONFIDENCE.contains(percent) {
                Validation::Valid
            } else {
                Validation::Invalid(
                    format!("Choose between {} and {}", CONFIDENCE.start(), CONFIDENCE.end())
                        .into(),
                )
            })
        })
        .prompt()?;

    let sample = source.resolve();
    let estimate = Estimator::global().estimate(
        &sample,
        UnitCount::new(answers.boats)?,
        ConfidenceLevel::from_percent(answers.confidence)?,
    );

    println!();
    match estimate {
        Ok(estimate) => TextFormatter::new().write_estimate(&estimate, io::stdout())?,
        Err(e) => println!("Cannot estimate a due date: {e}"),
    }
    println!();

    Ok(Confirm::new("Run another estimate?")
        .with_default(true)
        .prompt()?)
}
