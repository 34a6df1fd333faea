//! duedate CLI - Due-date estimation for orders with autocorrelated completion times.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use duedate_lib::EstimatorConfig;
use duedate_lib::stats::MAX_BINS;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod display;

use display::{DataArgs, Format};

/// Environment variable holding a log filter directive.
const LOG_ENV: &str = "DUEDATE_LOG";

#[derive(Parser)]
#[command(name = "duedate")]
#[command(about = "Due-date estimation for orders with autocorrelated completion times", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the due date of an order
    Estimate {
        #[command(flatten)]
        data: DataArgs,

        /// Number of boats in the order
        #[arg(short, long, default_value = "25")]
        boats: u32,

        /// Confidence level in percent
        #[arg(short, long, default_value = "90")]
        confidence: f64,

        #[command(flatten)]
        model: ModelArgs,

        /// Production start date (YYYY-MM-DD) for a calendar due date
        #[arg(short, long)]
        start_date: Option<String>,

        /// Chart the fitted completion-time distribution and its confidence region
        #[arg(long)]
        distribution: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Estimate the due date at several confidence levels
    Sweep {
        #[command(flatten)]
        data: DataArgs,

        /// Number of boats in the order
        #[arg(short, long, default_value = "25")]
        boats: u32,

        /// Comma-separated confidence levels in percent (e.g., 80,90,95)
        #[arg(short, long)]
        levels: Option<String>,

        #[command(flatten)]
        model: ModelArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Describe the completion-time sample
    Sample {
        #[command(flatten)]
        data: DataArgs,

        /// Number of histogram bins
        #[arg(long, default_value = "12", value_parser = clap::value_parser!(u16).range(1..=MAX_BINS as i64))]
        bins: u16,
    },

    /// List embedded datasets
    Datasets,

    /// Prompt for inputs and re-estimate after each round
    Interactive,
}

/// Estimator settings shared by the estimating commands.
#[derive(clap::Args)]
struct ModelArgs {
    /// Ignore autocorrelation between consecutive completion times
    #[arg(long)]
    no_autocorrelation: bool,

    /// Working hours per day used to convert hours to days
    #[arg(long, default_value = "24")]
    hours_per_day: f64,
}

impl ModelArgs {
    const fn config(&self) -> EstimatorConfig {
        EstimatorConfig::new()
            .with_hours_per_day(self.hours_per_day)
            .with_autocorrelation_adjustment(!self.no_autocorrelation)
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Estimate {
            data,
            boats,
            confidence,
            model,
            start_date,
            distribution,
            format,
            output,
        } => commands::estimate::estimate(
            &data,
            boats,
            confidence,
            model.config(),
            start_date.as_deref(),
            distribution,
            format,
            output.as_deref(),
        ),
        Commands::Sweep {
            data,
            boats,
            levels,
            model,
            format,
            output,
        } => commands::sweep::sweep(
            &data,
            boats,
            levels.as_deref(),
            model.config(),
            format,
            output.as_deref(),
        ),
        Commands::Sample { data, bins } => commands::sample::describe(&data, usize::from(bins)),
        Commands::Datasets => commands::datasets::list_datasets(),
        Commands::Interactive => commands::interactive::run(),
    }
}
