use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::scenario::ScenarioId;
use crate::services::estimate_output::OutputFormat;

#[derive(Parser)]
#[command(name = "visa-estimates", author, version, about)]
pub struct CliArgs {
    /// Optional settings YAML (log level, default scenario, chart size)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate cost and timeline from a questionnaire answers YAML
    Estimate {
        /// Answers YAML file
        #[arg(short, long)]
        input: String,
        /// Output file for the estimate
        #[arg(short, long)]
        output: String,
        /// Scenario to project (defaults to the configured scenario)
        #[arg(short, long, value_enum)]
        scenario: Option<ScenarioId>,
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long, value_parser = parse_date)]
        reference_date: Option<NaiveDate>,
        /// Serialization format of the output file
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Render the phase timeline as a Gantt PNG chart
    PlotTimeline {
        /// Answers YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Scenario to project (defaults to the configured scenario)
        #[arg(short, long, value_enum)]
        scenario: Option<ScenarioId>,
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long, value_parser = parse_date)]
        reference_date: Option<NaiveDate>,
    },
    /// Render the cost breakdown and market comparison as a PNG chart
    PlotCosts {
        /// Answers YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Compare total time and cost across all three scenarios
    Compare {
        /// Answers YAML file
        #[arg(short, long)]
        input: String,
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long, value_parser = parse_date)]
        reference_date: Option<NaiveDate>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{value}' (expected YYYY-MM-DD)"))
}

pub fn reference_date_or_today(reference_date: Option<NaiveDate>) -> NaiveDate {
    reference_date.unwrap_or_else(|| Local::now().date_naive())
}
