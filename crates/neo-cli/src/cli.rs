//! CLI argument definitions for the NEO uNID Processor.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "neo-unid",
    version,
    about = "NEO uNID Processor - Convert raw ID spreadsheets to weekly uNID reports",
    long_about = "Read the first column of an ID spreadsheet, validate and convert each\n\
                  8-digit ID to uNID form, and write the weekly primary report plus an\n\
                  error report for rejected rows.\n\n\
                  Supports .xlsx and .csv inputs; outputs are named after the most\n\
                  recent Monday (NEO{MMDDYY}.xlsx)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process one ID spreadsheet and write the weekly reports.
    Process(ProcessArgs),

    /// List the validation rules applied to each raw ID.
    Rules,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the input spreadsheet (.xlsx or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for the reports (default: the input's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Pin the week anchor date instead of using today.
    #[arg(long = "as-of", value_name = "YYYY-MM-DD", value_parser = parse_as_of)]
    pub as_of: Option<NaiveDate>,

    /// Validate and report counts without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the run summary as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

fn parse_as_of(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|error| error.to_string())
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
