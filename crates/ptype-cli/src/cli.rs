//! CLI argument definitions for ptype-shim.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ptype_calc::Number;
use ptype_infer::DEFAULT_READ_MODE;
use ptype_ingest::ReadMode;

#[derive(Parser)]
#[command(
    name = "ptype-shim",
    version,
    about = "Arithmetic helpers and CSV schema inference",
    long_about = "Arithmetic helpers and CSV schema inference.\n\n\
                  Loads named columns from a CSV file in pandas, ptype or ptype_Cat mode\n\
                  and reports the inferred type of each column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Run a calculator operation.
    Calc(CalcArgs),

    /// Load columns from a CSV file and print them.
    Load(LoadArgs),

    /// Infer and print the schema of columns from a CSV file.
    Infer(InferArgs),
}

#[derive(Args)]
pub struct CalcArgs {
    /// Interpret tan input as degrees (result rounded to an integer).
    #[arg(long = "degrees")]
    pub degrees: bool,

    /// Round division results to an integer (half to even).
    #[arg(long = "integers")]
    pub integers: bool,

    #[command(subcommand)]
    pub op: CalcOpArg,
}

#[derive(Subcommand)]
pub enum CalcOpArg {
    /// a + b
    #[command(allow_negative_numbers = true)]
    Add { a: Number, b: Number },
    /// a / b
    #[command(allow_negative_numbers = true)]
    Div { a: Number, b: Number },
    /// tan(value)
    #[command(allow_negative_numbers = true)]
    Tan { value: Number },
}

#[derive(Args)]
pub struct LoadArgs {
    /// Path to the CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Columns to load, in output order.
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub columns: Vec<String>,

    /// Read mode: pandas, ptype or ptype_Cat.
    #[arg(short, long, default_value_t = ReadMode::Typed)]
    pub mode: ReadMode,
}

#[derive(Args)]
pub struct InferArgs {
    /// Path to the CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Columns to infer, in report order.
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub columns: Vec<String>,

    /// Read mode selecting the engine: ptype or ptype_Cat.
    #[arg(short, long, default_value_t = DEFAULT_READ_MODE)]
    pub mode: ReadMode,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Most distinct values a categorical column may have.
    #[arg(long = "max-categories", value_name = "N")]
    pub max_categories: Option<usize>,

    /// Values listed per column in the table report.
    #[arg(long = "sample-limit", value_name = "N")]
    pub sample_limit: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
