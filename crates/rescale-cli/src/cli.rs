//! CLI argument definitions for the rescale normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rescale",
    version,
    about = "Min-max normalize the numeric columns of a delimited dataset",
    long_about = "Linearly rescale every numeric column of a delimited dataset into [0,1],\n\
                  keeping one designated label column untouched.\n\n\
                  The output records the per-column minimum and maximum ahead of the data\n\
                  rows so values can be denormalized later."
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
    /// Normalize a dataset and write the rescaled copy.
    Normalize(NormalizeArgs),

    /// Print per-column min/max without writing anything.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Path to the delimited input dataset.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path (default: <INPUT>-normalized with the same extension).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field delimiter for input and output.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ";")]
    pub delimiter: String,

    /// Column passed through without rescaling.
    #[arg(
        long = "exclude",
        value_name = "COLUMN",
        default_value = "quality"
    )]
    pub exclude: String,

    /// Policy for columns whose minimum equals their maximum.
    ///
    /// The normalization formula divides by the column range, so a
    /// constant column must either abort the run or be written as zeros.
    #[arg(long = "constant-columns", value_enum, default_value = "error")]
    pub constant_columns: ConstantColumnArg,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the delimited input dataset.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Field delimiter.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ";")]
    pub delimiter: String,
}

/// Zero-range column policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ConstantColumnArg {
    /// Abort the run, naming the column.
    Error,
    /// Write 0 for every value of the column.
    Zero,
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
