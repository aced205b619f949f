//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vfp",
    version,
    about = "Variant feature pipeline - score annotated variants with a trained model",
    long_about = "Turn annotated variant records into a numeric feature matrix and score\n\
                  them with a trained model, or learn the feature schema for a new model\n\
                  from a training dataset."
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
    /// Score an annotated variant file with a trained model.
    Predict(PredictArgs),

    /// Learn the feature schema for a new model from a training dataset.
    Train(TrainArgs),
}

#[derive(Parser)]
pub struct PredictArgs {
    /// Annotated variant file (tab-separated).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Trained model artifact (JSON).
    #[arg(long = "model", value_name = "PATH")]
    pub model: PathBuf,

    /// Output file for the scored variants (default: <INPUT>.scores.tsv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TrainArgs {
    /// Annotated training dataset (tab-separated).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Annotation columns to process, comma separated.
    #[arg(
        long = "features",
        value_name = "COLUMNS",
        value_delimiter = ',',
        required = true
    )]
    pub features: Vec<String>,

    /// Where to write the learned model artifact (JSON).
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Also write the transformed training matrix as a TSV.
    #[arg(long = "matrix-output", value_name = "PATH")]
    pub matrix_output: Option<PathBuf>,
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
