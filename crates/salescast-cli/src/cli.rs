//! CLI argument definitions for salescast.
//!
//! The CLI is the presentation shell over two independent pipelines: the
//! forecast requestor and the sentiment classifier.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `forecast` | Serve precomputed estimates for comma-separated dates |
//! | `sentiment` | Classify the polarity of free text |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--model` | `model.json` | Path to the persisted model file |
//! | `--format` | `table` | Output format (table, json, ndjson) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! # Forecast specific dates; bare years expand to January 1st
//! salescast forecast "2023-01-01, 2023-01-02, 2024"
//!
//! # Classify a piece of text, machine-readable output
//! salescast sentiment "sales were great this quarter" --format json --pretty
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// salescast - serve sales forecasts and classify text sentiment.
///
/// Forecasts come from a pre-fitted model loaded from disk at startup;
/// sentiment comes from a built-in weighted lexicon.
#[derive(Debug, Parser)]
#[command(
    name = "salescast",
    author,
    version,
    about = "Sales forecast serving and sentiment analysis CLI"
)]
pub struct Cli {
    /// Path to the persisted forecasting model.
    ///
    /// The file is read once at startup; a missing or malformed file is a
    /// fatal error for every command, including `sentiment`.
    #[arg(long, global = true, default_value = "model.json")]
    pub model: PathBuf,

    /// Output format for results.
    ///
    /// - table: human-readable table, chart, and color-coded label (default)
    /// - json: single JSON envelope
    /// - ndjson: one JSON envelope per line
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table, chart, and color-coded sentiment label.
    Table,
    /// Single JSON envelope.
    Json,
    /// Newline-delimited JSON (one envelope per line).
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve forecast estimates for the requested dates.
    ///
    /// Dates are comma-separated `YYYY-MM-DD` strings. A token of exactly
    /// four digits is shorthand for January 1st of that year. One malformed
    /// token rejects the entire request; empty input is a no-op.
    ///
    /// # Examples
    ///
    ///   salescast forecast "2023-01-01, 2023-01-02"
    ///   salescast forecast "2023"
    Forecast(ForecastArgs),

    /// Classify the polarity of a piece of text.
    ///
    /// Prints a positive/negative/neutral label with the underlying score
    /// in [-1.0, 1.0]. Empty text produces no classification.
    ///
    /// # Examples
    ///
    ///   salescast sentiment "what a wonderful quarter"
    Sentiment(SentimentArgs),
}

/// Arguments for the `forecast` command.
#[derive(Debug, Args)]
pub struct ForecastArgs {
    /// Comma-separated dates to predict (e.g. '2023-01-01, 2023-01-02').
    pub dates: String,
}

/// Arguments for the `sentiment` command.
#[derive(Debug, Args)]
pub struct SentimentArgs {
    /// Text to analyze.
    pub text: String,
}
