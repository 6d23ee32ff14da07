//! CLI argument definitions for the moneta tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use moneta_model::ErrorPolicy;

#[derive(Parser)]
#[command(
    name = "moneta",
    version,
    about = "Normalize heterogeneous money values into (amount, currency) records",
    long_about = "Normalize textual and numeric money representations (\"£128\", \
                  \"129 EUR\", \"97GBP\", bare numbers) into canonical \
                  (amount, ISO 4217 code) records for columnar storage."
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
    /// Convert raw values into (amount, currency) records.
    Convert(ConvertArgs),

    /// List the currency symbols recognized by the built-in table.
    Symbols,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Values to convert, e.g. '£128' '129 EUR' 97GBP 131.
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

    /// Read values from a CSV file instead of the command line.
    #[arg(long = "input", value_name = "FILE", conflicts_with = "values")]
    pub input: Option<PathBuf>,

    /// Column to convert when reading from a CSV file (default: first column).
    #[arg(long = "column", value_name = "NAME", requires = "input")]
    pub column: Option<String>,

    /// ISO code applied to bare numeric values with no explicit currency.
    #[arg(long = "default-currency", value_name = "CODE")]
    pub default_currency: Option<String>,

    /// What to do when a value cannot be resolved.
    #[arg(long = "errors", value_enum, default_value = "raise")]
    pub errors: ErrorsArg,

    /// Write the converted records to a CSV file instead of printing a table.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ErrorsArg {
    /// Abort on the first unresolvable value.
    Raise,
    /// Replace unresolvable values with a missing record.
    Coerce,
    /// Give up on parsing entirely and return the input unchanged.
    Ignore,
}

impl From<ErrorsArg> for ErrorPolicy {
    fn from(arg: ErrorsArg) -> Self {
        match arg {
            ErrorsArg::Raise => Self::Raise,
            ErrorsArg::Coerce => Self::Coerce,
            ErrorsArg::Ignore => Self::Ignore,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormatArg {
    #[default]
    Pretty,
    Compact,
    Json,
}
