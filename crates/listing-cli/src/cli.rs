//! CLI argument definitions for the surgeon listing generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "surgeon-listings",
    version,
    about = "Generate per-surgeon procedure listings as PDF",
    long_about = "Merge direct cards, grouped cards and best-practice defaults into one\n\
                  procedure listing per surgeon and render each as a PDF.\n\n\
                  Without a subcommand, `generate` runs with default paths."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

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
    /// Build and write one PDF listing per surgeon (default).
    Generate(GenerateArgs),

    /// Show the reduced surgeon roster and best-practice owners.
    Roster(RosterArgs),
}

/// Where reference tables and configuration come from.
#[derive(Args, Clone, Default)]
pub struct SourceArgs {
    /// Directory holding the five reference CSV files (default: ./source).
    #[arg(long = "source-dir", value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// TOML configuration file (default: ./listings.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat best-practice owners as surgeons and list them too.
    #[arg(long = "include-best-practice")]
    pub include_best_practice: bool,
}

#[derive(Args, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output directory for listings (default: ./surgeon_listings).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Merge and report without writing PDFs.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Only generate listings for these surgeon keys (repeatable).
    #[arg(long = "surgeon", value_name = "KEY")]
    pub surgeons: Vec<String>,

    /// Also write the run summary as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Args, Clone, Default)]
pub struct RosterArgs {
    #[command(flatten)]
    pub sources: SourceArgs,
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
