//! CLI argument parsing for hackgrade
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod commands;
pub mod format;

use std::path::PathBuf;

use clap::Parser;

pub use commands::Commands;
pub use hackgrade_core::format::OutputFormat;

/// Hackgrade - grading toolkit for hackathon prediction submissions
#[derive(Parser, Debug)]
#[command(name = "hackgrade")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. debug, hackgrade_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Grading configuration file (TOML)
    #[arg(long, global = true, env = "HACKGRADE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
