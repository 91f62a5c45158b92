//! CLI argument parsing for walkway
//!
//! Global flags: --data, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
use parse::parse_budget;

/// Walkway - shortest walking routes across a campus
#[derive(Parser, Debug)]
#[command(name = "walkway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Campus dataset (.dot edge list); overrides `dataset` in config.toml
    #[arg(long, global = true, env = "WALKWAY_DATA")]
    pub data: Option<PathBuf>,

    /// Explicit config file (default: ~/.config/walkway/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (a level such as `debug`, or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every location on the map
    Locations,

    /// Shortest walking route between two locations
    Path {
        /// Starting location
        from: String,

        /// Destination
        to: String,
    },

    /// Every location reachable from a start within a time budget
    Reachable {
        /// Starting location
        from: String,

        /// Time budget in seconds
        #[arg(long, value_parser = parse_budget, allow_negative_numbers = true)]
        within: f64,
    },
}
