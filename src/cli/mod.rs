//! CLI argument parsing for medroute
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CompareArgs, GraphArgs, HeuristicsArgs, MissionArgs, RouteArgs};
pub use medroute_core::format::OutputFormat;

/// Medroute - plan medication deliveries across hospital services
#[derive(Parser, Debug)]
#[command(name = "medroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Mission configuration file (TOML)
    #[arg(long, global = true, env = "MEDROUTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, or a full directive like medroute_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the layout: locations, neighbors and descriptions
    Graph(GraphArgs),

    /// Find a single route between two locations
    Route(RouteArgs),

    /// Deliver to a list of services and return to the depot
    Mission(MissionArgs),

    /// Run the same mission with every strategy
    Compare(CompareArgs),

    /// Audit a goal's heuristic estimates against true distances
    Heuristics(HeuristicsArgs),
}
