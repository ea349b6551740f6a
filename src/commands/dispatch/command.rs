//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use medroute_core::config::MissionConfig;
use medroute_core::error::{Result, RouteError};
use medroute_core::graph::{HeuristicSet, Location, WeightedGraph};
use medroute_core::search::Strategy;

use super::macros::trace_command;

/// Configuration resolved into the graph and estimates it describes
pub struct Workspace {
    pub config: MissionConfig,
    pub graph: WeightedGraph,
    pub heuristics: HeuristicSet,
}

impl Workspace {
    /// Strategy from the command line, else the configured default
    pub fn strategy(&self, requested: Option<Strategy>) -> Strategy {
        requested.unwrap_or(self.config.strategy)
    }

    /// Fail with `UnknownLocation` unless `location` is in the graph
    pub fn require_location(&self, location: &Location) -> Result<()> {
        if self.graph.contains(location.as_str()) {
            Ok(())
        } else {
            Err(RouteError::unknown_location(location.as_str()))
        }
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Discover and validate the configuration, then build the graph
    pub fn load_workspace(&self) -> Result<Workspace> {
        let config = MissionConfig::discover(self.cli.config.as_deref())?;
        config.validate()?;
        let graph = config.build_graph()?;
        let heuristics = config.build_heuristics();
        trace_command!(self.cli, self.start, "load_workspace");
        Ok(Workspace {
            config,
            graph,
            heuristics,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Banner shown when no subcommand is provided
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("medroute {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Plan medication deliveries between hospital services.");
        println!();
        println!("Run `medroute --help` for usage information.");
        Ok(())
    }
}
