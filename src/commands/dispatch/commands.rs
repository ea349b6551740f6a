//! Command implementations for all medroute commands

use crate::cli::parse::{parse_location, parse_services};
use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::{compare, graph, heuristics, mission, route};
use medroute_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let workspace = ctx.load_workspace()?;

        let result = match self {
            Commands::Graph(args) => graph::execute(ctx.cli, &workspace, args.stats),
            Commands::Route(args) => {
                let from = parse_location(&args.from)?;
                let to = parse_location(&args.to)?;
                let strategy = workspace.strategy(args.strategy);
                route::execute(ctx.cli, &workspace, &from, &to, strategy)
            }
            Commands::Mission(args) => {
                let services = parse_services(&args.services)?;
                let strategy = workspace.strategy(args.strategy);
                mission::execute(ctx.cli, &workspace, &services, strategy)
            }
            Commands::Compare(args) => {
                let services = parse_services(&args.services)?;
                compare::execute(ctx.cli, &workspace, &services)
            }
            Commands::Heuristics(args) => {
                let goal = parse_location(&args.goal)?;
                heuristics::execute(ctx.cli, &workspace, &goal)
            }
        };

        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
