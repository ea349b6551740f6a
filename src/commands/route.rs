//! `medroute route` command - one search between two locations

use crate::cli::Cli;
use crate::commands::dispatch::Workspace;
use crate::output_by_format_result;
use medroute_core::error::Result;
use medroute_core::format::join_path;
use medroute_core::graph::Location;
use medroute_core::search::{SearchEngine, Strategy};

/// Execute the route command
pub fn execute(
    cli: &Cli,
    workspace: &Workspace,
    from: &Location,
    to: &Location,
    strategy: Strategy,
) -> Result<()> {
    workspace.require_location(from)?;
    workspace.require_location(to)?;

    let mut engine = SearchEngine::new(&workspace.graph);
    let heuristic = workspace.heuristics.for_goal(to.as_str());
    let result = engine.search(strategy, from.as_str(), to.as_str(), Some(heuristic));
    let nodes_explored = engine.nodes_explored();

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "strategy": strategy,
                "found": result.is_some(),
                "path": result.as_ref().map(|r| &r.path),
                "cost": result.as_ref().map(|r| r.cost),
                "nodes_explored": nodes_explored,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), medroute_core::error::RouteError>(())
        },
        human => {
            if !cli.quiet {
                println!("{}", strategy.title());
            }
            match &result {
                Some(route) => {
                    println!("Path: {}", join_path(&route.path));
                    println!("Cost: {}", route.cost);
                }
                None => println!("No path found from {} to {}", from, to),
            }
            if !cli.quiet {
                println!("Nodes explored: {}", nodes_explored);
            }
        }
    )?;

    Ok(())
}
