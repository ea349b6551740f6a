//! `medroute compare` command - every strategy on the same mission

use crate::cli::Cli;
use crate::commands::dispatch::Workspace;
use crate::output_by_format_result;
use medroute_core::agent::{compare_strategies, Comparison};
use medroute_core::error::Result;
use medroute_core::format::rule;
use medroute_core::graph::Location;

const WIDTH: usize = 78;

/// Execute the compare command
pub fn execute(cli: &Cli, workspace: &Workspace, services: &[Location]) -> Result<()> {
    let comparison = compare_strategies(
        &workspace.graph,
        &workspace.heuristics,
        workspace.config.depot.as_str(),
        services,
    );

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
            Ok::<(), medroute_core::error::RouteError>(())
        },
        human => {
            print_table(cli, &comparison);
        }
    )?;

    Ok(())
}

fn print_table(cli: &Cli, comparison: &Comparison) {
    if !cli.quiet {
        println!("{}", rule(WIDTH));
        println!("STRATEGY COMPARISON");
        println!("{}", rule(WIDTH));
    }
    println!(
        "{:<28} {:>8} {:>10} {:>8} {:>12} {:>8}",
        "Strategy", "Distance", "Deliveries", "Nodes", "Time (s)", "Optimal"
    );
    println!("{}", "-".repeat(WIDTH));
    for row in &comparison.rows {
        println!(
            "{:<28} {:>8} {:>10} {:>8} {:>12.6} {:>8}",
            row.strategy.title(),
            row.distance.to_string(),
            format!("{}/{}", row.deliveries, comparison.requested.len()),
            row.nodes_explored,
            row.elapsed_secs,
            if row.optimal { "yes" } else { "no" }
        );
    }
    if let Some(best) = comparison.optimal_distance {
        println!();
        println!("Optimal distance: {}", best);
    }
}
