//! `medroute graph` command - print the layout

use crate::cli::Cli;
use crate::commands::dispatch::Workspace;
use crate::output_by_format_result;
use medroute_core::error::Result;
use medroute_core::format::rule;
use medroute_core::graph::{Distance, GraphProvider, GraphStatistics, Location};

const WIDTH: usize = 60;

/// Neighbors of `location`, closest first; ties keep layout order
fn sorted_neighbors(workspace: &Workspace, location: &Location) -> Vec<(Location, Distance)> {
    let mut neighbors = workspace.graph.neighbors(location.as_str());
    neighbors.sort_by_key(|(_, distance)| *distance);
    neighbors
}

/// Execute the graph command
pub fn execute(cli: &Cli, workspace: &Workspace, stats: bool) -> Result<()> {
    let graph = &workspace.graph;
    let statistics = stats.then(|| graph.statistics());

    output_by_format_result!(cli.format,
        json => {
            let locations: Vec<_> = graph
                .locations()
                .iter()
                .map(|location| {
                    let neighbors: Vec<_> = sorted_neighbors(workspace, location)
                        .into_iter()
                        .map(|(to, distance)| serde_json::json!({ "to": to, "distance": distance }))
                        .collect();
                    serde_json::json!({
                        "name": location,
                        "description": graph.describe(location.as_str()),
                        "neighbors": neighbors,
                    })
                })
                .collect();

            let mut output = serde_json::json!({
                "depot": workspace.config.depot,
                "locations": locations,
            });
            if let Some(statistics) = &statistics {
                output["statistics"] = serde_json::to_value(statistics)?;
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), medroute_core::error::RouteError>(())
        },
        human => {
            if !cli.quiet {
                println!("{}", rule(WIDTH));
                println!(
                    "LAYOUT ({} locations, depot {})",
                    graph.locations().len(),
                    workspace.config.depot
                );
                println!("{}", rule(WIDTH));
            }
            for location in graph.locations() {
                println!();
                match graph.describe(location.as_str()) {
                    Some(text) => println!("{}: {}", location, text),
                    None => println!("{}", location),
                }
                for (to, distance) in sorted_neighbors(workspace, location) {
                    println!("  -> {} ({})", to, distance);
                }
            }
            if let Some(statistics) = &statistics {
                println!();
                print_statistics(statistics);
            }
        }
    )?;

    Ok(())
}

fn print_statistics(statistics: &GraphStatistics) {
    let show = |d: Option<Distance>| d.map_or_else(|| "-".to_string(), |d| d.to_string());
    println!("Statistics");
    println!("  Locations:     {}", statistics.nodes);
    println!("  Connections:   {}", statistics.edges);
    println!("  Shortest edge: {}", show(statistics.min_distance));
    println!("  Longest edge:  {}", show(statistics.max_distance));
    println!("  Average edge:  {:.2}", statistics.avg_distance);
}
