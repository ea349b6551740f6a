//! `medroute mission` command - deliver to a list of services

use crate::cli::Cli;
use crate::commands::dispatch::Workspace;
use crate::output_by_format_result;
use medroute_core::agent::{DeliveryAgent, MissionReport};
use medroute_core::error::Result;
use medroute_core::format::{join_path, rule};
use medroute_core::graph::Location;
use medroute_core::search::Strategy;
use tracing::warn;

const WIDTH: usize = 60;

/// Execute the mission command
pub fn execute(
    cli: &Cli,
    workspace: &Workspace,
    services: &[Location],
    strategy: Strategy,
) -> Result<()> {
    // Unknown services are not fatal; the agent reports them unreachable.
    for service in services {
        if !workspace.graph.contains(service.as_str()) {
            warn!(service = %service, "unknown_service");
        }
    }

    let mut agent = DeliveryAgent::new(
        &workspace.graph,
        &workspace.heuristics,
        workspace.config.depot.as_str(),
    );
    let report = agent.execute_mission(services, strategy);

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok::<(), medroute_core::error::RouteError>(())
        },
        human => {
            print_report(cli, &report);
        }
    )?;

    Ok(())
}

fn print_report(cli: &Cli, report: &MissionReport) {
    if !cli.quiet {
        println!("{}", rule(WIDTH));
        println!("MISSION - {}", report.strategy.title());
        println!("{}", rule(WIDTH));
        println!("Depot: {}", report.depot);
        println!("Requests: {}", join_requests(&report.requested));
        println!();
    }

    for (index, leg) in report.legs.iter().enumerate() {
        match &leg.route {
            Some(route) => {
                let status = if leg.delivered { "delivered" } else { "already served" };
                println!(
                    "[{}] {}: {} ({}) {}",
                    index + 1,
                    leg.target,
                    join_path(&route.path),
                    route.cost,
                    status
                );
            }
            None => println!("[{}] {}: unreachable", index + 1, leg.target),
        }
    }

    match &report.return_leg {
        Some(route) => println!("Return: {} ({})", join_path(&route.path), route.cost),
        None if !report.returned_to_depot() => {
            println!("Return: no path back to {}", report.depot)
        }
        None => {}
    }

    println!();
    println!(
        "Deliveries: {}/{}",
        report.deliveries,
        report.requested.len()
    );
    println!("Total distance: {}", report.total_distance);
    if !cli.quiet {
        println!("Nodes explored: {}", report.nodes_explored());
        println!("Final position: {}", report.final_position);
    }
}

fn join_requests(services: &[Location]) -> String {
    services
        .iter()
        .map(Location::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
