//! `medroute heuristics` command - audit a goal's estimate table

use crate::cli::Cli;
use crate::commands::dispatch::Workspace;
use crate::output_by_format_result;
use medroute_core::error::Result;
use medroute_core::graph::{audit, Location};

/// Execute the heuristics command
pub fn execute(cli: &Cli, workspace: &Workspace, goal: &Location) -> Result<()> {
    workspace.require_location(goal)?;

    let table = workspace.heuristics.for_goal(goal.as_str());
    let entries = audit(&workspace.graph, goal.as_str(), table);
    let overestimates: Vec<_> = entries.iter().filter(|e| e.overestimates).collect();
    let admissible = overestimates.is_empty();

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "goal": goal,
                "has_table": workspace.heuristics.has_goal(goal.as_str()),
                "admissible": admissible,
                "entries": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), medroute_core::error::RouteError>(())
        },
        human => {
            if entries.is_empty() {
                println!("No estimates for {}; A* searches for it behave like UCS", goal);
                return Ok(());
            }
            if !cli.quiet {
                println!("Estimates toward {}", goal);
                println!("{:<16} {:>8} {:>8}", "Location", "Estimate", "Actual");
            }
            for entry in &entries {
                let actual = entry
                    .actual
                    .map_or_else(|| "-".to_string(), |d| d.to_string());
                let flag = if entry.overestimates { "  OVERESTIMATES" } else { "" };
                println!(
                    "{:<16} {:>8} {:>8}{}",
                    entry.location.as_str(),
                    entry.estimate.to_string(),
                    actual,
                    flag
                );
            }
            println!();
            if admissible {
                println!("Admissible: A* routes toward {} are optimal", goal);
            } else {
                println!(
                    "Not admissible: {} estimate(s) exceed the true distance",
                    overestimates.len()
                );
            }
        }
    )?;

    Ok(())
}
