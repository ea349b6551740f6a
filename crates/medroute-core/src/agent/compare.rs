//! Run the same mission under every strategy

use std::time::Instant;

use tracing::info;

use crate::agent::report::{Comparison, ComparisonRow};
use crate::agent::DeliveryAgent;
use crate::graph::heuristic::HeuristicSet;
use crate::graph::types::Location;
use crate::graph::GraphProvider;
use crate::search::Strategy;

/// Execute `services` once per strategy, each with a fresh agent at `depot`.
///
/// A row is marked optimal when its distance equals the best distance
/// achieved by a cost-optimal strategy.
pub fn compare_strategies(
    graph: &dyn GraphProvider,
    heuristics: &HeuristicSet,
    depot: &str,
    services: &[Location],
) -> Comparison {
    let mut rows: Vec<ComparisonRow> = Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let mut agent = DeliveryAgent::new(graph, heuristics, depot);
            let start = Instant::now();
            let report = agent.execute_mission(services, strategy);
            let elapsed_secs = start.elapsed().as_secs_f64();
            info!(
                %strategy,
                distance = report.total_distance.value(),
                deliveries = report.deliveries,
                "strategy_compared"
            );
            ComparisonRow {
                strategy,
                distance: report.total_distance,
                deliveries: report.deliveries,
                nodes_explored: report.nodes_explored(),
                elapsed_secs,
                optimal: false,
            }
        })
        .collect();

    let optimal_distance = rows
        .iter()
        .filter(|row| row.strategy.is_cost_optimal())
        .map(|row| row.distance)
        .min();

    for row in &mut rows {
        row.optimal = optimal_distance == Some(row.distance);
    }

    Comparison {
        requested: services.to_vec(),
        rows,
        optimal_distance,
    }
}
