//! Mission and comparison reports

use serde::Serialize;

use crate::graph::types::{Distance, Location};
use crate::search::{SearchResult, Strategy};

/// One planned leg of a mission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    pub target: Location,
    /// `None` when the target could not be reached
    pub route: Option<SearchResult>,
    pub delivered: bool,
}

impl Leg {
    pub fn reached(&self) -> bool {
        self.route.is_some()
    }
}

/// Outcome of `DeliveryAgent::execute_mission`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissionReport {
    pub strategy: Strategy,
    pub depot: Location,
    pub requested: Vec<Location>,
    pub legs: Vec<Leg>,
    pub return_leg: Option<SearchResult>,
    pub deliveries: usize,
    pub delivered: Vec<Location>,
    pub unreachable: Vec<Location>,
    pub total_distance: Distance,
    pub final_position: Location,
}

impl MissionReport {
    /// Frontier pops summed over every leg, return included
    pub fn nodes_explored(&self) -> usize {
        self.legs
            .iter()
            .filter_map(|leg| leg.route.as_ref())
            .chain(self.return_leg.as_ref())
            .map(|route| route.nodes_explored)
            .sum()
    }

    pub fn returned_to_depot(&self) -> bool {
        self.final_position == self.depot
    }
}

/// One strategy's row in a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub strategy: Strategy,
    pub distance: Distance,
    pub deliveries: usize,
    pub nodes_explored: usize,
    /// Wall-clock seconds for the whole mission
    pub elapsed_secs: f64,
    pub optimal: bool,
}

/// All four strategies run on the same request list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub requested: Vec<Location>,
    pub rows: Vec<ComparisonRow>,
    /// Best distance among the cost-optimal strategies
    pub optimal_distance: Option<Distance>,
}

impl Comparison {
    pub fn row(&self, strategy: Strategy) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.strategy == strategy)
    }
}
