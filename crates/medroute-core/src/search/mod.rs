//! Graph search strategies
//!
//! Four strategies share a single traversal loop and differ only in the
//! frontier they plug into it:
//! - breadth-first: FIFO queue, fewest edges
//! - depth-first: LIFO stack, any path
//! - uniform-cost: min-heap on accumulated cost, cheapest path
//! - A*: min-heap on cost plus heuristic estimate, cheapest path when the
//!   estimates never overestimate
//!
//! A search that exhausts its frontier returns `None`; that is an expected
//! outcome, not an error.

pub mod frontier;
pub mod node;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::RouteError;
use crate::graph::heuristic::HeuristicTable;
use crate::graph::types::{Distance, Location};
use crate::graph::GraphProvider;

pub use frontier::{FifoFrontier, Frontier, HeapEntry, LifoFrontier, PriorityFrontier};
pub use node::{NodeId, SearchNode, SearchTree};

/// Which frontier policy to search with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Bfs,
    Dfs,
    #[default]
    Ucs,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::Bfs, Strategy::Dfs, Strategy::Ucs, Strategy::AStar];

    /// Short identifier accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Ucs => "ucs",
            Strategy::AStar => "astar",
        }
    }

    /// Display name for reports
    pub fn title(&self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS (Breadth-First Search)",
            Strategy::Dfs => "DFS (Depth-First Search)",
            Strategy::Ucs => "UCS (Uniform Cost Search)",
            Strategy::AStar => "A* (A-Star)",
        }
    }

    /// Whether the strategy guarantees a minimum-cost path
    pub fn is_cost_optimal(&self) -> bool {
        matches!(self, Strategy::Ucs | Strategy::AStar)
    }
}

impl FromStr for Strategy {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            "ucs" | "uniform-cost" => Ok(Strategy::Ucs),
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            other => Err(RouteError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route found by one search call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub strategy: Strategy,
    /// Start to goal, inclusive
    pub path: Vec<Location>,
    pub cost: Distance,
    /// Frontier pops performed, stale entries included
    pub nodes_explored: usize,
}

/// Runs searches over a borrowed graph.
///
/// The only state kept between calls is the exploration counter of the
/// most recent call, so planning for several agents in parallel needs one
/// engine per thread. The graph itself can be shared.
pub struct SearchEngine<'g> {
    graph: &'g dyn GraphProvider,
    nodes_explored: usize,
}

impl<'g> SearchEngine<'g> {
    pub fn new(graph: &'g dyn GraphProvider) -> Self {
        Self {
            graph,
            nodes_explored: 0,
        }
    }

    /// Pops performed by the most recent search, successful or not
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }

    /// Dispatch to a strategy. A* without a table degrades to uniform-cost.
    pub fn search(
        &mut self,
        strategy: Strategy,
        start: &str,
        goal: &str,
        heuristic: Option<&HeuristicTable>,
    ) -> Option<SearchResult> {
        match strategy {
            Strategy::Bfs => self.bfs(start, goal),
            Strategy::Dfs => self.dfs(start, goal),
            Strategy::Ucs => self.ucs(start, goal),
            Strategy::AStar => {
                let empty = HeuristicTable::new();
                self.a_star(start, goal, heuristic.unwrap_or(&empty))
            }
        }
    }

    /// Breadth-first search: fewest edges, cost is whatever that path costs.
    #[tracing::instrument(skip(self))]
    pub fn bfs(&mut self, start: &str, goal: &str) -> Option<SearchResult> {
        self.traverse(Strategy::Bfs, FifoFrontier::new(), start, goal)
    }

    /// Depth-first search: some path, no optimality guarantee.
    #[tracing::instrument(skip(self))]
    pub fn dfs(&mut self, start: &str, goal: &str) -> Option<SearchResult> {
        self.traverse(Strategy::Dfs, LifoFrontier::new(), start, goal)
    }

    /// Uniform-cost search: minimum-cost path.
    #[tracing::instrument(skip(self))]
    pub fn ucs(&mut self, start: &str, goal: &str) -> Option<SearchResult> {
        self.traverse(Strategy::Ucs, PriorityFrontier::uniform(), start, goal)
    }

    /// A* search. Optimal when `heuristic` never overestimates; that is
    /// the caller's responsibility and is not checked here.
    #[tracing::instrument(skip(self, heuristic), fields(estimates = heuristic.len()))]
    pub fn a_star(
        &mut self,
        start: &str,
        goal: &str,
        heuristic: &HeuristicTable,
    ) -> Option<SearchResult> {
        self.traverse(
            Strategy::AStar,
            PriorityFrontier::guided(heuristic),
            start,
            goal,
        )
    }

    /// The loop every strategy shares:
    /// pop, count, skip if already explored, return on goal, mark
    /// explored, then offer each unexplored neighbor to the frontier.
    fn traverse<F: Frontier>(
        &mut self,
        strategy: Strategy,
        mut frontier: F,
        start: &str,
        goal: &str,
    ) -> Option<SearchResult> {
        self.nodes_explored = 0;

        let mut tree = SearchTree::new();
        let mut explored: HashSet<Location> = HashSet::new();

        let root = tree.root(Location::from(start));
        frontier.push(root, &tree.get(root).state, Distance::ZERO);

        while let Some(current) = frontier.pop() {
            self.nodes_explored += 1;

            let node = tree.get(current);
            let state = node.state.clone();
            let cost = node.cost;

            // Duplicate (DFS) or stale (UCS/A*) entry
            if explored.contains(&state) {
                trace!(state = %state, "skip_explored");
                continue;
            }

            if state == goal {
                let (path, cost) = tree.reconstruct_path(current);
                debug!(
                    %strategy,
                    cost = cost.value(),
                    nodes_explored = self.nodes_explored,
                    "goal_reached"
                );
                return Some(SearchResult {
                    strategy,
                    path,
                    cost,
                    nodes_explored: self.nodes_explored,
                });
            }

            let mut neighbors = self.graph.neighbors(state.as_str());
            explored.insert(state);
            if frontier.expands_reversed() {
                neighbors.reverse();
            }

            for (neighbor, distance) in neighbors {
                if explored.contains(&neighbor) {
                    continue;
                }
                let new_cost = cost + distance;
                if !frontier.admits(&neighbor, new_cost) {
                    continue;
                }
                let child = tree.child(current, neighbor, distance);
                frontier.push(child, &tree.get(child).state, new_cost);
            }
        }

        debug!(
            %strategy,
            nodes_explored = self.nodes_explored,
            generated = tree.len(),
            "frontier_exhausted"
        );
        None
    }
}

#[cfg(test)]
mod tests;
