//! Precomputed remaining-distance estimates for A*

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::types::{Distance, Location};
use crate::graph::GraphProvider;
use crate::search::SearchEngine;

/// Estimated remaining distance from each location to one goal.
///
/// Locations missing from the table estimate to zero, which makes A*
/// behave like uniform-cost search for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeuristicTable {
    estimates: HashMap<Location, Distance>,
}

impl HeuristicTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, location: impl Into<Location>, estimate: u32) {
        self.estimates
            .insert(location.into(), Distance::new(estimate));
    }

    pub fn estimate(&self, location: &str) -> Distance {
        self.estimates
            .get(location)
            .copied()
            .unwrap_or(Distance::ZERO)
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Entries sorted by location name
    pub fn entries(&self) -> Vec<(&Location, Distance)> {
        let mut entries: Vec<_> = self.estimates.iter().map(|(l, d)| (l, *d)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<L: Into<Location>> FromIterator<(L, u32)> for HeuristicTable {
    fn from_iter<I: IntoIterator<Item = (L, u32)>>(iter: I) -> Self {
        let mut table = HeuristicTable::new();
        for (location, estimate) in iter {
            table.insert(location, estimate);
        }
        table
    }
}

/// Heuristic tables keyed by goal
#[derive(Debug, Clone, Default)]
pub struct HeuristicSet {
    tables: HashMap<Location, HeuristicTable>,
    empty: HeuristicTable,
}

impl HeuristicSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, goal: impl Into<Location>, table: HeuristicTable) {
        self.tables.insert(goal.into(), table);
    }

    /// Table for `goal`; goals without a table get an all-zero estimate.
    pub fn for_goal(&self, goal: &str) -> &HeuristicTable {
        self.tables.get(goal).unwrap_or(&self.empty)
    }

    pub fn has_goal(&self, goal: &str) -> bool {
        self.tables.contains_key(goal)
    }

    pub fn goals(&self) -> Vec<&Location> {
        let mut goals: Vec<_> = self.tables.keys().collect();
        goals.sort();
        goals
    }
}

/// One line of a heuristic audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeuristicAudit {
    pub location: Location,
    pub estimate: Distance,
    /// True shortest distance to the goal, `None` if unreachable
    pub actual: Option<Distance>,
    pub overestimates: bool,
}

/// Compare each estimate for `goal` against the uniform-cost distance.
///
/// A* only guarantees optimal routes when no entry overestimates; the
/// search itself never checks this.
pub fn audit(graph: &dyn GraphProvider, goal: &str, table: &HeuristicTable) -> Vec<HeuristicAudit> {
    let mut engine = SearchEngine::new(graph);
    table
        .entries()
        .into_iter()
        .map(|(location, estimate)| {
            let actual = engine.ucs(location.as_str(), goal).map(|r| r.cost);
            HeuristicAudit {
                location: location.clone(),
                estimate,
                actual,
                overestimates: actual.is_some_and(|a| estimate > a),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    #[test]
    fn test_missing_location_estimates_zero() {
        let table: HeuristicTable = [("A", 3), ("B", 1)].into_iter().collect();
        assert_eq!(table.estimate("A"), Distance::new(3));
        assert_eq!(table.estimate("Z"), Distance::ZERO);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_goal_without_table_is_all_zero() {
        let mut set = HeuristicSet::new();
        set.insert("C", [("A", 4)].into_iter().collect());

        assert_eq!(set.for_goal("C").estimate("A"), Distance::new(4));
        assert!(set.for_goal("Elsewhere").is_empty());
        assert!(set.has_goal("C"));
        assert!(!set.has_goal("Elsewhere"));
    }

    #[test]
    fn test_entries_are_sorted() {
        let table: HeuristicTable = [("C", 1), ("A", 2), ("B", 3)].into_iter().collect();
        let names: Vec<&str> = table.entries().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_audit_flags_overestimates() {
        let mut graph = WeightedGraph::new();
        graph.connect("A", "B", 1).connect("B", "C", 2).add_location("D");

        let table: HeuristicTable = [("A", 3), ("B", 5), ("D", 1)].into_iter().collect();
        let report = audit(&graph, "C", &table);

        assert_eq!(report.len(), 3);
        assert_eq!(report[0].location, "A");
        assert_eq!(report[0].actual, Some(Distance::new(3)));
        assert!(!report[0].overestimates);
        assert_eq!(report[1].location, "B");
        assert_eq!(report[1].actual, Some(Distance::new(2)));
        assert!(report[1].overestimates);
        assert_eq!(report[2].actual, None);
        assert!(!report[2].overestimates);
    }
}
