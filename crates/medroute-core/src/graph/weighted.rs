//! Insertion-ordered adjacency list

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, Edge, Location};

/// Weighted graph keyed by location name.
///
/// Locations and each location's outgoing edges keep their insertion order,
/// which is the neighbor order the search strategies observe.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    order: Vec<Location>,
    adjacency: HashMap<Location, Vec<(Location, Distance)>>,
    descriptions: HashMap<Location, String>,
}

/// Summary figures for a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub nodes: usize,
    /// Undirected connections (directed edge count / 2)
    pub edges: usize,
    pub min_distance: Option<Distance>,
    pub max_distance: Option<Distance>,
    pub avg_distance: f64,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location with no edges. Existing locations are left alone.
    pub fn add_location(&mut self, location: impl Into<Location>) -> &mut Self {
        let location = location.into();
        if !self.adjacency.contains_key(&location) {
            self.order.push(location.clone());
            self.adjacency.insert(location, Vec::new());
        }
        self
    }

    /// Add or reweight the directed edge `from -> to`.
    pub fn add_edge(
        &mut self,
        from: impl Into<Location>,
        to: impl Into<Location>,
        distance: u32,
    ) -> &mut Self {
        let from = from.into();
        let to = to.into();
        let distance = Distance::new(distance);

        self.add_location(from.clone());
        self.add_location(to.clone());

        if let Some(edges) = self.adjacency.get_mut(&from) {
            match edges.iter_mut().find(|(target, _)| *target == to) {
                Some(existing) => existing.1 = distance,
                None => edges.push((to, distance)),
            }
        }
        self
    }

    /// Add the edge in both directions.
    pub fn connect(
        &mut self,
        a: impl Into<Location>,
        b: impl Into<Location>,
        distance: u32,
    ) -> &mut Self {
        let a = a.into();
        let b = b.into();
        self.add_edge(a.clone(), b.clone(), distance);
        self.add_edge(b, a, distance)
    }

    pub fn set_description(&mut self, location: impl Into<Location>, text: impl Into<String>) {
        self.descriptions.insert(location.into(), text.into());
    }

    pub fn describe(&self, location: &str) -> Option<&str> {
        self.descriptions.get(location).map(String::as_str)
    }

    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Locations in insertion order
    pub fn locations(&self) -> &[Location] {
        &self.order
    }

    /// All directed edges, grouped by source in insertion order
    pub fn edges(&self) -> Vec<Edge> {
        self.order
            .iter()
            .flat_map(|from| {
                self.adjacency
                    .get(from)
                    .into_iter()
                    .flatten()
                    .map(move |(to, distance)| Edge {
                        from: from.clone(),
                        to: to.clone(),
                        distance: *distance,
                    })
            })
            .collect()
    }

    pub fn statistics(&self) -> GraphStatistics {
        let distances: Vec<Distance> = self
            .adjacency
            .values()
            .flat_map(|edges| edges.iter().map(|(_, d)| *d))
            .collect();

        let avg_distance = if distances.is_empty() {
            0.0
        } else {
            distances.iter().map(|d| d.value() as f64).sum::<f64>() / distances.len() as f64
        };

        GraphStatistics {
            nodes: self.order.len(),
            edges: distances.len() / 2,
            min_distance: distances.iter().min().copied(),
            max_distance: distances.iter().max().copied(),
            avg_distance,
        }
    }
}

impl GraphProvider for WeightedGraph {
    fn neighbors(&self, location: &str) -> Vec<(Location, Distance)> {
        self.adjacency.get(location).cloned().unwrap_or_default()
    }

    fn edge_weight(&self, from: &str, to: &str) -> Option<Distance> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, distance)| *distance)
    }
}
