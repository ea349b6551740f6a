//! Delivery agent
//!
//! Plans one leg per requested service with the chosen strategy, walks it
//! edge by edge, delivers, and finally returns to the depot. Each leg is
//! planned independently from wherever the previous one ended.

pub mod compare;
pub mod report;

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::graph::heuristic::HeuristicSet;
use crate::graph::types::{Distance, Location};
use crate::graph::GraphProvider;
use crate::search::{SearchEngine, SearchResult, Strategy};
use crate::trace_time;

pub use compare::compare_strategies;
pub use report::{Comparison, ComparisonRow, Leg, MissionReport};

/// Agent carrying medications around a graph
pub struct DeliveryAgent<'a> {
    graph: &'a dyn GraphProvider,
    heuristics: &'a HeuristicSet,
    depot: Location,
    position: Location,
    pending: Vec<Location>,
    delivered: Vec<Location>,
    total_distance: Distance,
}

impl<'a> DeliveryAgent<'a> {
    pub fn new(
        graph: &'a dyn GraphProvider,
        heuristics: &'a HeuristicSet,
        depot: impl Into<Location>,
    ) -> Self {
        let depot = depot.into();
        Self {
            graph,
            heuristics,
            position: depot.clone(),
            depot,
            pending: Vec::new(),
            delivered: Vec::new(),
            total_distance: Distance::ZERO,
        }
    }

    pub fn position(&self) -> &Location {
        &self.position
    }

    pub fn depot(&self) -> &Location {
        &self.depot
    }

    pub fn pending(&self) -> &[Location] {
        &self.pending
    }

    pub fn delivered(&self) -> &[Location] {
        &self.delivered
    }

    pub fn deliveries(&self) -> usize {
        self.delivered.len()
    }

    pub fn total_distance(&self) -> Distance {
        self.total_distance
    }

    /// Back at the depot with nothing pending, delivered, or travelled.
    pub fn reset(&mut self) {
        self.position = self.depot.clone();
        self.pending.clear();
        self.delivered.clear();
        self.total_distance = Distance::ZERO;
    }

    /// Replace the pending request list.
    pub fn perceive_requests(&mut self, services: &[Location]) {
        self.pending = services.to_vec();
        info!(requests = services.len(), "perceive_requests");
    }

    /// Move along the direct edge to `destination`.
    ///
    /// Returns false, leaving the agent in place, when there is no such edge.
    pub fn move_to(&mut self, destination: &str) -> bool {
        match self.graph.edge_weight(self.position.as_str(), destination) {
            Some(distance) => {
                debug!(from = %self.position, to = destination, distance = distance.value(), "move");
                self.position = Location::from(destination);
                self.total_distance += distance;
                true
            }
            None => false,
        }
    }

    /// Hand over medications if `service` is still pending.
    pub fn deliver(&mut self, service: &str) -> bool {
        match self.pending.iter().position(|p| p == service) {
            Some(index) => {
                let service = self.pending.remove(index);
                debug!(service = %service, "deliver");
                self.delivered.push(service);
                true
            }
            None => false,
        }
    }

    /// Plan a route from the current position to `goal`.
    /// A* uses the goal's estimate table.
    pub fn plan_route(&self, goal: &str, strategy: Strategy) -> Option<SearchResult> {
        let mut engine = SearchEngine::new(self.graph);
        let heuristic = self.heuristics.for_goal(goal);
        engine.search(strategy, self.position.as_str(), goal, Some(heuristic))
    }

    /// Walk a planned route one edge at a time.
    fn follow(&mut self, route: &SearchResult) {
        for step in route.path.iter().skip(1) {
            if !self.move_to(step.as_str()) {
                warn!(from = %self.position, to = %step, "route_step_not_adjacent");
                break;
            }
        }
    }

    /// Serve every requested service in order, then return to the depot.
    ///
    /// An unreachable service is reported and left pending; the agent stays
    /// where it was and moves on to the next request.
    #[tracing::instrument(skip(self, services), fields(requests = services.len()))]
    pub fn execute_mission(&mut self, services: &[Location], strategy: Strategy) -> MissionReport {
        let start = Instant::now();
        self.reset();
        self.perceive_requests(services);

        let mut legs = Vec::with_capacity(services.len());
        let mut unreachable = Vec::new();

        for service in services {
            let route = self.plan_route(service.as_str(), strategy);
            let delivered = match &route {
                Some(route) => {
                    self.follow(route);
                    self.deliver(service.as_str())
                }
                None => {
                    warn!(service = %service, "service_unreachable");
                    unreachable.push(service.clone());
                    false
                }
            };
            legs.push(Leg {
                target: service.clone(),
                route,
                delivered,
            });
        }

        let return_leg = if self.position != self.depot {
            let depot = self.depot.clone();
            let route = self.plan_route(depot.as_str(), strategy);
            if let Some(route) = &route {
                self.follow(route);
            }
            route
        } else {
            None
        };

        trace_time!(start, "execute_mission");

        MissionReport {
            strategy,
            depot: self.depot.clone(),
            requested: services.to_vec(),
            legs,
            return_leg,
            deliveries: self.deliveries(),
            delivered: self.delivered.clone(),
            unreachable,
            total_distance: self.total_distance,
            final_position: self.position.clone(),
        }
    }
}
