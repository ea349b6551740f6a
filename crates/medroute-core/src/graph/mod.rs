//! Graph data consumed by the search strategies
//!
//! - `traversal`: the read-only `GraphProvider` trait
//! - `weighted`: an insertion-ordered weighted adjacency list
//! - `hospital`: the built-in hospital layout and its estimate tables
//! - `heuristic`: per-goal estimate tables for A*

pub mod heuristic;
pub mod hospital;
pub mod traversal;
pub mod types;
pub mod weighted;

pub use heuristic::{audit, HeuristicAudit, HeuristicSet, HeuristicTable};
pub use hospital::DEPOT;
pub use traversal::GraphProvider;
pub use types::{Distance, Edge, Location};
pub use weighted::{GraphStatistics, WeightedGraph};
