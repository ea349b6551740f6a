use crate::graph::types::{Distance, Location};

/// Trait for providing weighted adjacency to the search strategies.
///
/// Implementations are read-only from the engine's point of view and may be
/// shared between concurrent searches.
pub trait GraphProvider {
    /// Outgoing edges of `location` in a stable iteration order.
    /// Unknown locations have no edges.
    fn neighbors(&self, location: &str) -> Vec<(Location, Distance)>;

    /// Weight of the direct edge `from -> to`, if the two are adjacent.
    fn edge_weight(&self, from: &str, to: &str) -> Option<Distance>;
}
