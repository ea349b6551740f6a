//! Search nodes and path reconstruction

use crate::graph::types::{Distance, Location};

/// Index of a node inside its `SearchTree`
pub type NodeId = usize;

/// One generated search state and the link back to its predecessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub state: Location,
    /// `None` for the root
    pub parent: Option<NodeId>,
    /// Human-readable label of the transition, e.g. "Go to ICU"
    pub action: Option<String>,
    /// Cost accumulated along the path that created this node
    pub cost: Distance,
}

/// Arena owning every node generated during one search call.
///
/// Nodes are only ever appended and never re-parented, so parent indices
/// always point at earlier entries and the ancestor chain cannot cycle.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root node: no parent, no action, cost zero.
    pub fn root(&mut self, state: Location) -> NodeId {
        self.nodes.push(SearchNode {
            state,
            parent: None,
            action: None,
            cost: Distance::ZERO,
        });
        self.nodes.len() - 1
    }

    /// Add a child of `parent` reached over an edge of weight `edge`.
    pub fn child(&mut self, parent: NodeId, state: Location, edge: Distance) -> NodeId {
        let cost = self.nodes[parent].cost + edge;
        let action = format!("Go to {}", state);
        self.nodes.push(SearchNode {
            state,
            parent: Some(parent),
            action: Some(action),
            cost,
        });
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links from `id` to the root.
    ///
    /// Returns the states from root to `id` inclusive, and `id`'s cost.
    pub fn reconstruct_path(&self, id: NodeId) -> (Vec<Location>, Distance) {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id];
            path.push(node.state.clone());
            current = node.parent;
        }
        path.reverse();
        (path, self.nodes[id].cost)
    }
}
