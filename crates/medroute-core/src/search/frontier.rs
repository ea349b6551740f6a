//! Frontier policies for the shared traversal loop
//!
//! - `FifoFrontier`: breadth-first queue with in-frontier deduplication
//! - `LifoFrontier`: depth-first stack, duplicates dropped at pop time
//! - `PriorityFrontier`: min-heap on `g` (uniform-cost) or `g + h` (A*)

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::graph::heuristic::HeuristicTable;
use crate::graph::types::{Distance, Location};
use crate::search::node::NodeId;

/// Ordering policy over generated-but-unexpanded nodes
pub trait Frontier {
    /// Queue `node` for `state`, reached at accumulated cost `cost`.
    fn push(&mut self, node: NodeId, state: &Location, cost: Distance);

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    /// Whether a child for a not-yet-explored `state` at `cost` should be
    /// generated at all.
    fn admits(&self, _state: &Location, _cost: Distance) -> bool {
        true
    }

    /// Whether neighbors are pushed in reverse provider order.
    fn expands_reversed(&self) -> bool {
        false
    }
}

/// FIFO queue. A state is enqueued at most once until it is popped.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<(NodeId, Location)>,
    in_frontier: HashSet<Location>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: NodeId, state: &Location, _cost: Distance) {
        self.in_frontier.insert(state.clone());
        self.queue.push_back((node, state.clone()));
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (node, state) = self.queue.pop_front()?;
        self.in_frontier.remove(&state);
        Some(node)
    }

    fn admits(&self, state: &Location, _cost: Distance) -> bool {
        !self.in_frontier.contains(state)
    }
}

/// LIFO stack.
///
/// No push-time deduplication: a state can sit on the stack several times
/// and the later copies are skipped when popped after it was explored.
/// Neighbors are pushed reversed so they pop in provider order.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node: NodeId, _state: &Location, _cost: Distance) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn expands_reversed(&self) -> bool {
        true
    }
}

/// Heap entry ordered by priority, then by insertion sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry {
    pub priority: Distance,
    pub seq: u64,
    pub node: NodeId,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue keyed on `g`, or on `g + h` when given a heuristic.
///
/// There is no decrease-key: when a cheaper path to a queued state turns
/// up, a second entry is pushed and the old one stays in the heap. The
/// traversal loop drops such stale entries when they surface after the
/// state was explored (lazy deletion).
#[derive(Debug)]
pub struct PriorityFrontier<'h> {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    best_cost: HashMap<Location, Distance>,
    heuristic: Option<&'h HeuristicTable>,
    next_seq: u64,
}

impl<'h> PriorityFrontier<'h> {
    /// Uniform-cost ordering
    pub fn uniform() -> Self {
        Self {
            heap: BinaryHeap::new(),
            best_cost: HashMap::new(),
            heuristic: None,
            next_seq: 0,
        }
    }

    /// A* ordering with the given estimates
    pub fn guided(heuristic: &'h HeuristicTable) -> Self {
        Self {
            heuristic: Some(heuristic),
            ..Self::uniform()
        }
    }

    /// Lowest accumulated cost recorded so far for `state`
    pub fn best_cost(&self, state: &str) -> Option<Distance> {
        self.best_cost.get(state).copied()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Frontier for PriorityFrontier<'_> {
    fn push(&mut self, node: NodeId, state: &Location, cost: Distance) {
        let estimate = self
            .heuristic
            .map_or(Distance::ZERO, |h| h.estimate(state.as_str()));
        self.best_cost.insert(state.clone(), cost);
        self.heap.push(Reverse(HeapEntry {
            priority: cost + estimate,
            seq: self.next_seq,
            node,
        }));
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    fn admits(&self, state: &Location, cost: Distance) -> bool {
        self.best_cost
            .get(state)
            .is_none_or(|best| cost < *best)
    }
}
