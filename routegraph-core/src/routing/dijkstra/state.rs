use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

use crate::Weight;

#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) cost: Weight,
    pub(super) node: NodeIndex,
}

// Costs are finite and non-negative, so total_cmp gives the numeric order
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
