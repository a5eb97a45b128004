use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use log::trace;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::state::State;
use crate::{RouteGraph, Weight};

/// Distances and predecessors found by a single-source search
#[derive(Debug)]
pub(crate) struct SearchTree {
    pub(crate) start: NodeIndex,
    pub(crate) distances: HashMap<NodeIndex, Weight>,
    pub(crate) predecessors: HashMap<NodeIndex, NodeIndex>,
    pub(crate) settled: FixedBitSet,
}

impl SearchTree {
    pub(crate) fn is_settled(&self, node: NodeIndex) -> bool {
        self.settled.contains(node.index())
    }

    /// Node indices from start to `target`, inclusive. `None` if `target` was not settled.
    pub(crate) fn path_to(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        if !self.is_settled(target) {
            return None;
        }

        let mut node_path = vec![target];
        let mut current = target;
        // Follow predecessors backward from target to start
        while current != self.start {
            current = *self.predecessors.get(&current)?;
            node_path.push(current);
        }
        node_path.reverse();
        Some(node_path)
    }
}

/// Dijkstra's algorithm over the directed route graph.
///
/// Stops as soon as `target` is settled, or when the frontier runs out.
/// Among equal-cost candidates the first relaxation to reach a node keeps the
/// predecessor; the order is fixed by the graph's edge storage order, so equal
/// ties may resolve differently than in another implementation.
pub(crate) fn dijkstra_tree(
    graph: &RouteGraph,
    start: NodeIndex,
    target: Option<NodeIndex>,
) -> SearchTree {
    let node_count = graph.node_count();
    let mut distances: HashMap<NodeIndex, Weight> = HashMap::with_capacity(node_count);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(node_count);
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Stale heap entry for an already settled node
        if settled.put(node.index()) {
            continue;
        }

        if target == Some(node) {
            break;
        }

        // Examine neighbors
        for edge in graph.edges(node) {
            let next = edge.target();
            if settled.contains(next.index()) {
                continue;
            }
            let next_cost = cost + edge.weight().weight;

            // Add or update distance if better using Entry API
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    trace!(
        "Dijkstra from {:?} settled {} of {node_count} nodes",
        start,
        settled.count_ones(..)
    );

    SearchTree {
        start,
        distances,
        predecessors,
        settled,
    }
}
