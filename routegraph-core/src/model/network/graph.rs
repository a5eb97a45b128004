use hashbrown::HashMap;
use petgraph::{
    Directed,
    graph::{EdgeReference, Graph, NodeIndex},
    visit::EdgeRef,
};

use super::{RouteEdge, RouteNode};
use crate::{
    Weight,
    model::{Canonicalizer, Coordinate, NodeKey},
};

/// Immutable snapshot of all committed routes.
///
/// Built only by [`crate::compile`]; a recompilation produces a new value
/// instead of patching this one.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    pub(crate) graph: Graph<RouteNode, RouteEdge, Directed>,
    index: HashMap<NodeKey, NodeIndex>,
    canonicalizer: Canonicalizer,
}

impl RouteGraph {
    pub(crate) fn new(canonicalizer: Canonicalizer) -> Self {
        Self {
            graph: Graph::new(),
            index: HashMap::new(),
            canonicalizer,
        }
    }

    /// Returns the node for `coordinate`, inserting it if its key is new
    pub(crate) fn ensure_node(&mut self, coordinate: Coordinate) -> NodeIndex {
        let key = self.canonicalizer.key(coordinate);
        *self
            .index
            .entry(key)
            .or_insert_with(|| self.graph.add_node(RouteNode { key, coordinate }))
    }

    /// Inserts the directed edge `from -> to`, overwriting an existing weight
    pub(crate) fn set_edge(&mut self, from: NodeIndex, to: NodeIndex, weight: Weight) {
        debug_assert!(weight >= 0.0, "edge weights must be non-negative");
        self.graph.update_edge(from, to, RouteEdge { weight });
    }

    pub(crate) fn node_index(&self, key: &NodeKey) -> Option<NodeIndex> {
        self.index.get(key).copied()
    }

    pub(crate) fn node_weight(&self, index: NodeIndex) -> Option<&RouteNode> {
        self.graph.node_weight(index)
    }

    pub(crate) fn edges(
        &self,
        index: NodeIndex,
    ) -> impl Iterator<Item = EdgeReference<'_, RouteEdge>> {
        self.graph.edges(index)
    }

    pub fn canonicalizer(&self) -> Canonicalizer {
        self.canonicalizer
    }

    /// Key `coordinate` with the same rule the graph was compiled with
    pub fn key_of(&self, coordinate: Coordinate) -> NodeKey {
        self.canonicalizer.key(coordinate)
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn node(&self, key: &NodeKey) -> Option<&RouteNode> {
        self.node_index(key).and_then(|idx| self.graph.node_weight(idx))
    }

    pub fn edge(&self, from: &NodeKey, to: &NodeKey) -> Option<&RouteEdge> {
        let edge = self
            .graph
            .find_edge(self.node_index(from)?, self.node_index(to)?)?;
        self.graph.edge_weight(edge)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn nodes(&self) -> impl Iterator<Item = &RouteNode> {
        self.graph.node_weights()
    }

    /// All edges as `(from, to, weight)`
    pub fn edge_list(&self) -> impl Iterator<Item = (NodeKey, NodeKey, Weight)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].key,
                self.graph[edge.target()].key,
                edge.weight().weight,
            )
        })
    }
}

/// Graphs are equal when they hold the same node keys and the same weighted edges
impl PartialEq for RouteGraph {
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count()
            && self.edge_count() == other.edge_count()
            && self.nodes().all(|node| other.contains(&node.key))
            && self
                .edge_list()
                .all(|(from, to, weight)| {
                    other.edge(&from, &to).map(RouteEdge::weight) == Some(weight)
                })
    }
}
