//! Route network components - nodes and edges

use serde::Serialize;

use crate::{Weight, model::Coordinate, model::NodeKey};

/// Route graph node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteNode {
    /// Canonical identity of the node
    pub key: NodeKey,
    /// First coordinate that produced this key
    pub coordinate: Coordinate,
}

/// Directed route graph edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteEdge {
    /// Planar distance between the segment's raw endpoints
    pub weight: Weight,
}

impl RouteEdge {
    pub fn weight(&self) -> Weight {
        self.weight
    }
}
