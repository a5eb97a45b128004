// Re-export key components
pub use crate::compile::{GraphConfig, compile};
pub use crate::model::{
    Canonicalizer, Coordinate, NodeKey, Precision, RouteEdge, RouteGraph, RouteNode,
};
pub use crate::render::{RenderStyle, routes_to_geojson};
pub use crate::routing::{PathResult, ShortestPath, find_path};
pub use crate::selection::Selection;
pub use crate::store::{Route, RouteId, RouteStore};
pub use crate::{Endpoint, Error};
