//! Data model for the route graph
//!
//! Contains coordinates, their canonical node keys and the compiled graph.

pub mod canonical;
pub mod coordinate;
pub mod network;

pub use canonical::{Canonicalizer, NodeKey, Precision};
pub use coordinate::Coordinate;
pub use network::{RouteEdge, RouteGraph, RouteNode};
