//! Compiled route network

pub mod components;
pub mod graph;

pub use components::{RouteEdge, RouteNode};
pub use graph::RouteGraph;
