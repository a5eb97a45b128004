//! Shortest-path queries over a compiled route graph

mod dijkstra;
mod path;

pub use path::{PathResult, ShortestPath, find_path};
