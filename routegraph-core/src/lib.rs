//! Route-graph construction and shortest-path queries over hand-drawn polylines.
//!
//! Committed routes live in a [`RouteStore`]. [`compile`] turns the whole store
//! into a fresh, immutable [`RouteGraph`], and [`find_path`] answers
//! shortest-path queries between two coordinates on that snapshot.

pub mod compile;
pub mod error;
pub mod model;
pub mod prelude;
pub mod render;
pub mod routing;
pub mod selection;
pub mod store;

pub use compile::{GraphConfig, compile};
pub use error::{Endpoint, Error};
pub use model::{Coordinate, NodeKey, Precision, RouteGraph};
pub use routing::{PathResult, ShortestPath, find_path};
pub use selection::Selection;
pub use store::{Route, RouteId, RouteStore};

/// Planar edge weight, in raw longitude/latitude units
pub type Weight = f64;
