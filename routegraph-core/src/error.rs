use std::fmt;

use thiserror::Error;

use crate::model::NodeKey;

/// Which side of a path query failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid route: a route needs at least 2 points, got {points}")]
    InvalidRoute { points: usize },
    #[error("No {endpoint} node at {key} in the compiled graph")]
    NodeNotFound { endpoint: Endpoint, key: NodeKey },
    #[error("No path found from {from} to {to}")]
    NoPathFound { from: NodeKey, to: NodeKey },
    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinateFormat(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
