use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// Handle of a committed route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub(crate) u64);

impl RouteId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RouteId {
    fn from(id: u64) -> Self {
        RouteId(id)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Polyline of at least two points. Immutable once committed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    id: RouteId,
    coordinates: Vec<Coordinate>,
}

impl Route {
    pub(crate) fn new(id: RouteId, coordinates: Vec<Coordinate>) -> Self {
        debug_assert!(coordinates.len() >= 2);
        Self { id, coordinates }
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Consecutive `(from, to)` point pairs, in drawing order
    pub fn segments(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.coordinates.iter().copied().tuple_windows()
    }
}
