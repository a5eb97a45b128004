//! Session log of committed polylines

mod route;

pub use route::{Route, RouteId};

use log::debug;

use crate::{Coordinate, Error};

/// Ordered, append-only list of committed routes.
///
/// The store never touches a compiled graph; callers recompile explicitly.
#[derive(Debug, Clone, Default)]
pub struct RouteStore {
    routes: Vec<Route>,
    next_id: u64,
    revision: u64,
}

impl RouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a finished polyline
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoute`] if fewer than 2 points are given
    pub fn commit_route(
        &mut self,
        coordinates: impl Into<Vec<Coordinate>>,
    ) -> Result<RouteId, Error> {
        let coordinates = coordinates.into();
        if coordinates.len() < 2 {
            return Err(Error::InvalidRoute {
                points: coordinates.len(),
            });
        }

        let id = RouteId(self.next_id);
        self.next_id += 1;
        self.revision += 1;

        debug!("Committed route {id} with {} points", coordinates.len());
        self.routes.push(Route::new(id, coordinates));
        Ok(id)
    }

    /// Removes a route; `false` if no route has this id
    pub fn remove_route(&mut self, id: RouteId) -> bool {
        let Some(position) = self.routes.iter().position(|route| route.id() == id) else {
            return false;
        };
        self.routes.remove(position);
        self.revision += 1;
        debug!("Removed route {id}");
        true
    }

    /// Removes every route. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        if !self.routes.is_empty() {
            self.routes.clear();
            self.revision += 1;
        }
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.iter().find(|route| route.id() == id)
    }

    /// Routes in commit order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Bumped on every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
