use std::sync::Arc;

use geojson::FeatureCollection;
use log::{debug, info};
use routegraph_core::prelude::*;

use crate::SessionError;

/// Session
///
/// Everything one map session works with: the committed routes, the most
/// recently compiled graph and the endpoint selection.
///
/// Committing or removing routes never recompiles. The held graph stays the
/// snapshot of the last `compile` call until `compile` is called again, and
/// `is_stale` reports whether routes changed in between.
#[derive(Debug, Default)]
pub struct Session {
    config: GraphConfig,
    store: RouteStore,
    graph: Option<Arc<RouteGraph>>,
    compiled_revision: Option<u64>,
    selection: Selection,
}

impl Session {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn commit_route(
        &mut self,
        coordinates: impl Into<Vec<Coordinate>>,
    ) -> Result<RouteId, SessionError> {
        Ok(self.store.commit_route(coordinates)?)
    }

    pub fn remove_route(&mut self, id: RouteId) -> bool {
        self.store.remove_route(id)
    }

    pub fn clear_routes(&mut self) {
        self.store.clear();
    }

    pub fn routes(&self) -> &[Route] {
        self.store.routes()
    }

    pub fn routes_geojson(&self) -> Result<FeatureCollection, SessionError> {
        Ok(routes_to_geojson(self.store.routes(), &RenderStyle::route())?)
    }

    /// Logs every committed route with its points
    pub fn log_routes(&self) {
        info!("{} committed routes", self.store.len());
        for route in self.store.routes() {
            let points: Vec<String> = route
                .coordinates()
                .iter()
                .map(|c| format!("[{c}]"))
                .collect();
            info!("Route {}: {}", route.id(), points.join(" "));
        }
    }

    /// Builds a new graph from all current routes and makes it the latest snapshot
    pub fn compile(&mut self) -> Arc<RouteGraph> {
        let graph = Arc::new(compile(self.store.routes(), &self.config));
        self.graph = Some(Arc::clone(&graph));
        self.compiled_revision = Some(self.store.revision());
        graph
    }

    /// Latest compiled snapshot, if any
    pub fn graph(&self) -> Option<Arc<RouteGraph>> {
        self.graph.clone()
    }

    /// True when routes changed since the last compilation, or nothing was compiled
    pub fn is_stale(&self) -> bool {
        self.compiled_revision != Some(self.store.revision())
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn enable_selection(&mut self) {
        self.selection.enable();
    }

    pub fn click(&mut self, coordinate: Coordinate) -> bool {
        self.selection.click(coordinate)
    }

    pub fn reset_selection(&mut self) {
        self.selection.reset();
    }

    /// Queries the latest compiled snapshot
    pub fn find_path(
        &self,
        source: Coordinate,
        destination: Coordinate,
    ) -> Result<ShortestPath, SessionError> {
        let graph = self.graph.as_ref().ok_or(SessionError::NotCompiled)?;
        if self.is_stale() {
            debug!("Querying a graph compiled before the latest route changes");
        }
        Ok(find_path(graph, source, destination)?)
    }

    /// Queries between the two selected points
    pub fn find_selected_path(&self) -> Result<ShortestPath, SessionError> {
        let (source, destination) = self
            .selection
            .endpoints()
            .ok_or(SessionError::SelectionIncomplete)?;
        self.find_path(source, destination)
    }
}
