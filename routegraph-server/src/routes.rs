use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use geojson::{Feature, FeatureCollection};
use routegraph_core::{
    Coordinate, Error, NodeKey, RouteId, Selection, ShortestPath, render::RenderStyle,
    store::Route,
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::{error::ApiError, state::AppState};

// Components stay raw JSON until here; a non-number is an invalid coordinate.

fn component(value: &JsonValue) -> Result<f64, Error> {
    value
        .as_f64()
        .ok_or_else(|| Error::InvalidCoordinateFormat(format!("{value} is not a number")))
}

fn position(value: &JsonValue) -> Result<Coordinate, Error> {
    let Some(components) = value.as_array() else {
        return Err(Error::InvalidCoordinateFormat(format!(
            "expected a [lng, lat] position, got {value}"
        )));
    };
    let components = components
        .iter()
        .map(component)
        .collect::<Result<Vec<_>, _>>()?;
    Coordinate::try_from(components.as_slice())
}

/// A coordinate as sent by the map client: `"lng, lat"` text or a `[lng, lat]` position
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CoordinateInput(JsonValue);

impl CoordinateInput {
    fn parse(&self) -> Result<Coordinate, Error> {
        match &self.0 {
            JsonValue::String(text) => text.parse(),
            other => position(other),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommitRouteRequest {
    pub coordinates: Vec<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct CommitRouteResponse {
    pub id: RouteId,
}

#[derive(Debug, Serialize)]
pub struct GraphSummary {
    pub compiled: bool,
    pub stale: bool,
    pub nodes: usize,
    pub edges: usize,
}

#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub source: CoordinateInput,
    pub destination: CoordinateInput,
}

#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub total_weight: f64,
    pub coordinates: Vec<Coordinate>,
    pub keys: Vec<NodeKey>,
    pub feature: Feature,
}

impl PathResponse {
    fn from_path(path: &ShortestPath) -> Result<Self, ApiError> {
        Ok(Self {
            total_weight: path.total_weight(),
            coordinates: path.coordinates(),
            keys: path.keys(),
            feature: path.to_feature(&RenderStyle::path())?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub lng: JsonValue,
    pub lat: JsonValue,
}

#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub captured: bool,
    pub selection: Selection,
}

pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<Route>> {
    Json(state.session().routes().to_vec())
}

pub async fn commit_route(
    State(state): State<AppState>,
    request: Result<Json<CommitRouteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CommitRouteResponse>), ApiError> {
    let Json(request) = request?;
    let coordinates = request
        .coordinates
        .iter()
        .map(position)
        .collect::<Result<Vec<_>, _>>()?;

    let id = state.session().commit_route(coordinates)?;
    Ok((StatusCode::CREATED, Json(CommitRouteResponse { id })))
}

pub async fn remove_route(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if state.session().remove_route(RouteId::from(id)) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::RouteNotFound(id))
    }
}

pub async fn clear_routes(State(state): State<AppState>) -> StatusCode {
    state.session().clear_routes();
    StatusCode::NO_CONTENT
}

pub async fn routes_geojson(
    State(state): State<AppState>,
) -> Result<Json<FeatureCollection>, ApiError> {
    Ok(Json(state.session().routes_geojson()?))
}

pub async fn compile_graph(State(state): State<AppState>) -> Json<GraphSummary> {
    let graph = state.session().compile();
    Json(GraphSummary {
        compiled: true,
        stale: false,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    })
}

pub async fn graph_summary(State(state): State<AppState>) -> Json<GraphSummary> {
    let session = state.session();
    let (nodes, edges) = session
        .graph()
        .map_or((0, 0), |graph| (graph.node_count(), graph.edge_count()));
    Json(GraphSummary {
        compiled: session.graph().is_some(),
        stale: session.is_stale(),
        nodes,
        edges,
    })
}

pub async fn find_path(
    State(state): State<AppState>,
    request: Result<Json<PathRequest>, JsonRejection>,
) -> Result<Json<PathResponse>, ApiError> {
    let Json(request) = request?;
    let source = request.source.parse()?;
    let destination = request.destination.parse()?;

    let path = state.session().find_path(source, destination)?;
    Ok(Json(PathResponse::from_path(&path)?))
}

pub async fn selection(State(state): State<AppState>) -> Json<Selection> {
    Json(state.session().selection())
}

pub async fn enable_selection(State(state): State<AppState>) -> Json<Selection> {
    let mut session = state.session();
    session.enable_selection();
    Json(session.selection())
}

pub async fn click(
    State(state): State<AppState>,
    request: Result<Json<ClickRequest>, JsonRejection>,
) -> Result<Json<ClickResponse>, ApiError> {
    let Json(request) = request?;
    let coordinate = Coordinate::new(component(&request.lng)?, component(&request.lat)?)?;

    let mut session = state.session();
    let captured = session.click(coordinate);
    Ok(Json(ClickResponse {
        captured,
        selection: session.selection(),
    }))
}

pub async fn reset_selection(State(state): State<AppState>) -> Json<Selection> {
    let mut session = state.session();
    session.reset_selection();
    Json(session.selection())
}

pub async fn find_selected_path(
    State(state): State<AppState>,
) -> Result<Json<PathResponse>, ApiError> {
    let path = state.session().find_selected_path()?;
    Ok(Json(PathResponse::from_path(&path)?))
}
