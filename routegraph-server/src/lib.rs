//! HTTP surface over a single route-drawing session.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    http::StatusCode,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::ServerConfig;
use error::ErrorBody;
pub use state::AppState;

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route(
            "/routes",
            get(routes::list_routes)
                .post(routes::commit_route)
                .delete(routes::clear_routes),
        )
        .route("/routes/geojson", get(routes::routes_geojson))
        .route("/routes/{id}", delete(routes::remove_route))
        .route("/graph", get(routes::graph_summary))
        .route("/graph/compile", post(routes::compile_graph))
        .route("/path", post(routes::find_path))
        .route("/selection", get(routes::selection))
        .route("/selection/enable", post(routes::enable_selection))
        .route("/selection/click", post(routes::click))
        .route("/selection/reset", post(routes::reset_selection))
        .route("/selection/path", post(routes::find_selected_path))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .concurrency_limit(config.concurrency_limit),
        )
        .with_state(state)
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, Json<ErrorBody>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorBody {
                error: "timeout",
                message: "Request took too long".to_string(),
            }),
        );
    }

    tracing::error!(error = %err, "Unhandled middleware error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "internal",
            message: err.to_string(),
        }),
    )
}
