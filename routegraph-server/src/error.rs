use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use routegraph::SessionError;
use routegraph_core::Error;
use serde::Serialize;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    Session(SessionError),
    RouteNotFound(u64),
    InvalidBody(JsonRejection),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::RouteNotFound(_) => (StatusCode::NOT_FOUND, "route_not_found"),
            ApiError::InvalidBody(rejection) => (rejection.status(), "invalid_body"),
            ApiError::Session(SessionError::NotCompiled) => (StatusCode::CONFLICT, "not_compiled"),
            ApiError::Session(SessionError::SelectionIncomplete) => {
                (StatusCode::CONFLICT, "selection_incomplete")
            }
            ApiError::Session(SessionError::Core(err)) => match err {
                Error::InvalidRoute { .. } => (StatusCode::BAD_REQUEST, "invalid_route"),
                Error::InvalidCoordinateFormat(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_coordinate_format")
                }
                Error::NodeNotFound { .. } => (StatusCode::NOT_FOUND, "node_not_found"),
                Error::NoPathFound { .. } => (StatusCode::NOT_FOUND, "no_path_found"),
                Error::GeoJsonError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "geojson_error"),
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Session(err) => err.fmt(f),
            ApiError::RouteNotFound(id) => write!(f, "No route with id {id}"),
            ApiError::InvalidBody(rejection) => f.write_str(&rejection.body_text()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        ApiError::Session(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Session(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: code,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
