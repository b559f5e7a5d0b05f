//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::domain::NetworkError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/stations/:name", get(station_details))
        .route(
            "/stations/:name/nearest-intersection",
            get(nearest_intersection),
        )
        .route("/routes", get(possible_routes))
        .route("/intersections", get(intersections))
        .route("/terminals", get(terminals))
        .route("/lines/:name/terminals", get(line_terminals))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station in identity order.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let stations = state
        .graph
        .stations()
        .iter()
        .map(|(_, name)| name.to_string())
        .collect();

    Json(StationListResponse { stations })
}

/// Every simple route between two stations.
async fn possible_routes(
    State(state): State<AppState>,
    Query(req): Query<RoutesRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    if req.from.is_empty() || req.to.is_empty() {
        return Err(AppError::BadRequest {
            message: "both from and to stations are required".to_string(),
        });
    }

    // Enumeration is exhaustive, so keep it off the async workers
    let graph = Arc::clone(&state.graph);
    let routes = tokio::task::spawn_blocking(move || graph.find_all_routes(&req.from, &req.to))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("route search failed: {e}"),
        })??;

    Ok(Json(RoutesResponse {
        routes: routes.into_iter().map(Into::into).collect(),
    }))
}

/// Lines and direct connections of one station.
async fn station_details(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationDetailsResponse>, AppError> {
    let details = state.graph.station_details(&name)?;
    Ok(Json(details.into()))
}

/// Stations served by more than one line.
async fn intersections(State(state): State<AppState>) -> Json<IntersectionsResponse> {
    let intersections = state
        .graph
        .find_intersections()
        .into_iter()
        .map(Into::into)
        .collect();

    Json(IntersectionsResponse { intersections })
}

/// First and last stop of every non-empty line.
async fn terminals(State(state): State<AppState>) -> Json<TerminalsResponse> {
    let terminals = state
        .graph
        .find_terminals()
        .into_iter()
        .map(Into::into)
        .collect();

    Json(TerminalsResponse { terminals })
}

/// First and last stop of one line.
async fn line_terminals(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TerminalResult>, AppError> {
    let (first, last) = state.graph.lines().terminals_of(&name)?;

    Ok(Json(TerminalResult {
        line: name,
        first: state.graph.station_name(first).to_string(),
        last: state.graph.station_name(last).to_string(),
    }))
}

/// Closest intersection by hop count.
async fn nearest_intersection(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<NearestIntersectionResponse>, AppError> {
    let nearest = state.graph.nearest_intersection(&name)?;
    Ok(Json(nearest.into()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        let message = e.to_string();
        match e {
            NetworkError::StationNotFound(_)
            | NetworkError::LineNotFound(_)
            | NetworkError::NoIntersectionReachable(_) => AppError::NotFound { message },
            NetworkError::EmptyLine(_) => AppError::Unprocessable { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, error = %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
