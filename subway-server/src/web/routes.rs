//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::domain::{LineId, StationId};
use crate::service::ServiceError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", post(create_station).get(list_stations))
        .route("/stations/:id", delete(delete_station))
        .route("/lines", post(create_line).get(list_lines))
        .route(
            "/lines/:id",
            get(get_line).put(update_line).delete(delete_line),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create a station.
///
/// Returns 201 with a Location header pointing at the new resource.
async fn create_station(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let req: CreateStationRequest = parse_json(&body)?;
    let station = state.stations.create(&req.name)?;

    let location = format!("/stations/{}", station.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StationResponse::from_station(&station)),
    )
        .into_response())
}

/// List all stations.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state.stations.list();
    Json(stations.iter().map(StationResponse::from_station).collect())
}

/// Delete a station by id.
async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.stations.delete(StationId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a line.
///
/// Returns 201 with a Location header pointing at the new resource.
async fn create_line(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let req: CreateLineRequest = parse_json(&body)?;
    let line = state.lines.create(&req.name, &req.color)?;

    let location = format!("/lines/{}", line.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(LineResponse::from_line(&line)),
    )
        .into_response())
}

/// List all lines.
async fn list_lines(State(state): State<AppState>) -> Json<Vec<LineResponse>> {
    let lines = state.lines.list();
    Json(lines.iter().map(LineResponse::from_line).collect())
}

/// Fetch a single line by id.
async fn get_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state.lines.get(LineId(id))?;
    Ok(Json(LineResponse::from_line(&line)))
}

/// Overwrite a line's name and color.
async fn update_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Bytes,
) -> Result<Json<LineResponse>, AppError> {
    let req: UpdateLineRequest = parse_json(&body)?;
    let line = state.lines.update(LineId(id), &req.name, &req.color)?;
    Ok(Json(LineResponse::from_line(&line)))
}

/// Delete a line by id.
async fn delete_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.lines.delete(LineId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Parse a JSON request body, logging the body on failure.
fn parse_json<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(body = %String::from_utf8_lossy(body), "JSON parse error: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::NotFound { .. } => AppError::NotFound { message },
            // Duplicate names and validation failures are both client
            // errors; the two resources share one mapping.
            _ => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
