use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::types::*;
use crate::error::RummageError;
use crate::models::*;

use super::router::AppState;

/// Error wrapper for API handlers
pub enum ApiError {
    Rummage(RummageError),
    NotFound(String),
}

impl From<RummageError> for ApiError {
    fn from(e: RummageError) -> Self {
        ApiError::Rummage(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Rummage(e) => {
                let status = match &e {
                    RummageError::CapacityExceeded { .. } => StatusCode::INSUFFICIENT_STORAGE,
                    RummageError::IndexNotFound(_) => StatusCode::NOT_FOUND,
                    e if e.is_client_error() => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, e.error_type(), e.to_string())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Create an index (idempotent)
pub async fn create_index(
    State(state): State<Arc<AppState>>,
    Path(index): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.create_index(&index)?;
    Ok((
        StatusCode::CREATED,
        Json(CreateIndexResponse {
            index,
            acknowledged: true,
        }),
    ))
}

/// Store a document, creating the index if needed
pub async fn put_document(
    State(state): State<Arc<AppState>>,
    Path(index): Path<String>,
    Json(req): Json<PutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = req.id.clone();
    state.service.put_request(&index, req)?;
    Ok((StatusCode::CREATED, Json(PutResponse { index, id })))
}

/// Get a document by ID
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path((index, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    match state.service.get(&index, &id) {
        Some(doc) => Ok(Json(doc)),
        None => Err(ApiError::NotFound(format!(
            "Document {} not found in index {}",
            id, index
        ))),
    }
}

/// Query an index. An unknown index returns an empty page.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Path(index): Path<String>,
    Json(req): Json<QueryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.service.search(&index, &req)?;
    Ok(Json(response))
}

/// Drop every document in an index
pub async fn reset_index(
    State(state): State<Arc<AppState>>,
    Path(index): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.service.reset(&index) {
        ResetStatus::Ok => Ok(Json(ResetResponse {
            index,
            status: "OK".to_string(),
        })),
        ResetStatus::NotFound => Err(RummageError::IndexNotFound(index).into()),
    }
}

/// Inspect an index
pub async fn inspect_index(
    State(state): State<Arc<AppState>>,
    Path(index): Path<String>,
) -> impl IntoResponse {
    Json(state.service.inspect(&index))
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        indices: state.service.index_names().len(),
    })
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();
    let metric_families = state.service.metrics().registry().gather();
    let mut buffer = vec![];
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| RummageError::Internal(format!("metrics encoding failed: {}", e)))?;

    Ok((
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4",
        )],
        buffer,
    ))
}
