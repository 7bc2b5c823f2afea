//! Shared API state, error mapping and the health check

use crate::notes::{NoteError, NoteStore};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

/// Shared server state
pub struct ServerState {
    pub store: Arc<dyn NoteStore>,
}

/// Shared notes service state
pub type NotesState = Arc<ServerState>;

// ============================================================================
// Health check
// ============================================================================

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler: verifies the store root is reachable.
///
/// Returns:
/// - 200 + `"ok"` if the store root is a readable directory
/// - 503 + `"unhealthy"` otherwise
pub async fn health(State(state): State<NotesState>) -> (StatusCode, Json<HealthResponse>) {
    let store_ok = state.store.health_check().await.unwrap_or(false);

    let (code, status) = if store_ok {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

// ============================================================================
// Error handling
// ============================================================================

/// API error type. Bodies are short plain-text messages.
#[derive(Debug)]
pub enum AppError {
    Internal(anyhow::Error),
    NotFound(String),
    BadRequest(String),
}

impl AppError {
    /// Map a store error raised while looking up an existing note.
    ///
    /// A name that cannot be mapped into the store root has no entry, so it
    /// surfaces as 404 rather than 400.
    pub fn lookup(err: NoteError) -> Self {
        match err {
            NoteError::InvalidName(name) => AppError::NotFound(format!("Note not found: {}", name)),
            other => other.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal(e) => {
                tracing::error!("Storage failure: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, message).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<NoteError> for AppError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::NotFound(_) => AppError::NotFound(err.to_string()),
            // 400 rather than 409, kept for compatibility with existing clients
            NoteError::AlreadyExists(_) => AppError::BadRequest(err.to_string()),
            NoteError::InvalidName(_) => AppError::BadRequest(err.to_string()),
            NoteError::Io(_) => AppError::Internal(err.into()),
        }
    }
}
