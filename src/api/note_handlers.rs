//! API handlers for notes

use super::handlers::{AppError, NotesState};
use crate::notes::Note;
use axum::{
    extract::{FromRequest, Path, Request, State},
    http::{header, StatusCode},
    Form, Json,
};
use serde::Deserialize;

// ============================================================================
// Request Types
// ============================================================================

/// Body posted to `/write`, either by the upload form or as JSON.
///
/// Fields are optional so a missing field is reported as 400 by the handler
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize, Default)]
pub struct WriteNoteForm {
    pub note_name: Option<String>,
    pub note: Option<String>,
}

/// `/write` body extractor: JSON when the content type says so, otherwise a
/// urlencoded form. Every rejection (wrong content type, unreadable body,
/// duplicated field) is a 400.
pub struct WriteNote(pub WriteNoteForm);

impl<S> FromRequest<S> for WriteNote
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let form = if is_json {
            Json::<WriteNoteForm>::from_request(req, state)
                .await
                .map(|Json(form)| form)
                .map_err(|e| AppError::BadRequest(e.body_text()))?
        } else {
            Form::<WriteNoteForm>::from_request(req, state)
                .await
                .map(|Form(form)| form)
                .map_err(|e| AppError::BadRequest(e.body_text()))?
        };

        Ok(Self(form))
    }
}

fn required(field: Option<String>, label: &str) -> Result<String, AppError> {
    field
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Missing field: {}", label)))
}

// ============================================================================
// Handlers
// ============================================================================

/// Get the text of a note
pub async fn get_note(
    State(state): State<NotesState>,
    Path(name): Path<String>,
) -> Result<String, AppError> {
    state.store.read(&name).await.map_err(AppError::lookup)
}

/// List every stored note
pub async fn list_notes(State(state): State<NotesState>) -> Result<Json<Vec<Note>>, AppError> {
    let notes = state.store.list_all().await?;
    Ok(Json(notes))
}

/// Create a note from the upload form or a JSON body. Never overwrites.
pub async fn create_note(
    State(state): State<NotesState>,
    WriteNote(form): WriteNote,
) -> Result<StatusCode, AppError> {
    let name = required(form.note_name, "note_name")?;
    let text = required(form.note, "note")?;

    state.store.create(&name, &text).await.map_err(|e| {
        tracing::warn!("Rejected create for {:?}: {}", name, e);
        AppError::from(e)
    })?;

    tracing::info!("Created note {:?}", name);
    Ok(StatusCode::CREATED)
}

/// Replace the text of an existing note with the raw request body
pub async fn update_note(
    State(state): State<NotesState>,
    Path(name): Path<String>,
    text: String,
) -> Result<StatusCode, AppError> {
    state
        .store
        .write(&name, &text)
        .await
        .map_err(AppError::lookup)?;

    tracing::info!("Updated note {:?}", name);
    Ok(StatusCode::OK)
}

/// Delete a note
pub async fn delete_note(
    State(state): State<NotesState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state.store.delete(&name).await.map_err(AppError::lookup)?;

    tracing::info!("Deleted note {:?}", name);
    Ok(StatusCode::OK)
}
