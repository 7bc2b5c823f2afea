//! API route definitions

use super::assets;
use super::handlers::{self, NotesState};
use super::note_handlers;
use super::openapi;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: NotesState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // ====================================================================
        // Notes
        // ====================================================================
        .route("/notes", get(note_handlers::list_notes))
        .route(
            "/notes/{name}",
            get(note_handlers::get_note)
                .put(note_handlers::update_note)
                .delete(note_handlers::delete_note),
        )
        .route("/write", post(note_handlers::create_note))
        // ====================================================================
        // Static assets & docs
        // ====================================================================
        .route("/UploadForm.html", get(assets::upload_form))
        .route("/docs", get(assets::docs_page))
        .route("/openapi.json", get(openapi::openapi_spec))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
