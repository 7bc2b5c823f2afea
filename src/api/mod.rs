//! HTTP API for the note store

pub mod assets;
pub mod handlers;
pub mod note_handlers;
pub mod openapi;
pub mod routes;

pub use routes::create_router;
