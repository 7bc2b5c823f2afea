//! Trait abstraction for note storage

use super::models::Note;
use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by a [`NoteStore`]
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Note already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid note name: {0:?}")]
    InvalidName(String),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NoteError>;

/// Storage backend for notes.
///
/// Every call hits the backend directly; implementations keep no cache.
/// Each mutating operation is a single storage action, so a note is never
/// left half-written by a failed request.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Check whether the backend is reachable
    async fn health_check(&self) -> Result<bool>;

    /// Whether a note named `name` exists
    async fn exists(&self, name: &str) -> Result<bool>;

    /// Read the text of a note. Fails with `NotFound` if absent.
    async fn read(&self, name: &str) -> Result<String>;

    /// Create a note, failing with `AlreadyExists` if one is present.
    ///
    /// The existence check and the write are one atomic step.
    async fn create(&self, name: &str, text: &str) -> Result<()>;

    /// Replace the text of an existing note. Fails with `NotFound` if absent;
    /// never creates.
    async fn write(&self, name: &str, text: &str) -> Result<()>;

    /// Delete a note. Fails with `NotFound` if absent.
    async fn delete(&self, name: &str) -> Result<()>;

    /// All stored notes, in backend enumeration order
    async fn list_all(&self) -> Result<Vec<Note>>;
}
