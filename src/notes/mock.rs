//! In-memory mock implementation of NoteStore for testing without a store root.

use super::models::{is_valid_name, Note};
use super::traits::{NoteError, NoteStore, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory mock implementation of NoteStore.
///
/// Notes live in a `HashMap` behind an async `RwLock`; create holds the write
/// lock across its existence check so it stays exclusive like the filesystem
/// backend.
#[derive(Default)]
pub struct MockNoteStore {
    notes: RwLock<HashMap<String, String>>,
}

impl MockNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `(name, text)` pairs
    pub fn with_notes<'a>(notes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            notes: RwLock::new(
                notes
                    .into_iter()
                    .map(|(name, text)| (name.to_string(), text.to_string()))
                    .collect(),
            ),
        }
    }

    /// Number of stored notes
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

fn check_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(NoteError::InvalidName(name.to_string()))
    }
}

#[async_trait]
impl NoteStore for MockNoteStore {
    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        check_name(name)?;
        Ok(self.notes.read().await.contains_key(name))
    }

    async fn read(&self, name: &str) -> Result<String> {
        check_name(name)?;
        self.notes
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| NoteError::NotFound(name.to_string()))
    }

    async fn create(&self, name: &str, text: &str) -> Result<()> {
        check_name(name)?;
        let mut notes = self.notes.write().await;
        if notes.contains_key(name) {
            return Err(NoteError::AlreadyExists(name.to_string()));
        }
        notes.insert(name.to_string(), text.to_string());
        Ok(())
    }

    async fn write(&self, name: &str, text: &str) -> Result<()> {
        check_name(name)?;
        match self.notes.write().await.get_mut(name) {
            Some(existing) => {
                *existing = text.to_string();
                Ok(())
            }
            None => Err(NoteError::NotFound(name.to_string())),
        }
    }

    async fn delete(&self, name: &str) -> Result<()> {
        check_name(name)?;
        self.notes
            .write()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| NoteError::NotFound(name.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Note>> {
        Ok(self
            .notes
            .read()
            .await
            .iter()
            .map(|(name, text)| Note::new(name.clone(), text.clone()))
            .collect())
    }
}
