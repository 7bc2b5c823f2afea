//! Test helper state builders
#![allow(dead_code)]

use crate::api::handlers::{NotesState, ServerState};
use crate::notes::{FsNoteStore, MockNoteStore, NoteStore};
use std::path::Path;
use std::sync::Arc;

/// Server state wrapping any store
pub fn state_with_store(store: Arc<dyn NoteStore>) -> NotesState {
    Arc::new(ServerState { store })
}

/// Server state with an empty in-memory store
pub fn mock_state() -> NotesState {
    state_with_store(Arc::new(MockNoteStore::new()))
}

/// Server state sharing the given in-memory store with the caller
pub fn mock_state_with(store: Arc<MockNoteStore>) -> NotesState {
    state_with_store(store)
}

/// Server state backed by a real store root
pub async fn fs_state(root: &Path) -> NotesState {
    let store = FsNoteStore::open(root).await.expect("open store root");
    state_with_store(Arc::new(store))
}
