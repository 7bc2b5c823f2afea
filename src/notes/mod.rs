//! Notes module
//!
//! Plain-text notes keyed by name, persisted one file per note (`<name>.txt`)
//! in a store root directory. Routing code talks to the [`NoteStore`] trait;
//! [`FsNoteStore`] is the production backend and [`MockNoteStore`] keeps
//! everything in memory for tests.

pub mod fs_store;
pub mod mock;
pub mod models;
pub mod traits;

pub use fs_store::FsNoteStore;
pub use mock::MockNoteStore;
pub use models::*;
pub use traits::{NoteError, NoteStore};
