//! Filesystem-backed note store: one `<name>.txt` file per note in a root directory

use super::models::{file_name_for, is_valid_name, name_from_file_name, Note};
use super::traits::{NoteError, NoteStore, Result};
use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;

/// Prefix and suffix of staging files; never end in `.txt`, so listing skips them
const STAGING_PREFIX: &str = ".";
const STAGING_SUFFIX: &str = ".partial";

/// Note store backed by a directory on the local filesystem.
///
/// Create and update write the full text to a staging file in the root first
/// and then move it into place, so a failed write never leaves a truncated
/// note behind.
pub struct FsNoteStore {
    root: PathBuf,
}

impl FsNoteStore {
    /// Wrap an existing directory without touching the filesystem
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open a store rooted at `root`, creating the directory if missing
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !fs::try_exists(&root).await? {
            tracing::info!("Creating store root {}", root.display());
        }
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        if !is_valid_name(name) {
            return Err(NoteError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(file_name_for(name)))
    }
}

/// Write `text` to a fresh staging file inside `root`.
///
/// The staging file is removed when the returned handle is dropped without
/// being persisted, including on every error path.
fn stage(root: &Path, text: &str) -> std::io::Result<NamedTempFile> {
    let mut staged = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .suffix(STAGING_SUFFIX)
        .tempfile_in(root)?;
    staged.write_all(text.as_bytes())?;
    staged.as_file().sync_all()?;
    Ok(staged)
}

/// Run blocking staging I/O off the async workers
async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| NoteError::Io(std::io::Error::other(e)))?
}

/// Map missing/existing-file I/O errors onto the note taxonomy.
///
/// A directory that happens to carry a note's file name is not a note, so it
/// reads as NotFound, matching `list_all` which skips it.
fn classify(err: std::io::Error, path: &Path, name: &str) -> NoteError {
    match err.kind() {
        ErrorKind::NotFound => NoteError::NotFound(name.to_string()),
        ErrorKind::AlreadyExists => NoteError::AlreadyExists(name.to_string()),
        _ if path.is_dir() => NoteError::NotFound(name.to_string()),
        _ => NoteError::Io(err),
    }
}

#[async_trait]
impl NoteStore for FsNoteStore {
    async fn health_check(&self) -> Result<bool> {
        match fs::metadata(&self.root).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        let path = self.path_for(name)?;
        match fs::metadata(&path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn read(&self, name: &str) -> Result<String> {
        let path = self.path_for(name)?;
        tracing::debug!("Reading note {}", path.display());
        fs::read_to_string(&path)
            .await
            .map_err(|e| classify(e, &path, name))
    }

    async fn create(&self, name: &str, text: &str) -> Result<()> {
        let path = self.path_for(name)?;
        tracing::debug!("Creating note {}", path.display());

        let root = self.root.clone();
        let name = name.to_string();
        let text = text.to_string();
        blocking(move || {
            let staged = stage(&root, &text)?;
            // Links the finished file into place; fails if the name is taken
            staged
                .persist_noclobber(&path)
                .map_err(|e| classify(e.error, &path, &name))?;
            Ok(())
        })
        .await
    }

    async fn write(&self, name: &str, text: &str) -> Result<()> {
        let path = self.path_for(name)?;
        tracing::debug!("Updating note {}", path.display());

        let root = self.root.clone();
        let name = name.to_string();
        let text = text.to_string();
        blocking(move || {
            match std::fs::metadata(&path) {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => return Err(NoteError::NotFound(name)),
                Err(e) => return Err(classify(e, &path, &name)),
            }
            let staged = stage(&root, &text)?;
            // rename(2) replaces the old text in one step
            staged
                .persist(&path)
                .map_err(|e| classify(e.error, &path, &name))?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        tracing::debug!("Deleting note {}", path.display());
        fs::remove_file(&path)
            .await
            .map_err(|e| classify(e, &path, name))
    }

    async fn list_all(&self) -> Result<Vec<Note>> {
        let mut entries = fs::read_dir(&self.root).await?;
        let mut notes = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str().and_then(name_from_file_name) else {
                continue;
            };
            if !entry.file_type().await?.is_file() {
                continue;
            }

            match fs::read_to_string(entry.path()).await {
                Ok(text) => notes.push(Note::new(name, text)),
                // Deleted between enumeration and read
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    tracing::warn!("Skipping non-UTF-8 note file {}", entry.path().display());
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::debug!("Listed {} notes in {}", notes.len(), self.root.display());
        Ok(notes)
    }
}
