//! Persistence backends the notes store delegates to.

mod memory;
mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use crate::domain::{Note, NoteId, NoteInput};
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in a persistence backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The note to update does not exist.
    #[error("note not found: {id}")]
    NotFound { id: NoteId },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored record could not be turned back into a note.
    #[error("corrupt record '{id}': {reason}")]
    Corrupt { id: String, reason: String },

    /// The backend could not serve the request.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Asynchronous note persistence.
///
/// Backends mint ids and `updated_at` timestamps. Deleting an id that does
/// not exist succeeds; updating one fails with [`BackendError::NotFound`].
#[async_trait]
pub trait NoteBackend: Send + Sync {
    /// Returns every note in insertion order.
    async fn list(&self) -> BackendResult<Vec<Note>>;

    /// Stores a new note and returns it with its assigned id.
    async fn create(&self, input: &NoteInput) -> BackendResult<Note>;

    /// Replaces a note's title and content, refreshing its timestamp.
    async fn update(&self, id: &NoteId, input: &NoteInput) -> BackendResult<Note>;

    /// Removes a note.
    async fn delete(&self, id: &NoteId) -> BackendResult<()>;
}
