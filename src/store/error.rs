//! Store error types.

use crate::backend::BackendError;
use crate::domain::{FieldErrors, NoteId};
use std::fmt;
use thiserror::Error;

/// The backend-touching store actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Load => write!(f, "load notes"),
            Action::Create => write!(f, "create note"),
            Action::Update => write!(f, "update note"),
            Action::Delete => write!(f, "delete note"),
        }
    }
}

/// Errors recorded by store actions.
///
/// Messages are user-facing: they become the store's `error` and banner text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The input failed field validation.
    #[error("{0}")]
    Invalid(FieldErrors),

    /// The target note is not in the collection.
    #[error("Note not found: {id}")]
    NotFound { id: NoteId },

    /// Another update or delete for the same note is still outstanding.
    #[error("Another change to note {id} is still in progress.")]
    Busy { id: NoteId },

    /// The persistence backend rejected the request.
    #[error("Failed to {action}: {message}")]
    Backend { action: Action, message: String },

    /// The session this store belongs to has ended.
    #[error("The notes session has ended.")]
    Closed,
}

impl StoreError {
    pub(crate) fn backend(action: Action, err: &BackendError) -> Self {
        StoreError::Backend {
            action,
            message: err.to_string(),
        }
    }
}

/// Result type for store actions.
pub type StoreResult<T> = Result<T, StoreError>;
