//! In-memory backend, used for tests, benchmarks and ephemeral sessions.

use super::{BackendError, BackendResult, NoteBackend};
use crate::domain::{Note, NoteId, NoteInput};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// A backend that keeps notes in a vector.
///
/// Failures can be injected with [`fail_next`](Self::fail_next): each queued
/// reason makes the next call (of any kind) fail with
/// [`BackendError::Unavailable`].
#[derive(Debug, Default)]
pub struct MemoryBackend {
    notes: Mutex<Vec<Note>>,
    failures: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with notes.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
            ..Default::default()
        }
    }

    /// Makes the next call fail with the given reason.
    pub fn fail_next(&self, reason: impl Into<String>) {
        self.failures.lock().push_back(reason.into());
    }

    /// Returns how many calls the backend has received.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns a copy of the stored notes.
    pub fn stored(&self) -> Vec<Note> {
        self.notes.lock().clone()
    }

    fn enter(&self, op: &str) -> BackendResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failures.lock().pop_front() {
            Some(reason) => {
                debug!(op, %reason, "injected backend failure");
                Err(BackendError::Unavailable(reason))
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NoteBackend for MemoryBackend {
    async fn list(&self) -> BackendResult<Vec<Note>> {
        self.enter("list")?;
        Ok(self.stored())
    }

    async fn create(&self, input: &NoteInput) -> BackendResult<Note> {
        self.enter("create")?;
        let note = Note::from_input(NoteId::generate(), input, Utc::now());
        self.notes.lock().push(note.clone());
        Ok(note)
    }

    async fn update(&self, id: &NoteId, input: &NoteInput) -> BackendResult<Note> {
        self.enter("update")?;
        let mut notes = self.notes.lock();
        let slot = notes
            .iter_mut()
            .find(|n| n.id() == id)
            .ok_or_else(|| BackendError::NotFound { id: id.clone() })?;
        *slot = Note::from_input(id.clone(), input, Utc::now());
        Ok(slot.clone())
    }

    async fn delete(&self, id: &NoteId) -> BackendResult<()> {
        self.enter("delete")?;
        self.notes.lock().retain(|n| n.id() != id);
        Ok(())
    }
}
