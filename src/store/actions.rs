//! Backend-touching store actions.
//!
//! Each action follows the same protocol: one transition registers the
//! request and raises `loading`, the backend call is awaited with no lock
//! held, and one transition applies the result. Completions apply in the
//! order they resolve. Updates and deletes are single-flight per note id.

use super::{Action, NotesStore, StoreError, StoreResult};
use crate::domain::{Banner, Note, NoteId, NoteInput};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// What `delete_note` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The note was removed. If it was selected the caller should navigate
    /// away; the selection itself is left for the caller to clear.
    Deleted { was_selected: bool },
    /// No note with that id was present; nothing was sent to the backend.
    AlreadyAbsent,
}

impl NotesStore {
    /// Fetches the full collection from the backend, replacing `notes`.
    ///
    /// Failures are recorded in `error` and an error banner, and returned.
    pub async fn load_notes(&self) -> StoreResult<()> {
        self.apply(|s| s.start(None))?;
        debug!("loading notes");

        let result = self.inner.backend.list().await;

        self.apply(|s| {
            s.end(None);
            match result {
                Ok(notes) => {
                    s.state.notes = unique_by_id(notes);
                    s.state.error = None;
                    s.state.banner = None;
                    info!(count = s.state.notes.len(), "loaded notes");
                    Ok(())
                }
                Err(err) => Err(s.reject(StoreError::backend(Action::Load, &err))),
            }
        })?
    }

    /// Creates a note and appends it to the collection.
    ///
    /// Invalid input is rejected without calling the backend.
    pub async fn add_note(&self, title: &str, content: &str) -> StoreResult<Note> {
        let input = NoteInput::new(title, content).map_err(|e| self.reject(StoreError::Invalid(e)))?;

        self.apply(|s| s.start(None))?;
        let result = self.inner.backend.create(&input).await;

        self.apply(|s| {
            s.end(None);
            match result {
                Ok(note) if s.state.contains(note.id()) => Err(s.reject(StoreError::Backend {
                    action: Action::Create,
                    message: format!("backend returned an existing id {}", note.id()),
                })),
                Ok(note) => {
                    info!(id = %note.id(), "created note");
                    s.state.notes.push(note.clone());
                    s.succeed("Note created.");
                    Ok(note)
                }
                Err(err) => Err(s.reject(StoreError::backend(Action::Create, &err))),
            }
        })?
    }

    /// Replaces a note's title and content, keeping its position.
    ///
    /// Fails with [`StoreError::NotFound`] if the id is not in the collection
    /// and with [`StoreError::Busy`] if another change to it is outstanding.
    pub async fn update_note(&self, id: &NoteId, title: &str, content: &str) -> StoreResult<Note> {
        let input = NoteInput::new(title, content).map_err(|e| self.reject(StoreError::Invalid(e)))?;

        self.apply(|s| {
            if s.in_flight.contains(id) {
                return Err(s.reject(StoreError::Busy { id: id.clone() }));
            }
            if !s.state.contains(id) {
                return Err(s.reject(StoreError::NotFound { id: id.clone() }));
            }
            s.start(Some(id));
            Ok(())
        })??;

        let result = self.inner.backend.update(id, &input).await;

        self.apply(|s| {
            s.end(Some(id));
            let note = match result {
                Ok(note) if note.id() == id => note,
                Ok(note) => {
                    return Err(s.reject(StoreError::Backend {
                        action: Action::Update,
                        message: format!("backend returned note {} for {}", note.id(), id),
                    }));
                }
                Err(err) => return Err(s.reject(StoreError::backend(Action::Update, &err))),
            };

            // A reload may have dropped the note while the call was out.
            match s.state.notes.iter_mut().find(|n| n.id() == id) {
                Some(slot) => {
                    *slot = note.clone();
                    info!(%id, "updated note");
                    s.succeed("Note updated.");
                    Ok(note)
                }
                None => Err(s.reject(StoreError::NotFound { id: id.clone() })),
            }
        })?
    }

    /// Removes a note.
    ///
    /// Deleting an id that is not in the collection is a successful no-op
    /// reported as [`DeleteOutcome::AlreadyAbsent`] with an info banner.
    pub async fn delete_note(&self, id: &NoteId) -> StoreResult<DeleteOutcome> {
        let started = self.apply(|s| {
            if s.in_flight.contains(id) {
                return Err(s.reject(StoreError::Busy { id: id.clone() }));
            }
            if !s.state.contains(id) {
                debug!(%id, "delete of absent note ignored");
                s.state.banner = Some(Banner::info("Note was already deleted."));
                return Ok(false);
            }
            s.start(Some(id));
            Ok(true)
        })??;

        if !started {
            return Ok(DeleteOutcome::AlreadyAbsent);
        }

        let result = self.inner.backend.delete(id).await;

        self.apply(|s| {
            s.end(Some(id));
            match result {
                Ok(()) => {
                    s.state.notes.retain(|n| n.id() != id);
                    info!(%id, "deleted note");
                    s.succeed("Note deleted.");
                    Ok(DeleteOutcome::Deleted {
                        was_selected: s.state.selected_id.as_ref() == Some(id),
                    })
                }
                Err(err) => Err(s.reject(StoreError::backend(Action::Delete, &err))),
            }
        })?
    }
}

/// Drops later duplicates so the collection stays unique by id.
fn unique_by_id(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::new();
    let total = notes.len();
    let unique: Vec<Note> = notes
        .into_iter()
        .filter(|n| seen.insert(n.id().clone()))
        .collect();
    if unique.len() != total {
        warn!(dropped = total - unique.len(), "backend listed duplicate note ids");
    }
    unique
}
