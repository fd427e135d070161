//! Observable store state.

use crate::domain::{Banner, Note, NoteId};
use serde::Serialize;

/// A snapshot of the store, as seen by subscribers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    /// Notes in insertion order, unique by id
    pub notes: Vec<Note>,
    /// True while at least one backend request is outstanding
    pub loading: bool,
    /// Message of the last failed action, cleared by the next success
    pub error: Option<String>,
    /// Status message from the last completed action
    pub banner: Option<Banner>,
    /// Currently selected note, if any
    pub selected_id: Option<NoteId>,
}

impl StoreState {
    /// Returns the note with the given id.
    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Returns true if a note with the given id is present.
    pub fn contains(&self, id: &NoteId) -> bool {
        self.note(id).is_some()
    }

    /// Returns the selected note, if it is present.
    pub fn selected(&self) -> Option<&Note> {
        self.selected_id.as_ref().and_then(|id| self.note(id))
    }
}
