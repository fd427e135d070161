//! Read-only view of a single note.

use super::list::UNTITLED;
use crate::domain::{Note, NoteId};
use crate::nav::Route;
use crate::store::StoreState;
use serde::Serialize;

/// Timestamp format shown under the title.
const UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// View model for the note detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDetail {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub updated: String,
    pub edit_href: String,
    pub back_href: String,
}

impl NoteDetail {
    pub fn from_note(note: &Note) -> Self {
        let title = if note.title().trim().is_empty() {
            UNTITLED.to_string()
        } else {
            note.title().to_string()
        };
        Self {
            id: note.id().clone(),
            title,
            content: note.content().to_string(),
            updated: note.updated_at().format(UPDATED_FORMAT).to_string(),
            edit_href: Route::EditNote(note.id().clone()).path(),
            back_href: Route::Notes.path(),
        }
    }

    /// Finds `id` in the store state. `None` renders as "not found".
    pub fn lookup(state: &StoreState, id: &NoteId) -> Option<Self> {
        state.note(id).map(Self::from_note)
    }
}
