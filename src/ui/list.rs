//! Sidebar note list: row view models and the delete flow.

use crate::domain::{Note, NoteId};
use crate::nav::{Confirm, Route};
use crate::store::{DeleteOutcome, NotesStore, StoreResult};
use serde::Serialize;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Shown when the collection is empty.
pub const EMPTY_MESSAGE: &str = "No notes yet. Create your first note to get started.";

/// Title shown for notes without one.
pub const UNTITLED: &str = "Untitled";

/// Snippet shown for notes without content.
pub const NO_CONTENT: &str = "No content";

const SNIPPET_LINES: usize = 2;
const SNIPPET_CHARS: usize = 120;

/// One rendered row of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteRow {
    pub id: NoteId,
    pub short_id: String,
    pub title: String,
    pub snippet: String,
    pub has_content: bool,
    pub href: String,
    pub selected: bool,
    pub deleting: bool,
}

impl NoteRow {
    /// Label of the row's delete control.
    pub fn delete_label(&self) -> &'static str {
        if self.deleting { "…" } else { "✕" }
    }
}

/// Result of [`NoteList::request_delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteRequest {
    /// The user declined the confirmation.
    Declined,
    /// A delete for this id is already running; nothing was asked.
    InProgress,
    /// The store finished the delete.
    Completed(DeleteOutcome),
}

/// The note list component.
///
/// Clones share the set of ids with a delete in flight, so every handle sees
/// the same disabled rows.
#[derive(Debug, Clone)]
pub struct NoteList {
    heading: String,
    create_href: String,
    deleting: Arc<Mutex<HashSet<NoteId>>>,
}

impl Default for NoteList {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteList {
    pub fn new() -> Self {
        Self {
            heading: "Notes".to_string(),
            create_href: Route::NewNote.path(),
            deleting: Arc::default(),
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn create_href(&self) -> &str {
        &self.create_href
    }

    /// Returns true while a delete for `id` is in flight.
    pub fn is_deleting(&self, id: &NoteId) -> bool {
        self.deleting.lock().contains(id)
    }

    /// Builds rows for `notes`, highlighting the one matching `current`
    /// (the route's `id` parameter).
    pub fn rows(&self, notes: &[Note], current: Option<&NoteId>) -> Vec<NoteRow> {
        let deleting = self.deleting.lock();
        notes
            .iter()
            .map(|note| {
                let snippet = snippet(note.content());
                NoteRow {
                    id: note.id().clone(),
                    short_id: note.id().short().to_string(),
                    title: if note.title().trim().is_empty() {
                        UNTITLED.to_string()
                    } else {
                        note.title().to_string()
                    },
                    has_content: snippet.is_some(),
                    snippet: snippet.unwrap_or_else(|| NO_CONTENT.to_string()),
                    href: Route::Note(note.id().clone()).path(),
                    selected: current == Some(note.id()),
                    deleting: deleting.contains(note.id()),
                }
            })
            .collect()
    }

    /// Confirms with the user, then deletes through the store.
    ///
    /// Only one delete per id may run at a time; other ids stay deletable.
    pub async fn request_delete(
        &self,
        store: &NotesStore,
        confirm: &dyn Confirm,
        id: &NoteId,
    ) -> StoreResult<DeleteRequest> {
        if self.is_deleting(id) {
            return Ok(DeleteRequest::InProgress);
        }

        let title = store.note(id).map(|n| n.title().to_string());
        if !confirm.confirm(&delete_prompt(title.as_deref(), id)) {
            debug!(%id, "delete declined");
            return Ok(DeleteRequest::Declined);
        }

        let Some(_mark) = DeletingMark::claim(&self.deleting, id) else {
            return Ok(DeleteRequest::InProgress);
        };
        let outcome = store.delete_note(id).await?;
        Ok(DeleteRequest::Completed(outcome))
    }
}

/// Keeps an id in the deleting set until dropped, including on failure.
struct DeletingMark<'a> {
    set: &'a Mutex<HashSet<NoteId>>,
    id: NoteId,
}

impl<'a> DeletingMark<'a> {
    fn claim(set: &'a Mutex<HashSet<NoteId>>, id: &NoteId) -> Option<Self> {
        set.lock().insert(id.clone()).then(|| Self {
            set,
            id: id.clone(),
        })
    }
}

impl Drop for DeletingMark<'_> {
    fn drop(&mut self) {
        self.set.lock().remove(&self.id);
    }
}

/// Confirmation text for deleting a note.
pub fn delete_prompt(title: Option<&str>, id: &NoteId) -> String {
    let label = match title.map(str::trim) {
        Some(t) if !t.is_empty() => format!("“{t}”"),
        _ => format!("#{id}"),
    };
    format!("Delete note {label}? This cannot be undone.")
}

/// First non-blank lines of the content, joined and truncated.
fn snippet(content: &str) -> Option<String> {
    let text = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(SNIPPET_LINES)
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        None
    } else {
        Some(truncate_str(&text, SNIPPET_CHARS))
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
