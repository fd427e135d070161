//! Session wiring: the shared store, router and list, plus the pages that
//! mount on top of them.

mod editor_page;
mod list_page;

pub use editor_page::EditorPage;
pub use list_page::ListPage;

use crate::backend::NoteBackend;
use crate::domain::NoteId;
use crate::nav::{Confirm, GuardError, Route, Router};
use crate::store::{NotesStore, StoreError};
use crate::ui::{NoteList, SubmitError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors surfaced by pages.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Guard(#[from] GuardError),

    #[error("Note not found: {id}")]
    NotFound { id: NoteId },
}

/// One client session.
///
/// Cloning shares the same store, router and list.
#[derive(Clone)]
pub struct App {
    store: NotesStore,
    router: Router,
    list: NoteList,
    confirm: Arc<dyn Confirm>,
}

impl App {
    /// Creates the session state over `backend`, starting at `/notes`.
    ///
    /// Nothing is loaded yet; call [`NotesStore::load_notes`] through
    /// [`store`](Self::store).
    pub fn start(backend: Arc<dyn NoteBackend>, confirm: Arc<dyn Confirm>) -> Self {
        info!("notes session started");
        Self {
            store: NotesStore::new(backend),
            router: Router::new(Route::Notes),
            list: NoteList::new(),
            confirm,
        }
    }

    pub fn store(&self) -> &NotesStore {
        &self.store
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn list(&self) -> &NoteList {
        &self.list
    }

    pub fn confirm(&self) -> &Arc<dyn Confirm> {
        &self.confirm
    }

    /// Ends the session. Outstanding store requests are ignored when they
    /// complete.
    pub fn shutdown(&self) {
        self.store.close();
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("store", &self.store)
            .field("route", &self.router.current())
            .finish()
    }
}
