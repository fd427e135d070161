//! The notes store: authoritative client-side state plus CRUD actions.
//!
//! A [`NotesStore`] is created once per session and shared by cloning the
//! handle. Every state change happens in a single locked transition followed
//! by one notification to subscribers, so listeners never observe a half
//! applied update. Backend actions produce exactly two transitions: one when
//! the request starts and one when it settles.

mod actions;
mod error;
mod state;
mod subscription;


pub use actions::DeleteOutcome;
pub use error::{Action, StoreError, StoreResult};
pub use state::StoreState;
pub use subscription::Subscription;

use crate::backend::NoteBackend;
use crate::domain::{Banner, Note, NoteId};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use subscription::Listeners;
use tracing::{info, warn};

/// Shared handle to the notes store.
#[derive(Clone)]
pub struct NotesStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    backend: Arc<dyn NoteBackend>,
    shared: Mutex<Shared>,
    listeners: Arc<Listeners>,
}

/// Mutable store internals. `state` is what subscribers see.
#[derive(Default)]
struct Shared {
    state: StoreState,
    pending: usize,
    in_flight: HashSet<NoteId>,
    closed: bool,
}

impl Shared {
    fn start(&mut self, target: Option<&NoteId>) {
        self.pending += 1;
        self.state.loading = true;
        if let Some(id) = target {
            self.in_flight.insert(id.clone());
        }
    }

    fn end(&mut self, target: Option<&NoteId>) {
        self.pending = self.pending.saturating_sub(1);
        self.state.loading = self.pending > 0;
        if let Some(id) = target {
            self.in_flight.remove(id);
        }
    }

    fn succeed(&mut self, message: &str) {
        self.state.error = None;
        self.state.banner = Some(Banner::success(message));
    }

    /// Records a failure in state and hands the error back.
    ///
    /// `Busy` only replaces the banner: the earlier request is still running
    /// and nothing has failed yet.
    fn reject(&mut self, err: StoreError) -> StoreError {
        warn!(%err, "store action failed");
        let message = err.to_string();
        if matches!(err, StoreError::Busy { .. }) {
            self.state.banner = Some(Banner::info(message));
        } else {
            self.state.banner = Some(Banner::error(message.clone()));
            self.state.error = Some(message);
        }
        err
    }
}

impl NotesStore {
    /// Creates a store over the given backend with empty state.
    pub fn new(backend: Arc<dyn NoteBackend>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                backend,
                shared: Mutex::new(Shared::default()),
                listeners: Arc::new(Listeners::default()),
            }),
        }
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.inner.shared.lock().state.clone()
    }

    /// Returns a copy of the note with the given id.
    pub fn note(&self, id: &NoteId) -> Option<Note> {
        self.inner.shared.lock().state.note(id).cloned()
    }

    /// Registers a listener called with the new state after every change.
    ///
    /// Listeners run on the task that made the change, after the store lock
    /// is released, so they may read the store.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&StoreState) + Send + Sync + 'static,
    {
        let id = self.inner.listeners.add(Arc::new(listener));
        Subscription::new(id, &self.inner.listeners)
    }

    /// Returns the number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.len()
    }

    /// Marks a note as selected. Purely local; the id need not be loaded.
    pub fn select_note(&self, id: NoteId) -> StoreResult<()> {
        self.apply(|s| s.state.selected_id = Some(id))
    }

    /// Clears the selection.
    pub fn clear_selection(&self) -> StoreResult<()> {
        self.apply(|s| s.state.selected_id = None)
    }

    /// Hides the current banner.
    pub fn dismiss_banner(&self) -> StoreResult<()> {
        self.apply(|s| s.state.banner = None)
    }

    /// Ends the session: drops all subscribers and state.
    ///
    /// Backend calls still outstanding run to completion, but their results
    /// are discarded and the awaiting action returns [`StoreError::Closed`].
    pub fn close(&self) {
        {
            let mut shared = self.inner.shared.lock();
            if shared.closed {
                return;
            }
            *shared = Shared {
                closed: true,
                ..Shared::default()
            };
        }
        self.inner.listeners.clear();
        info!("notes session closed");
    }

    /// Returns true once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.shared.lock().closed
    }

    /// Runs one state transition and notifies subscribers.
    fn apply<R>(&self, f: impl FnOnce(&mut Shared) -> R) -> StoreResult<R> {
        let (result, snapshot) = {
            let mut shared = self.inner.shared.lock();
            if shared.closed {
                return Err(StoreError::Closed);
            }
            let result = f(&mut shared);
            (result, shared.state.clone())
        };

        for listener in self.inner.listeners.current() {
            listener(&snapshot);
        }
        Ok(result)
    }

    /// Records a failure that happens before any backend call.
    fn reject(&self, err: StoreError) -> StoreError {
        self.apply(|s| s.reject(err)).unwrap_or_else(|closed| closed)
    }
}

impl std::fmt::Debug for NotesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shared = self.inner.shared.lock();
        f.debug_struct("NotesStore")
            .field("notes", &shared.state.notes.len())
            .field("pending", &shared.pending)
            .field("closed", &shared.closed)
            .finish()
    }
}
