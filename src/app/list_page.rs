use super::{App, PageError};
use crate::domain::NoteId;
use crate::nav::{Route, Router};
use crate::store::{DeleteOutcome, StoreState, Subscription};
use crate::ui::{DeleteRequest, NoteList, NoteRow, Renderer};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// The sidebar list, kept current with the store while mounted.
pub struct ListPage {
    app: App,
    rows: Arc<Mutex<Vec<NoteRow>>>,
    _subscription: Subscription,
}

fn build_rows(list: &NoteList, router: &Router, state: &StoreState) -> Vec<NoteRow> {
    let current = router.current();
    list.rows(&state.notes, current.note_id())
}

impl ListPage {
    /// Renders the current state and subscribes to later changes.
    pub fn mount(app: &App) -> Self {
        let rows = Arc::new(Mutex::new(build_rows(
            app.list(),
            app.router(),
            &app.store().snapshot(),
        )));

        let weak = Arc::downgrade(&rows);
        let list = app.list().clone();
        let router = app.router().clone();
        let subscription = app.store().subscribe(move |state| {
            if let Some(rows) = weak.upgrade() {
                *rows.lock() = build_rows(&list, &router, state);
            }
        });

        Self {
            app: app.clone(),
            rows,
            _subscription: subscription,
        }
    }

    /// Returns the rows as of the last store change or refresh.
    pub fn rows(&self) -> Vec<NoteRow> {
        self.rows.lock().clone()
    }

    /// Rebuilds rows after something outside the store changed, such as the
    /// current route.
    pub fn refresh(&self) {
        let rows = build_rows(self.app.list(), self.app.router(), &self.app.store().snapshot());
        *self.rows.lock() = rows;
    }

    /// Runs the list's delete flow for `id`.
    ///
    /// If the deleted note is the one being viewed or edited, the selection
    /// is cleared and the router returns to `/notes`.
    pub async fn delete(&self, id: &NoteId) -> Result<DeleteRequest, PageError> {
        let app = &self.app;
        let request = app
            .list()
            .request_delete(app.store(), app.confirm().as_ref(), id)
            .await?;

        if let DeleteRequest::Completed(DeleteOutcome::Deleted { was_selected }) = request {
            if was_selected {
                app.store().clear_selection()?;
            }
            if app.router().current().note_id() == Some(id) {
                debug!(%id, "current note deleted, leaving page");
                app.router().go(Route::Notes);
            }
            self.refresh();
        }
        Ok(request)
    }

    pub fn render(&self, renderer: &Renderer) -> anyhow::Result<String> {
        renderer.list(self.app.list(), &self.rows())
    }
}
