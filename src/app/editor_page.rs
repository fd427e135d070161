use super::{App, PageError};
use crate::domain::{Note, NoteId};
use crate::nav::{Route, UnsavedChangesGuard};
use crate::store::Subscription;
use crate::ui::{NoteEditor, Renderer};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// The create/edit form, guarded against losing unsaved edits.
///
/// While mounted the page mirrors the store's `loading` flag into the editor
/// and keeps an unsaved-changes guard on the router. Dropping the page
/// removes both.
pub struct EditorPage {
    app: App,
    editor: Arc<Mutex<NoteEditor>>,
    guard: UnsavedChangesGuard,
    _subscription: Subscription,
}

impl EditorPage {
    /// Opens the form for a new note, or for the stored note `id`.
    pub fn mount(app: &App, id: Option<&NoteId>) -> Result<Self, PageError> {
        let mut editor = match id {
            Some(id) => {
                let note = app
                    .store()
                    .note(id)
                    .ok_or_else(|| PageError::NotFound { id: id.clone() })?;
                NoteEditor::for_note(&note)
            }
            None => NoteEditor::new(),
        };
        editor.set_external_saving(app.store().snapshot().loading);
        let editor = Arc::new(Mutex::new(editor));

        let weak = Arc::downgrade(&editor);
        let subscription = app.store().subscribe(move |state| {
            if let Some(editor) = weak.upgrade() {
                editor.lock().set_external_saving(state.loading);
            }
        });

        let weak = Arc::downgrade(&editor);
        let mut guard = UnsavedChangesGuard::new(
            move || weak.upgrade().is_some_and(|e| e.lock().is_dirty()),
            Arc::clone(app.confirm()),
        );
        guard.attach(app.router())?;

        Ok(Self {
            app: app.clone(),
            editor,
            guard,
            _subscription: subscription,
        })
    }

    /// Reads the editor.
    pub fn view<R>(&self, f: impl FnOnce(&NoteEditor) -> R) -> R {
        f(&self.editor.lock())
    }

    /// Changes the editor. Do not navigate from inside `f`.
    pub fn edit<R>(&self, f: impl FnOnce(&mut NoteEditor) -> R) -> R {
        f(&mut self.editor.lock())
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_attached()
    }

    /// Submits the form through the store, then shows the saved note.
    ///
    /// The editor lock is not held while the store call is outstanding, so
    /// the `loading` mirror and the guard keep working.
    pub async fn save(&self) -> Result<Note, PageError> {
        let (input, id) = {
            let mut editor = self.editor.lock();
            let input = editor.begin_submit()?;
            (input, editor.note_id().cloned())
        };

        let store = self.app.store();
        let result = match &id {
            Some(id) => store.update_note(id, input.title(), input.content()).await,
            None => store.add_note(input.title(), input.content()).await,
        };
        self.editor.lock().finish_submit(result.is_ok());
        let note = result?;

        debug!(id = %note.id(), "saved from editor");
        self.app.router().go(Route::Note(note.id().clone()));
        Ok(note)
    }

    pub fn render(&self, renderer: &Renderer) -> anyhow::Result<String> {
        renderer.editor(&self.editor.lock())
    }
}
