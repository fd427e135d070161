//! Note editor form state.
//!
//! The editor moves through `Clean → Editing → Invalid → Submitting` and
//! settles in `Saved` or `Failed`, both of which accept input again. While
//! submitting, or while the owner reports an external save in flight, the
//! form is busy: field changes are refused and the submit button reads
//! "Saving…".

use crate::domain::{Field, FieldErrors, Note, NoteId, NoteInput};
use std::future::Future;
use thiserror::Error;

/// Default label of the submit button.
pub const DEFAULT_SUBMIT_LABEL: &str = "Save";

/// Submit button label while busy.
pub const BUSY_LABEL: &str = "Saving…";

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Untouched since it was opened.
    Clean,
    /// The user changed a field.
    Editing,
    /// The last submit failed validation.
    Invalid,
    /// A save is in flight.
    Submitting,
    /// The last save succeeded.
    Saved,
    /// The last save failed.
    Failed,
}

/// Why a submit did not reach the save callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a save is already in progress")]
    Busy,

    #[error("{0}")]
    Invalid(FieldErrors),
}

/// Result of [`NoteEditor::submit`].
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome<E> {
    /// The save callback succeeded.
    Saved,
    /// The save callback failed; entered values are kept.
    Failed(E),
    /// The callback was not invoked.
    Rejected(SubmitError),
}

/// Form state for creating or editing a note.
#[derive(Debug, Clone)]
pub struct NoteEditor {
    note_id: Option<NoteId>,
    title: String,
    content: String,
    saved_title: String,
    saved_content: String,
    errors: FieldErrors,
    state: EditorState,
    external_saving: bool,
    submit_label: String,
}

impl Default for NoteEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteEditor {
    /// Creates an empty form for a new note.
    pub fn new() -> Self {
        Self {
            note_id: None,
            title: String::new(),
            content: String::new(),
            saved_title: String::new(),
            saved_content: String::new(),
            errors: FieldErrors::default(),
            state: EditorState::Clean,
            external_saving: false,
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
        }
    }

    /// Creates a form pre-filled with an existing note.
    pub fn for_note(note: &Note) -> Self {
        Self {
            note_id: Some(note.id().clone()),
            title: note.title().to_string(),
            content: note.content().to_string(),
            saved_title: note.title().to_string(),
            saved_content: note.content().to_string(),
            ..Self::new()
        }
    }

    /// Sets the submit button label.
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Returns the id of the note being edited, if any.
    pub fn note_id(&self) -> Option<&NoteId> {
        self.note_id.as_ref()
    }

    /// Returns the form heading.
    pub fn heading(&self) -> &'static str {
        if self.note_id.is_some() {
            "Edit Note"
        } else {
            "New Note"
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Changes the title. Returns false if the form is busy.
    pub fn set_title(&mut self, value: impl Into<String>) -> bool {
        self.set_field(Field::Title, value.into())
    }

    /// Changes the content. Returns false if the form is busy.
    pub fn set_content(&mut self, value: impl Into<String>) -> bool {
        self.set_field(Field::Content, value.into())
    }

    fn set_field(&mut self, field: Field, value: String) -> bool {
        if self.is_busy() {
            return false;
        }
        if !value.trim().is_empty() {
            self.errors.clear(field);
        }
        match field {
            Field::Title => self.title = value,
            Field::Content => self.content = value,
        }
        self.state = EditorState::Editing;
        true
    }

    /// Mirrors a save in flight elsewhere (e.g. a parent-level request).
    pub fn set_external_saving(&mut self, saving: bool) {
        self.external_saving = saving;
    }

    /// True while submitting locally or saving externally.
    pub fn is_busy(&self) -> bool {
        self.state == EditorState::Submitting || self.external_saving
    }

    /// True if the fields differ from the last saved values.
    pub fn is_dirty(&self) -> bool {
        self.title != self.saved_title || self.content != self.saved_content
    }

    /// Returns the submit button text.
    pub fn submit_text(&self) -> &str {
        if self.is_busy() {
            BUSY_LABEL
        } else {
            &self.submit_label
        }
    }

    /// Validates both fields, recording errors for display.
    pub fn validate(&mut self) -> Result<NoteInput, FieldErrors> {
        match NoteInput::new(&self.title, &self.content) {
            Ok(input) => {
                self.errors = FieldErrors::default();
                Ok(input)
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.state = EditorState::Invalid;
                Err(errors)
            }
        }
    }

    /// Validates and enters `Submitting`.
    ///
    /// On success the caller must invoke its save exactly once and then
    /// report back through [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Result<NoteInput, SubmitError> {
        if self.is_busy() {
            return Err(SubmitError::Busy);
        }
        let input = self.validate().map_err(SubmitError::Invalid)?;
        self.state = EditorState::Submitting;
        Ok(input)
    }

    /// Leaves `Submitting`. A successful save makes the current values the
    /// new clean baseline; a failed one keeps them as unsaved edits.
    pub fn finish_submit(&mut self, saved: bool) {
        if saved {
            self.saved_title = self.title.clone();
            self.saved_content = self.content.clone();
            self.state = EditorState::Saved;
        } else {
            self.state = EditorState::Failed;
        }
    }

    /// Validates, runs `save` once with the trimmed input, and settles.
    pub async fn submit<F, Fut, E>(&mut self, save: F) -> SubmitOutcome<E>
    where
        F: FnOnce(NoteInput) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let input = match self.begin_submit() {
            Ok(input) => input,
            Err(err) => return SubmitOutcome::Rejected(err),
        };

        let result = save(input).await;
        self.finish_submit(result.is_ok());
        match result {
            Ok(()) => SubmitOutcome::Saved,
            Err(err) => SubmitOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldError;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn filled(title: &str, content: &str) -> NoteEditor {
        let mut editor = NoteEditor::new();
        editor.set_title(title);
        editor.set_content(content);
        editor
    }

    #[tokio::test]
    async fn empty_title_yields_only_title_required() {
        let mut editor = filled("", "Body");
        let calls = Cell::new(0);

        let outcome = editor
            .submit(|_| {
                calls.set(calls.get() + 1);
                async { Ok::<(), String>(()) }
            })
            .await;

        let errors = FieldErrors::check("", "Body");
        assert_eq!(outcome, SubmitOutcome::Rejected(SubmitError::Invalid(errors)));
        assert_eq!(editor.errors().title(), Some(&FieldError::TitleRequired));
        assert_eq!(editor.errors().content(), None);
        assert_eq!(editor.errors().len(), 1);
        assert_eq!(editor.state(), EditorState::Invalid);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn long_title_yields_length_error() {
        let mut editor = filled(&"x".repeat(161), "Body");
        let err = editor.begin_submit().unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(
            editor.errors().title().map(|e| e.to_string()).as_deref(),
            Some("Title must be 160 characters or less.")
        );
    }

    #[test]
    fn both_errors_can_show_together() {
        let mut editor = filled(" ", " ");
        assert!(editor.begin_submit().is_err());
        assert_eq!(editor.errors().len(), 2);
    }

    #[tokio::test]
    async fn valid_submit_calls_save_exactly_once_with_trimmed_input() {
        let mut editor = filled("  Hi ", " Body ");
        let calls = Cell::new(0);
        let received = Cell::new(None);

        let outcome = editor
            .submit(|input| {
                calls.set(calls.get() + 1);
                received.set(Some((input.title().to_string(), input.content().to_string())));
                async { Ok::<(), String>(()) }
            })
            .await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(calls.get(), 1);
        assert_eq!(received.take(), Some(("Hi".to_string(), "Body".to_string())));
        assert_eq!(editor.state(), EditorState::Saved);
        assert!(!editor.is_dirty());
    }

    #[tokio::test]
    async fn failed_save_keeps_values_and_reenables() {
        let mut editor = filled("Hi", "Body");

        let outcome = editor
            .submit(|_| async { Err::<(), _>("offline".to_string()) })
            .await;

        assert_eq!(outcome, SubmitOutcome::Failed("offline".to_string()));
        assert_eq!(editor.title(), "Hi");
        assert_eq!(editor.content(), "Body");
        assert_eq!(editor.state(), EditorState::Failed);
        assert!(!editor.is_busy());
        assert!(editor.is_dirty());
        assert!(editor.set_title("Hi again"));
    }

    #[test]
    fn submitting_disables_form() {
        let mut editor = filled("Hi", "Body");
        editor.begin_submit().unwrap();

        assert!(editor.is_busy());
        assert_eq!(editor.submit_text(), BUSY_LABEL);
        assert!(!editor.set_title("changed"));
        assert_eq!(editor.title(), "Hi");
        assert_eq!(editor.begin_submit(), Err(SubmitError::Busy));

        editor.finish_submit(true);
        assert_eq!(editor.submit_text(), DEFAULT_SUBMIT_LABEL);
    }

    #[test]
    fn external_saving_disables_form() {
        let mut editor = filled("Hi", "Body");
        editor.set_external_saving(true);

        assert!(editor.is_busy());
        assert!(!editor.set_content("more"));
        assert_eq!(editor.begin_submit(), Err(SubmitError::Busy));

        editor.set_external_saving(false);
        assert!(editor.begin_submit().is_ok());
    }

    #[test]
    fn field_change_clears_its_error_once_non_blank() {
        let mut editor = NoteEditor::new();
        assert!(editor.begin_submit().is_err());
        assert_eq!(editor.errors().len(), 2);

        editor.set_title("   ");
        assert!(editor.errors().title().is_some(), "blank value keeps the error");

        editor.set_title("T");
        assert!(editor.errors().title().is_none());
        assert!(editor.errors().content().is_some(), "other field untouched");
        assert_eq!(editor.state(), EditorState::Editing);
    }

    #[test]
    fn existing_note_starts_clean() {
        let note = Note::new("n1".parse().unwrap(), "Title", "Body", Utc::now());
        let mut editor = NoteEditor::for_note(&note);

        assert_eq!(editor.heading(), "Edit Note");
        assert_eq!(editor.state(), EditorState::Clean);
        assert!(!editor.is_dirty());

        editor.set_content("Body!");
        assert!(editor.is_dirty());
        editor.set_content("Body");
        assert!(!editor.is_dirty(), "reverting an edit is clean again");
    }

    #[test]
    fn new_editor_heading_and_label() {
        let editor = NoteEditor::new().with_submit_label("Create");
        assert_eq!(editor.heading(), "New Note");
        assert_eq!(editor.submit_text(), "Create");
        assert!(editor.note_id().is_none());
    }
}
