//! View components: note list, detail view, editor form and text rendering

mod detail;
mod editor;
mod list;
mod render;

pub use detail::NoteDetail;
pub use editor::{
    BUSY_LABEL, DEFAULT_SUBMIT_LABEL, EditorState, NoteEditor, SubmitError, SubmitOutcome,
};
pub use list::{DeleteRequest, EMPTY_MESSAGE, NO_CONTENT, NoteList, NoteRow, UNTITLED, delete_prompt};
pub use render::Renderer;
