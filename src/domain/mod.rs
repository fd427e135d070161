//! Core types: Note, NoteId, NoteInput, Banner, field validation

mod banner;
mod note;
mod note_id;
mod validation;

pub use banner::{Banner, BannerKind};
pub use note::{Note, NoteInput};
pub use note_id::{NoteId, ParseNoteIdError, RESERVED_IDS};
pub use validation::{
    Field, FieldError, FieldErrors, TITLE_MAX_CHARS, check_content, check_title,
};
