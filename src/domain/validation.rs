//! Field validation for note titles and content.
//!
//! These rules run at the editor boundary and again inside the store, which
//! only ever accepts a [`NoteInput`](crate::domain::NoteInput).

use std::fmt;
use thiserror::Error;

/// Maximum title length, in characters, after trimming.
pub const TITLE_MAX_CHARS: usize = 160;

/// A form field that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Content => write!(f, "content"),
        }
    }
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Title is required.")]
    TitleRequired,

    #[error("Title must be 160 characters or less.")]
    TitleTooLong { chars: usize },

    #[error("Content is required.")]
    ContentRequired,
}

impl FieldError {
    /// Returns the field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldError::TitleRequired | FieldError::TitleTooLong { .. } => Field::Title,
            FieldError::ContentRequired => Field::Content,
        }
    }
}

/// Checks a title. The value is trimmed before checking.
pub fn check_title(title: &str) -> Option<FieldError> {
    let trimmed = title.trim();
    let chars = trimmed.chars().count();
    if chars == 0 {
        Some(FieldError::TitleRequired)
    } else if chars > TITLE_MAX_CHARS {
        Some(FieldError::TitleTooLong { chars })
    } else {
        None
    }
}

/// Checks note content. The value is trimmed before checking.
pub fn check_content(content: &str) -> Option<FieldError> {
    if content.trim().is_empty() {
        Some(FieldError::ContentRequired)
    } else {
        None
    }
}

/// Validation errors for a whole form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    title: Option<FieldError>,
    content: Option<FieldError>,
}

impl FieldErrors {
    /// Validates both fields independently.
    pub fn check(title: &str, content: &str) -> Self {
        Self {
            title: check_title(title),
            content: check_content(content),
        }
    }

    /// Returns true if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Returns the title error, if any.
    pub fn title(&self) -> Option<&FieldError> {
        self.title.as_ref()
    }

    /// Returns the content error, if any.
    pub fn content(&self) -> Option<&FieldError> {
        self.content.as_ref()
    }

    /// Returns the error for the given field, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Title => self.title(),
            Field::Content => self.content(),
        }
    }

    /// Clears the error for the given field.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Title => self.title = None,
            Field::Content => self.content = None,
        }
    }

    /// Iterates over the present errors, title first.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.title.iter().chain(self.content.iter())
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for FieldErrors {}
