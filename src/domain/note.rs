//! Note entity and validated note input.

use crate::domain::{FieldErrors, NoteId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A note as held by the store and returned by backends.
///
/// The entity carries no validation of its own. Title and content rules are
/// enforced when a [`NoteInput`] is built, and backends only create or update
/// notes from a `NoteInput`.
///
/// # Examples
///
/// ```
/// use notepad::domain::{Note, NoteId};
/// use chrono::Utc;
///
/// let note = Note::new(NoteId::generate(), "Groceries", "Milk, eggs", Utc::now());
/// assert_eq!(note.title(), "Groceries");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note from its parts.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            updated_at,
        }
    }

    /// Creates a note from validated input.
    pub fn from_input(id: NoteId, input: &NoteInput, updated_at: DateTime<Utc>) -> Self {
        Self::new(id, input.title(), input.content(), updated_at)
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was last updated.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.short())
    }
}

/// Trimmed, validated title and content for creating or updating a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteInput {
    title: String,
    content: String,
}

impl NoteInput {
    /// Validates and trims the given values.
    ///
    /// # Errors
    ///
    /// Returns `FieldErrors` if:
    /// - The title is blank or longer than 160 characters
    /// - The content is blank
    pub fn new(title: &str, content: &str) -> Result<Self, FieldErrors> {
        let errors = FieldErrors::check(title, content);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        })
    }

    /// Returns the trimmed title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed content.
    pub fn content(&self) -> &str {
        &self.content
    }
}
