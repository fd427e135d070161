//! Builder for test notes with sensible defaults.

// Allow dead code since this is a test utility shared by several test binaries
#![allow(dead_code)]

use notepad::domain::NoteInput;

/// Builder for creating test notes with sensible defaults.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    content: String,
}

impl TestNote {
    /// Creates a new test note with the given title and placeholder content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: "Test content".to_string(),
        }
    }

    /// Sets the content (builder method).
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// Converts to validated input.
    ///
    /// # Panics
    ///
    /// Panics if title or content is invalid.
    pub fn to_input(&self) -> NoteInput {
        NoteInput::new(&self.title, &self.content).expect("Invalid test note")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let input = TestNote::new("My Note").to_input();
        assert_eq!(input.title(), "My Note");
        assert_eq!(input.content(), "Test content");
    }

    #[test]
    fn test_note_builder() {
        let input = TestNote::new("  Padded  ").content("Body\nmore").to_input();
        assert_eq!(input.title(), "Padded");
        assert_eq!(input.content(), "Body\nmore");
    }
}
