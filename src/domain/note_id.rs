//! Opaque note identifier with ULID generation and serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Number of characters shown by [`NoteId::short`].
const SHORT_LEN: usize = 10;

/// Path segments the router gives a fixed meaning under `/notes/`.
pub const RESERVED_IDS: &[&str] = &["new", "edit"];

/// A unique identifier for a note.
///
/// Identifiers are assigned by the persistence backend and treated as opaque
/// strings everywhere else. The only constraint is that an id can be embedded
/// in a route path (`/notes/{id}`), so it must be non-empty, free of
/// whitespace, `/`, `?` and `#`, and not one of [`RESERVED_IDS`].
///
/// Freshly minted ids are ULIDs, which sort by creation time.
///
/// # Examples
///
/// ```
/// use notepad::domain::NoteId;
///
/// let id = NoteId::generate();
/// assert_eq!(id.as_str().len(), 26);
///
/// let parsed: NoteId = "note-42".parse().unwrap();
/// assert_eq!(parsed.as_str(), "note-42");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// Mints a new ULID-based identifier.
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the leading characters of the id, for compact display.
    ///
    /// For ULIDs the first 10 characters encode the creation millisecond.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_LEN) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid note id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteIdError {
    value: String,
    reason: &'static str,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reason = if s.is_empty() {
            Some("id cannot be empty")
        } else if s.chars().any(char::is_whitespace) {
            Some("id cannot contain whitespace")
        } else if s.contains(['/', '?', '#']) {
            Some("id cannot contain '/', '?' or '#'")
        } else if RESERVED_IDS.contains(&s) {
            Some("id is a reserved route segment")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ParseNoteIdError {
                value: s.to_string(),
                reason,
            }),
            None => Ok(Self(s.to_string())),
        }
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn generate_creates_ulid() {
        let id = NoteId::generate();
        assert_eq!(id.as_str().len(), 26, "ULID should be 26 characters");
        assert!(Ulid::from_string(id.as_str()).is_ok());
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: Vec<NoteId> = (0..100).map(|_| NoteId::generate()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len(), "all generated IDs should be unique");
    }

    #[test]
    fn short_returns_first_10_chars() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(id.short(), "01HQ3K5M7N");
    }

    #[test]
    fn short_keeps_short_ids_whole() {
        let id: NoteId = "abc".parse().unwrap();
        assert_eq!(id.short(), "abc");
    }

    #[test]
    fn short_respects_char_boundaries() {
        let id: NoteId = "ééééééééééééé".parse().unwrap();
        assert_eq!(id.short().chars().count(), 10);
    }

    #[test]
    fn parse_accepts_arbitrary_backend_ids() {
        let id: NoteId = "missing".parse().unwrap();
        assert_eq!(id.to_string(), "missing");
    }

    #[test]
    fn parse_rejects_empty() {
        let err = "".parse::<NoteId>().unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn parse_rejects_route_separators() {
        assert!("a/b".parse::<NoteId>().is_err());
        assert!("a?b".parse::<NoteId>().is_err());
        assert!("a#b".parse::<NoteId>().is_err());
        assert!("a b".parse::<NoteId>().is_err());
    }

    #[test]
    fn parse_rejects_reserved_segments() {
        for reserved in RESERVED_IDS {
            let err = reserved.parse::<NoteId>().unwrap_err();
            assert_eq!(err.invalid_value(), *reserved);
            assert!(err.to_string().contains("reserved"));
        }
        assert!("newer".parse::<NoteId>().is_ok());
        assert!("New".parse::<NoteId>().is_ok());
    }

    #[test]
    fn parse_error_contains_invalid_value() {
        let err = "bad id".parse::<NoteId>().unwrap_err();
        assert_eq!(err.invalid_value(), "bad id");
        assert!(err.to_string().contains("'bad id'"));
    }

    #[test]
    fn debug_format() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(format!("{:?}", id), "NoteId(\"01HQ3K5M7NXJK4QZPW8V2R6T9Y\")");
    }

    #[test]
    fn serde_uses_plain_string() {
        let id: NoteId = "note-1".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"note-1\"");
        let parsed: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn serde_rejects_invalid_id() {
        let result: Result<NoteId, _> = serde_json::from_str("\"a/b\"");
        assert!(result.is_err());
        let result: Result<NoteId, _> = serde_json::from_str("\"new\"");
        assert!(result.is_err());
    }
}
