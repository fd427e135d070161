//! Note resolution utilities.

use crate::domain::{Note, NoteId};

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult {
    /// Exactly one note matched.
    Unique(NoteId),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<Note>),
    /// No notes matched.
    NotFound,
}

/// Prints the candidates of an ambiguous identifier.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id(), note.title());
    }
    eprintln!();
    eprintln!("Use a longer ID prefix to specify which note you mean.");
}

/// Resolves a note identifier against the loaded notes.
///
/// An exact id always wins; otherwise the identifier is treated as an id
/// prefix (case-insensitive, since ULIDs are).
pub fn resolve_note(notes: &[Note], identifier: &str) -> ResolveResult {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return ResolveResult::NotFound;
    }

    if let Some(note) = notes.iter().find(|n| n.id().as_str() == identifier) {
        return ResolveResult::Unique(note.id().clone());
    }

    let prefix = identifier.to_ascii_uppercase();
    let mut matches: Vec<&Note> = notes
        .iter()
        .filter(|n| n.id().as_str().to_ascii_uppercase().starts_with(&prefix))
        .collect();

    match matches.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(matches.remove(0).id().clone()),
        _ => ResolveResult::Ambiguous(matches.into_iter().cloned().collect()),
    }
}
