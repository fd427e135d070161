//! Application routes and path parsing.

use crate::domain::{NoteId, ParseNoteIdError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors returned when a path matches no route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route matches '{0}'")]
    Unknown(String),

    #[error("invalid note id in '{path}': {source}")]
    InvalidId {
        path: String,
        #[source]
        source: ParseNoteIdError,
    },
}

/// A page of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`, which redirects to the note list
    Home,
    /// `/notes`
    Notes,
    /// `/notes/new`
    NewNote,
    /// `/notes/{id}`
    Note(NoteId),
    /// `/notes/{id}/edit`
    EditNote(NoteId),
}

impl Route {
    /// Parses a path. Query strings, fragments and trailing slashes are
    /// ignored.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = bare.split('/').filter(|s| !s.is_empty()).collect();

        let id = |raw: &str| {
            raw.parse::<NoteId>().map_err(|source| RouteError::InvalidId {
                path: path.to_string(),
                source,
            })
        };

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["notes"] => Ok(Route::Notes),
            ["notes", "new"] => Ok(Route::NewNote),
            ["notes", raw] => Ok(Route::Note(id(*raw)?)),
            ["notes", raw, "edit"] => Ok(Route::EditNote(id(*raw)?)),
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }

    /// Returns the canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Notes => "/notes".to_string(),
            Route::NewNote => "/notes/new".to_string(),
            Route::Note(id) => format!("/notes/{id}"),
            Route::EditNote(id) => format!("/notes/{id}/edit"),
        }
    }

    /// Returns the `id` route parameter, if the route has one.
    pub fn note_id(&self) -> Option<&NoteId> {
        match self {
            Route::Note(id) | Route::EditNote(id) => Some(id),
            _ => None,
        }
    }

    /// Returns where this route redirects to, if anywhere.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Route::Home => Some(Route::Notes),
            _ => None,
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
