//! SQLite-backed persistence.

use super::{BackendError, BackendResult, NoteBackend};
use crate::domain::{Note, NoteId, NoteInput};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, params};
use parking_lot::Mutex;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Creates the notes table.
///
/// Idempotent: calling it on an existing database is safe. The `seq` column
/// records insertion order, which updates leave untouched.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );",
    )
}

/// A backend storing notes in a SQLite database.
///
/// Queries run on tokio's blocking pool so the calling task stays responsive.
#[derive(Clone)]
pub struct SqliteBackend {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBackend {
    /// Opens an in-memory database with the notes schema.
    pub fn open_in_memory() -> BackendResult<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self::from_connection(conn))
    }

    /// Opens or creates a database at the given path.
    ///
    /// Creates parent directories if they don't exist.
    pub fn open(path: &Path) -> BackendResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| BackendError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        create_schema(&conn)?;
        info!(path = %path.display(), "opened notes database");
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    async fn run<T, F>(&self, f: F) -> BackendResult<T>
    where
        F: FnOnce(&Connection) -> BackendResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock();
            f(&conn)
        })
        .await
        .map_err(|e| BackendError::Unavailable(format!("storage task failed: {e}")))?
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn note_from_row(id: String, title: String, content: String, updated_at: String) -> BackendResult<Note> {
    let updated_at = DateTime::parse_from_rfc3339(&updated_at)
        .map_err(|e| BackendError::Corrupt {
            id: id.clone(),
            reason: format!("bad timestamp '{updated_at}': {e}"),
        })?
        .with_timezone(&Utc);
    let note_id: NoteId = id.parse().map_err(|e: crate::domain::ParseNoteIdError| {
        BackendError::Corrupt {
            id: id.clone(),
            reason: e.to_string(),
        }
    })?;
    Ok(Note::new(note_id, title, content, updated_at))
}

#[async_trait]
impl NoteBackend for SqliteBackend {
    async fn list(&self) -> BackendResult<Vec<Note>> {
        self.run(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, title, content, updated_at FROM notes ORDER BY seq")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
                })?
                .collect::<Result<Vec<(String, String, String, String)>, _>>()?;

            rows.into_iter()
                .map(|(id, title, content, updated_at)| note_from_row(id, title, content, updated_at))
                .collect()
        })
        .await
    }

    async fn create(&self, input: &NoteInput) -> BackendResult<Note> {
        let note = Note::from_input(NoteId::generate(), input, Utc::now());
        let row = note.clone();
        self.run(move |conn| {
            conn.execute(
                "INSERT INTO notes (id, title, content, updated_at) VALUES (?1, ?2, ?3, ?4)",
                params![
                    row.id().as_str(),
                    row.title(),
                    row.content(),
                    format_timestamp(row.updated_at())
                ],
            )?;
            debug!(id = %row.id(), "inserted note");
            Ok(())
        })
        .await?;
        Ok(note)
    }

    async fn update(&self, id: &NoteId, input: &NoteInput) -> BackendResult<Note> {
        let note = Note::from_input(id.clone(), input, Utc::now());
        let row = note.clone();
        self.run(move |conn| {
            let changed = conn.execute(
                "UPDATE notes SET title = ?2, content = ?3, updated_at = ?4 WHERE id = ?1",
                params![
                    row.id().as_str(),
                    row.title(),
                    row.content(),
                    format_timestamp(row.updated_at())
                ],
            )?;
            if changed == 0 {
                return Err(BackendError::NotFound {
                    id: row.id().clone(),
                });
            }
            Ok(())
        })
        .await?;
        Ok(note)
    }

    async fn delete(&self, id: &NoteId) -> BackendResult<()> {
        let id = id.clone();
        self.run(move |conn| {
            let removed = conn.execute("DELETE FROM notes WHERE id = ?1", params![id.as_str()])?;
            debug!(%id, removed, "deleted note");
            Ok(())
        })
        .await
    }
}
