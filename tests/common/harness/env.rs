//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared by several test binaries
#![allow(dead_code)]

use super::{NotepadCommand, TestNote};
use notepad::backend::{NoteBackend, SqliteBackend};
use notepad::domain::Note;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database.
///
/// The temp directory also serves as config and data home, so a user's own
/// `config.toml` never leaks into a test.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the test database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("notes.db")
    }

    /// Stores a note directly in the database, bypassing the CLI.
    pub fn add_note(&self, test_note: &TestNote) -> Note {
        let backend = SqliteBackend::open(&self.db_path()).expect("Failed to open test database");
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build runtime");
        runtime
            .block_on(backend.create(&test_note.to_input()))
            .expect("Failed to store test note")
    }

    /// Reads every stored note directly from the database.
    pub fn stored_notes(&self) -> Vec<Note> {
        let backend = SqliteBackend::open(&self.db_path()).expect("Failed to open test database");
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build runtime");
        runtime.block_on(backend.list()).expect("Failed to list notes")
    }

    /// Creates a NotepadCommand configured for this test environment.
    pub fn cmd(&self) -> NotepadCommand {
        NotepadCommand::new()
            .env("XDG_CONFIG_HOME", self.root.join("config"))
            .env("XDG_DATA_HOME", self.root.join("data"))
            .db(&self.db_path())
    }

    /// Writes a config file where the binary will look for it.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.root.join("config").join("notepad");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir());
        assert!(env.db_path().starts_with(env.root()));
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_is_stored() {
        let env = TestEnv::new();
        let note = env.add_note(&TestNote::new("Stored").content("Body"));

        let stored = env.stored_notes();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id(), note.id());
        assert_eq!(stored[0].title(), "Stored");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let args = env.cmd().get_args().to_vec();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], env.db_path().to_string_lossy());
    }
}
