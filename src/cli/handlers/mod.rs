//! Command handlers for the CLI.

mod edit;
mod list;
mod remove;
mod resolve;


use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use crate::app::App;
use crate::backend::SqliteBackend;
use crate::cli::{Cli, CompletionsArgs};
use crate::domain::{Banner, NoteId};
use crate::nav::Confirm;
use crate::ui::Renderer;

pub use edit::{handle_edit, handle_new};
pub use list::{handle_list, handle_show};
pub use remove::handle_remove;
pub use resolve::{ResolveResult, resolve_note};

use resolve::print_ambiguous_notes;

// ===========================================
// Shared Utilities
// ===========================================

/// An [`App`] owned by one command. Dropping it shuts the session down,
/// whichever way the handler returns.
pub(crate) struct Session(App);

impl Deref for Session {
    type Target = App;

    fn deref(&self) -> &App {
        &self.0
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.0.shutdown();
    }
}

/// Opens the database, starts a session over it and loads every note.
pub(crate) async fn open_app(db: &Path, confirm: Arc<dyn Confirm>) -> Result<Session> {
    let backend = SqliteBackend::open(db)
        .with_context(|| format!("failed to open database at {}", db.display()))?;
    let session = Session(App::start(Arc::new(backend), confirm));
    session
        .store()
        .load_notes()
        .await
        .context("failed to load notes")?;
    Ok(session)
}

/// Resolves a user-supplied identifier to a loaded note id.
pub(crate) fn resolve_id(app: &App, identifier: &str) -> Result<NoteId> {
    let state = app.store().snapshot();
    match resolve_note(&state.notes, identifier) {
        ResolveResult::Unique(id) => Ok(id),
        ResolveResult::Ambiguous(notes) => {
            print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}

/// Returns `value`, or all of stdin when `value` is `-`.
pub(crate) fn read_value(value: &str) -> Result<String> {
    if value != "-" {
        return Ok(value.to_string());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read content from stdin")?;
    Ok(buf)
}

/// Prints the store's banner, if any, to stderr.
pub(crate) fn print_banner(renderer: &Renderer, banner: Option<&Banner>) -> Result<()> {
    if let Some(banner) = banner {
        eprint!("{}", renderer.banner(banner)?);
    }
    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "notepad", &mut std::io::stdout());
}
