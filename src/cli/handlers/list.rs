//! List and Show command handlers.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use super::{open_app, resolve_id};
use crate::app::ListPage;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{ListArgs, ShowArgs};
use crate::nav::{AlwaysConfirm, Route};
use crate::ui::{NoteDetail, Renderer};

pub async fn handle_list(args: &ListArgs, db: &Path) -> Result<()> {
    let app = open_app(db, Arc::new(AlwaysConfirm)).await?;

    match args.format {
        OutputFormat::Human => {
            let page = ListPage::mount(&app);
            let renderer = Renderer::new()?;
            print!("{}", page.render(&renderer)?);
        }
        OutputFormat::Json => {
            Output::new(app.store().snapshot().notes).print()?;
        }
    }

    Ok(())
}

pub async fn handle_show(args: &ShowArgs, db: &Path) -> Result<()> {
    let app = open_app(db, Arc::new(AlwaysConfirm)).await?;
    let id = resolve_id(&app, &args.note)?;

    app.router().go(Route::Note(id.clone()));
    app.store().select_note(id.clone())?;

    let state = app.store().snapshot();
    let note = state
        .selected()
        .with_context(|| format!("note not found: '{}'", id))?;

    match args.format {
        OutputFormat::Human => {
            let renderer = Renderer::new()?;
            print!("{}", renderer.detail(&NoteDetail::from_note(note))?);
        }
        OutputFormat::Json => {
            Output::new(note).print()?;
        }
    }

    Ok(())
}
