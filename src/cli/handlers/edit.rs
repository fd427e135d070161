//! New and Edit command handlers.

use anyhow::{Result, bail};
use std::path::Path;
use std::sync::Arc;

use super::{open_app, print_banner, read_value, resolve_id};
use crate::app::{App, EditorPage};
use crate::cli::{EditArgs, NewArgs};
use crate::domain::Note;
use crate::nav::{AlwaysConfirm, Route};
use crate::ui::Renderer;

pub async fn handle_new(args: &NewArgs, db: &Path) -> Result<()> {
    let content = read_value(&args.content)?;
    let app = open_app(db, Arc::new(AlwaysConfirm)).await?;

    app.router().go(Route::NewNote);
    let page = EditorPage::mount(&app, None)?;
    page.edit(|editor| {
        editor.set_title(args.title.as_str());
        editor.set_content(content);
    });

    let note = save(&app, &page).await?;
    println!("{}", note.id());
    Ok(())
}

pub async fn handle_edit(args: &EditArgs, db: &Path) -> Result<()> {
    if args.title.is_none() && args.content.is_none() {
        bail!("nothing to change: pass --title and/or --content");
    }
    let content = args.content.as_deref().map(read_value).transpose()?;

    let app = open_app(db, Arc::new(AlwaysConfirm)).await?;
    let id = resolve_id(&app, &args.note)?;

    app.router().go(Route::EditNote(id.clone()));
    let page = EditorPage::mount(&app, Some(&id))?;
    page.edit(|editor| {
        if let Some(title) = &args.title {
            editor.set_title(title.as_str());
        }
        if let Some(content) = content {
            editor.set_content(content);
        }
    });

    if !page.view(|editor| editor.is_dirty()) {
        eprintln!("No changes.");
    } else {
        let note = save(&app, &page).await?;
        println!("{}", note.id());
    }
    Ok(())
}

async fn save(app: &App, page: &EditorPage) -> Result<Note> {
    let renderer = Renderer::new()?;
    let result = page.save().await;
    print_banner(&renderer, app.store().snapshot().banner.as_ref())?;
    Ok(result?)
}
