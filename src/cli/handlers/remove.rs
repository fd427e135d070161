//! Remove command handler.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use super::{open_app, print_banner, resolve_id};
use crate::app::ListPage;
use crate::cli::RemoveArgs;
use crate::cli::confirm::TerminalConfirm;
use crate::nav::{AlwaysConfirm, Confirm, Route};
use crate::ui::{DeleteRequest, Renderer};

pub async fn handle_remove(args: &RemoveArgs, db: &Path) -> Result<()> {
    let confirm: Arc<dyn Confirm> = if args.yes {
        Arc::new(AlwaysConfirm)
    } else {
        Arc::new(TerminalConfirm)
    };
    let app = open_app(db, confirm).await?;
    let id = resolve_id(&app, &args.note)?;

    app.router().go(Route::Note(id.clone()));
    let page = ListPage::mount(&app);
    let renderer = Renderer::new()?;

    match page.delete(&id).await {
        Ok(DeleteRequest::Declined) => eprintln!("Cancelled."),
        Ok(DeleteRequest::InProgress) => eprintln!("A delete of {} is already running.", id),
        Ok(DeleteRequest::Completed(_)) => {
            print_banner(&renderer, app.store().snapshot().banner.as_ref())?;
        }
        Err(err) => {
            print_banner(&renderer, app.store().snapshot().banner.as_ref())?;
            return Err(err.into());
        }
    }
    Ok(())
}
