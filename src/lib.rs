//! notepad - a notes client: store, guarded navigation, editor and views

pub mod app;
pub mod backend;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod nav;
pub mod store;
pub mod ui;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_edit, handle_list, handle_new, handle_remove, handle_show,
    },
};
use infra::logging::init_logging;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    init_logging(&config.log_config(cli.verbose, cli.log_json)?)?;

    if let Command::Completions(args) = &cli.command {
        handle_completions(args);
        return Ok(());
    }

    let db = config.db_path(cli.db.as_ref());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        match &cli.command {
            Command::List(args) => handle_list(args, &db).await,
            Command::Show(args) => handle_show(args, &db).await,
            Command::New(args) => handle_new(args, &db).await,
            Command::Edit(args) => handle_edit(args, &db).await,
            Command::Remove(args) => handle_remove(args, &db).await,
            Command::Completions(_) => Ok(()),
        }
    })
}
