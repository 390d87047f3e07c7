use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use shared::domain::{ItemId, ItemInput};
use storage::{FileKeyValueStore, ItemPersistence, LocalItemStorage};
use tracing_subscriber::EnvFilter;
use tracker_core::{Orchestrator, UiEvent};

mod config;
mod shell;
mod terminal;

use config::{load_settings, prepare_storage_path};
use terminal::TerminalSurface;

#[derive(Parser, Debug)]
#[command(name = "calorie-tracker", about = "Track food items and their calories")]
struct Cli {
    /// Key-value file holding the collection.
    #[arg(long)]
    storage_path: Option<std::path::PathBuf>,
    /// Key the collection is stored under.
    #[arg(long)]
    storage_key: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the list and the total.
    List,
    /// Add an item.
    Add {
        name: String,
        #[arg(allow_hyphen_values = true)]
        calories: String,
    },
    /// Replace the name and calories of an item.
    Edit {
        id: i64,
        name: String,
        #[arg(allow_hyphen_values = true)]
        calories: String,
    },
    /// Delete an item.
    Delete { id: i64 },
    /// Delete every item.
    Clear,
    /// Print the full state as JSON.
    Dump,
    /// Interactive session.
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(path) = cli.storage_path {
        settings.storage_path = path;
    }
    if let Some(key) = cli.storage_key {
        settings.storage_key = key;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let storage_path = prepare_storage_path(&settings.storage_path)?;
    let persistence = LocalItemStorage::with_key(
        FileKeyValueStore::open(storage_path)?,
        settings.storage_key,
    );
    tracing::debug!(
        path = %persistence.backend().path().display(),
        key = persistence.key(),
        "opened storage"
    );
    let mut orchestrator = Orchestrator::init(persistence, TerminalSurface::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::List) {
        Command::List => {}
        Command::Add { name, calories } => {
            orchestrator
                .surface_mut()
                .fill_form(ItemInput::new(name, calories));
            orchestrator.dispatch(UiEvent::AddRequested)?;
        }
        Command::Edit { id, name, calories } => {
            select(&mut orchestrator, id)?;
            orchestrator
                .surface_mut()
                .fill_form(ItemInput::new(name, calories));
            orchestrator.dispatch(UiEvent::CommitEditRequested)?;
        }
        Command::Delete { id } => {
            select(&mut orchestrator, id)?;
            orchestrator.dispatch(UiEvent::DeleteRequested)?;
        }
        Command::Clear => {
            orchestrator.dispatch(UiEvent::ClearAllRequested)?;
        }
        Command::Dump => {
            let snapshot = orchestrator.store().snapshot();
            writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
            return Ok(());
        }
        Command::Shell => {
            let stdin = io::stdin();
            let input = stdin.lock();
            return shell::run_shell(&mut orchestrator, input, out);
        }
    }

    write!(out, "{}", orchestrator.surface().render())?;
    Ok(())
}

/// Puts the item with `id` into edit mode, the way clicking its row would.
fn select<P: ItemPersistence>(
    orchestrator: &mut Orchestrator<P, TerminalSurface>,
    id: i64,
) -> Result<()> {
    let id = ItemId(id);
    orchestrator.dispatch(UiEvent::EditRequested {
        element_id: id.element_id(),
    })?;
    if orchestrator.store().current().is_none() {
        bail!("item {id} not found");
    }
    Ok(())
}
