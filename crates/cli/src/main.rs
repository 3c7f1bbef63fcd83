use std::path::{Path, PathBuf};

use anyhow::Result;
use box_tracker_core::DEFAULT_HTTP_PORT;
use box_tracker_storage::{MigrationReport, StorageBackend};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "box-tracker")]
#[command(about = "Inventory tracker for household moving boxes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API and browser UI
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_HTTP_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Run schema migrations and print what was applied
    Migrate,
    /// Print boxes as JSON
    List {
        /// Include unpacked (hidden) boxes
        #[arg(long)]
        include_hidden: bool,
    },
    /// Print one box as JSON
    Show { id: i32 },
    /// Record a new box
    Add {
        number: i32,
        room: String,
        contents: String,
        #[arg(long)]
        image_url: Option<String>,
    },
}

pub(crate) fn get_db_path() -> PathBuf {
    std::env::var_os("BOX_TRACKER_DB_PATH").map(PathBuf::from).unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("box-tracker")
            .join("boxes.db")
    })
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Postgres when `DATABASE_URL` is set, otherwise the local SQLite file.
pub(crate) async fn open_backend() -> Result<(StorageBackend, MigrationReport)> {
    let opened = match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => StorageBackend::connect_postgres(&url).await?,
        _ => {
            let db_path = get_db_path();
            ensure_db_dir(&db_path)?;
            tracing::debug!(path = %db_path.display(), "opening sqlite database");
            StorageBackend::open_sqlite(&db_path)?
        },
    };
    tracing::info!(backend = opened.0.kind(), migrations = %opened.1, "storage ready");
    Ok(opened)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Migrate => commands::migrate::run().await?,
        Commands::List { include_hidden } => commands::boxes::list(include_hidden).await?,
        Commands::Show { id } => commands::boxes::show(id).await?,
        Commands::Add { number, room, contents, image_url } => {
            commands::boxes::add(number, room, contents, image_url).await?;
        },
    }

    Ok(())
}
