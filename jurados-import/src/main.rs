//! jurados-import - Institution CSV import for the jurados store
//!
//! Reads a CSV export of candidate institutions and reconciles it into the
//! store: insert new institutions, refresh existing ones in place, skip bad
//! rows. Prints a one-line summary and exits 0 on completion; only
//! pipeline-level failures exit 1.

use anyhow::{Context, Result};
use clap::Parser;
use jurados_common::config::resolve_database_path;
use jurados_common::db::init_database;
use jurados_common::db::store::InstitutionStore;
use jurados_import::driver::run_import;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for jurados-import
#[derive(Parser, Debug)]
#[command(name = "jurados-import")]
#[command(about = "Institution CSV import for the jurados store")]
#[command(version)]
struct Args {
    /// CSV file exported from the admin system
    file: PathBuf,

    /// Database file (overrides JURADOS_DATABASE, config file, and platform default)
    #[arg(short, long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting jurados-import v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    // A bad invocation is a fatal batch error: exit 1, not clap's default 2.
    // Help and version output keep exit 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let db_path = resolve_database_path(args.database.as_deref());
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path)
        .await
        .context("Failed to open the jurados database")?;

    let store = InstitutionStore::new(pool);
    let summary = run_import(&store, &args.file).await?;

    println!("{}", summary.display_string());

    Ok(())
}
