//! jurados-classify - Gender classification pass over the juror table
//!
//! Scans stored jurors, infers each one's gender from their first name,
//! and writes `sexo` where the inference differs from the stored value.
//! Prints a one-line summary and exits 0 on completion; only startup
//! failures (store, lexicon) exit 1.

use anyhow::{Context, Result};
use clap::Parser;
use jurados_classify::lexicon::Lexicon;
use jurados_classify::pass::run_classification;
use jurados_common::config::resolve_database_path;
use jurados_common::db::init_database;
use jurados_common::db::store::JurorStore;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for jurados-classify
#[derive(Parser, Debug)]
#[command(name = "jurados-classify")]
#[command(about = "Gender classification pass over the jurados store")]
#[command(version)]
struct Args {
    /// Database file (overrides JURADOS_DATABASE, config file, and platform default)
    #[arg(short, long)]
    database: Option<String>,

    /// Only classify the first N jurors of the ordered scan
    #[arg(short, long)]
    limit: Option<u32>,

    /// Alternative lexicon TOML (defaults to the embedded one)
    #[arg(long)]
    lexicon: Option<PathBuf>,
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
        "Starting jurados-classify v{} [{}] built {} ({})",
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

    let lexicon = match &args.lexicon {
        Some(path) => Lexicon::load(path)
            .with_context(|| format!("Failed to load lexicon {}", path.display()))?,
        None => Lexicon::embedded().context("Embedded lexicon is invalid")?,
    };

    let db_path = resolve_database_path(args.database.as_deref());
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path)
        .await
        .context("Failed to open the jurados database")?;

    let store = JurorStore::new(pool);
    let summary = run_classification(&store, &lexicon, args.limit.map(i64::from)).await?;

    println!("{}", summary.display_string());

    Ok(())
}
