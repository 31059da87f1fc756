//! Database access layer
//!
//! Opens or creates the SQLite store and owns the schema for the
//! `instituicoes` and `jurados` tables.

pub mod models;
pub mod store;

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use sqlite options to create database if it doesn't exist
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    // WAL mode lets the admin application keep reading while a batch runs
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    // Set busy timeout
    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    // Idempotent - safe to call against an existing store
    create_instituicoes_table(&pool).await?;
    create_jurados_table(&pool).await?;

    Ok(pool)
}

/// Create the instituicoes table
///
/// One row per institution; `nome` is the natural key used by the import
/// reconciler. SQLite's default BINARY collation on `nome` gives the
/// case-sensitive exact matching the importer relies on.
pub async fn create_instituicoes_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS instituicoes (
            guid TEXT PRIMARY KEY,
            nome TEXT NOT NULL UNIQUE,
            cnpj TEXT,
            contato_nome TEXT NOT NULL DEFAULT 'Sr.(a). Diretor',
            contato_email TEXT,
            contato_telefone TEXT,
            endereco TEXT,
            cidade TEXT NOT NULL DEFAULT 'Capivari de Baixo',
            uf TEXT NOT NULL DEFAULT 'SC',
            cep TEXT NOT NULL DEFAULT '88745-000',
            ativo TEXT NOT NULL DEFAULT 'Sim',
            quantidade INTEGER NOT NULL DEFAULT 10,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (quantidade >= 1 AND quantidade <= 99)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_instituicoes_nome ON instituicoes(nome)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the jurados table
///
/// `nome` is read-only input to the classifier; `sexo` is the only column
/// the batch tools ever update.
pub async fn create_jurados_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jurados (
            guid TEXT PRIMARY KEY,
            nome TEXT NOT NULL,
            sexo TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (sexo IS NULL OR sexo IN ('Masculino', 'Feminino'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_jurados_nome ON jurados(nome)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_jurados_sexo ON jurados(sexo)")
        .execute(pool)
        .await?;

    Ok(())
}
