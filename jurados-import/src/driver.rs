//! Import batch driver
//!
//! Strictly sequential: each row's store write is awaited before the next
//! row starts, so the log reads in file order and a mid-run kill leaves a
//! valid, partially-imported store. A bad row is logged and skipped; only
//! pipeline-level failures abort the run.

use crate::csv;
use crate::normalize;
use crate::reconcile::{upsert_institution, UpsertOutcome};
use crate::summary::ImportSummary;
use anyhow::{bail, Context};
use jurados_common::db::store::InstitutionStore;
use std::path::Path;
use tracing::{info, warn};

/// Run one import over a CSV export
///
/// Fatal errors: unreadable file, or a file with no data rows. Everything
/// row-level is counted in the summary instead.
pub async fn run_import(store: &InstitutionStore, path: &Path) -> anyhow::Result<ImportSummary> {
    let text = csv::read_file(path)
        .with_context(|| format!("Failed to read CSV file {}", path.display()))?;

    let rows = csv::lex(&text);
    let (columns, records) = csv::build_records(&rows);

    if records.is_empty() {
        bail!("No data rows in {}", path.display());
    }
    if !columns.iter().any(|c| c == "nome") {
        warn!("CSV header has no 'nome' column; every row will be skipped");
    }

    info!("Importing {} rows from {}", records.len(), path.display());

    let mut summary = ImportSummary::default();
    for record in &records {
        summary.processed += 1;

        let normalized = match normalize::normalize_record(record) {
            Ok(normalized) => normalized,
            Err(e) => {
                warn!("Skipping row: {}", e);
                summary.skipped += 1;
                continue;
            }
        };

        match upsert_institution(store, &normalized).await {
            Ok(UpsertOutcome::Inserted) => summary.inserted += 1,
            Ok(UpsertOutcome::Updated) => summary.updated += 1,
            Err(e) => {
                warn!(
                    "Skipping row '{}' (line {}): {}",
                    normalized.nome, record.line, e
                );
                summary.skipped += 1;
            }
        }
    }

    info!("{}", summary.display_string());
    Ok(summary)
}
