//! Upsert by natural key
//!
//! `nome` is the natural key: the lookup is exact and case-sensitive, so
//! "Escola X" and "escola x" are different institutions. An existing row
//! keeps its guid and has every imported field rewritten, which makes
//! re-running the same import idempotent.

use jurados_common::db::models::InstitutionRecord;
use jurados_common::db::store::InstitutionStore;
use jurados_common::Result;
use tracing::debug;

/// What the reconciler did with one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Insert a new institution or refresh the one with the same nome
pub async fn upsert_institution(
    store: &InstitutionStore,
    record: &InstitutionRecord,
) -> Result<UpsertOutcome> {
    match store.find_by_nome(&record.nome).await? {
        Some(existing) => {
            store.update(&existing.guid, record).await?;
            debug!("Updated institution '{}' ({})", record.nome, existing.guid);
            Ok(UpsertOutcome::Updated)
        }
        None => {
            let guid = store.insert(record).await?;
            debug!("Inserted institution '{}' ({})", record.nome, guid);
            Ok(UpsertOutcome::Inserted)
        }
    }
}
