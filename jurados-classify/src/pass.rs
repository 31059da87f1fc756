//! Classification batch pass
//!
//! Sequential scan over the juror table in a stable order. Each juror is
//! classified and `sexo` is written only when the inferred value differs
//! from the stored one; Indeterminate never writes. A failed write is
//! logged and skipped without stopping the pass.

use crate::classifier::classify;
use crate::lexicon::Lexicon;
use anyhow::Context;
use jurados_common::db::models::Gender;
use jurados_common::db::store::JurorStore;
use tracing::{debug, info, warn};

/// Counters for one classification pass
///
/// processed always equals updated + unchanged + indeterminate + skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifySummary {
    /// Jurors scanned
    pub processed: usize,
    /// Jurors whose sexo was written
    pub updated: usize,
    /// Jurors already carrying the inferred value
    pub unchanged: usize,
    /// Jurors the rules could not place
    pub indeterminate: usize,
    /// Jurors whose write failed
    pub skipped: usize,
}

impl ClassifySummary {
    pub fn display_string(&self) -> String {
        format!(
            "Processed {} jurors: {} updated, {} unchanged, {} indeterminate, {} skipped",
            self.processed, self.updated, self.unchanged, self.indeterminate, self.skipped
        )
    }
}

/// Run one classification pass
///
/// `limit` bounds the pass to the first N jurors of the ordered scan. An
/// empty juror table is a valid no-op run, not an error.
pub async fn run_classification(
    store: &JurorStore,
    lexicon: &Lexicon,
    limit: Option<i64>,
) -> anyhow::Result<ClassifySummary> {
    let jurors = store
        .list(limit)
        .await
        .context("Failed to scan the jurados table")?;

    info!("Classifying {} jurors", jurors.len());

    let mut summary = ClassifySummary::default();
    for juror in &jurors {
        summary.processed += 1;

        let Some(gender) = classify(lexicon, &juror.nome).gender() else {
            debug!("No confident answer for '{}'", juror.nome);
            summary.indeterminate += 1;
            continue;
        };

        if juror.sexo.as_deref().and_then(Gender::parse) == Some(gender) {
            summary.unchanged += 1;
            continue;
        }

        match store.update_sexo(&juror.guid, gender).await {
            Ok(()) => {
                debug!("Set sexo={} for '{}' ({})", gender, juror.nome, juror.guid);
                summary.updated += 1;
            }
            Err(e) => {
                warn!("Skipping juror '{}' ({}): {}", juror.nome, juror.guid, e);
                summary.skipped += 1;
            }
        }
    }

    info!("{}", summary.display_string());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_string() {
        let summary = ClassifySummary {
            processed: 12,
            updated: 8,
            unchanged: 2,
            indeterminate: 1,
            skipped: 1,
        };
        assert_eq!(
            summary.display_string(),
            "Processed 12 jurors: 8 updated, 2 unchanged, 1 indeterminate, 1 skipped"
        );
    }
}
