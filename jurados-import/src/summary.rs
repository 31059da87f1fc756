//! Import run counters
//!
//! Display: "Processed N rows: I inserted, U updated, S skipped"

/// Counters for one import run
///
/// processed always equals inserted + updated + skipped; every data row
/// lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Data rows seen (header and blank lines excluded)
    pub processed: usize,
    /// Rows that created a new institution
    pub inserted: usize,
    /// Rows that refreshed an existing institution
    pub updated: usize,
    /// Rows rejected or failed and left behind
    pub skipped: usize,
}

impl ImportSummary {
    pub fn display_string(&self) -> String {
        format!(
            "Processed {} rows: {} inserted, {} updated, {} skipped",
            self.processed, self.inserted, self.updated, self.skipped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_string() {
        let summary = ImportSummary {
            processed: 10,
            inserted: 7,
            updated: 2,
            skipped: 1,
        };
        assert_eq!(
            summary.display_string(),
            "Processed 10 rows: 7 inserted, 2 updated, 1 skipped"
        );
    }

    #[test]
    fn test_default_is_all_zero() {
        let summary = ImportSummary::default();
        assert_eq!(summary.display_string(), "Processed 0 rows: 0 inserted, 0 updated, 0 skipped");
    }
}
