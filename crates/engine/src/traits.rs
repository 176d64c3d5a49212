//! The `Filter` seam: every eligibility rule a coaster must pass before it
//! is scored (state, inversions, speed window, height window) implements it.

use crate::types::SearchContext;
use anyhow::Result;
use catalog::CoasterRecord;

/// A single hard-filter predicate over catalog records.
///
/// ## Design Note
/// - `Send + Sync` lets one pipeline serve concurrent requests
/// - Filters take ownership of the candidate list and return the survivors
/// - Candidates are borrowed from the catalog, so filtering never clones records
pub trait Filter: Send + Sync {
    /// Short label used in the per-stage debug logs
    fn name(&self) -> &str;

    /// Keep the candidates that satisfy this filter, in their original order.
    fn apply<'a>(
        &self,
        candidates: Vec<&'a CoasterRecord>,
        context: &SearchContext<'_>,
    ) -> Result<Vec<&'a CoasterRecord>>;
}
