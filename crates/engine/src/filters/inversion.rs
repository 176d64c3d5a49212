//! Filter on whether a coaster goes upside down.

use crate::traits::Filter;
use crate::types::SearchContext;
use anyhow::Result;
use catalog::CoasterRecord;

/// Keeps candidates whose inversion status matches the user's choice.
///
/// A coaster "has inversions" when its inversion count is above zero. Users
/// who want inversions only see coasters with them; users who don't only
/// see coasters without.
pub struct InversionFilter;

impl Filter for InversionFilter {
    fn name(&self) -> &str {
        "InversionFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a CoasterRecord>,
        context: &SearchContext<'_>,
    ) -> Result<Vec<&'a CoasterRecord>> {
        let wants_inversion = context.preference.wants_inversion();
        let filtered: Vec<&CoasterRecord> = candidates
            .into_iter()
            .filter(|record| record.has_inversions() == wants_inversion)
            .collect();
        Ok(filtered)
    }
}
