//! Filter to keep only coasters in states the user picked.

use crate::traits::Filter;
use crate::types::SearchContext;
use anyhow::Result;
use catalog::CoasterRecord;

/// Keeps candidates whose state is in the user's acceptable states.
///
/// An empty selection keeps nothing.
pub struct StateFilter;

impl Filter for StateFilter {
    fn name(&self) -> &str {
        "StateFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a CoasterRecord>,
        context: &SearchContext<'_>,
    ) -> Result<Vec<&'a CoasterRecord>> {
        let states = context.preference.acceptable_states();
        let filtered: Vec<&CoasterRecord> = candidates
            .into_iter()
            .filter(|record| states.contains(&record.state))
            .collect();
        Ok(filtered)
    }
}
