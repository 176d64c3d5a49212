//! Filter on top speed.

use crate::traits::Filter;
use crate::types::SearchContext;
use anyhow::Result;
use catalog::CoasterRecord;

/// Keeps candidates with a known top speed inside the search window.
///
/// A speed of 0 means the source didn't record one; those never pass.
pub struct SpeedWindowFilter;

impl Filter for SpeedWindowFilter {
    fn name(&self) -> &str {
        "SpeedWindowFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a CoasterRecord>,
        context: &SearchContext<'_>,
    ) -> Result<Vec<&'a CoasterRecord>> {
        let window = context.window;
        let filtered: Vec<&CoasterRecord> = candidates
            .into_iter()
            .filter(|record| record.top_speed_mph > 0.0 && window.contains_speed(record.top_speed_mph))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{coaster, names};
    use crate::preference::UserPreference;

    #[test]
    fn test_speed_window_filter() {
        let records = vec![
            coaster("Slow", "Ohio", 0, 200.0, 29.0),  // below 30
            coaster("Edge", "Ohio", 0, 200.0, 30.0),  // on the lower edge
            coaster("Just", "Ohio", 0, 200.0, 65.0),
            coaster("Top", "Ohio", 0, 200.0, 90.0),   // on the upper edge
            coaster("Fast", "Ohio", 0, 200.0, 95.0),  // above 90
        ];
        let pref = UserPreference::new(60.0, 190.0, false).unwrap();

        let filtered = SpeedWindowFilter
            .apply(records.iter().collect(), &SearchContext::new(&pref))
            .unwrap();

        assert_eq!(names(&filtered), vec!["Edge", "Just", "Top"]);
    }

    #[test]
    fn test_unknown_speed_excluded() {
        let records = vec![coaster("Unknown", "Ohio", 0, 200.0, 0.0)];
        let pref = UserPreference::new(27.0, 190.0, false).unwrap();

        let filtered = SpeedWindowFilter
            .apply(records.iter().collect(), &SearchContext::new(&pref))
            .unwrap();

        assert!(filtered.is_empty());
    }
}
