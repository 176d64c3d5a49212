//! Filter on maximum height.

use crate::traits::Filter;
use crate::types::SearchContext;
use anyhow::Result;
use catalog::CoasterRecord;

/// Keeps candidates with a known, non-zero height inside the search window.
pub struct HeightWindowFilter;

impl Filter for HeightWindowFilter {
    fn name(&self) -> &str {
        "HeightWindowFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a CoasterRecord>,
        context: &SearchContext<'_>,
    ) -> Result<Vec<&'a CoasterRecord>> {
        let window = context.window;
        let filtered: Vec<&CoasterRecord> = candidates
            .into_iter()
            .filter(|record| record.max_height_ft != 0.0 && window.contains_height(record.max_height_ft))
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
    fn test_height_window_filter() {
        let records = vec![
            coaster("Kiddie", "Ohio", 0, 60.0, 65.0),
            coaster("Mid", "Ohio", 0, 110.0, 65.0),
            coaster("Apex", "Ohio", 0, 200.0, 65.0),
            coaster("Giant", "Ohio", 0, 310.0, 65.0),
        ];
        // Window is [110, 270]
        let pref = UserPreference::new(60.0, 190.0, false).unwrap();

        let filtered = HeightWindowFilter
            .apply(records.iter().collect(), &SearchContext::new(&pref))
            .unwrap();

        assert_eq!(names(&filtered), vec!["Mid", "Apex"]);
    }

    #[test]
    fn test_unknown_height_excluded() {
        let records = vec![coaster("Unknown", "Ohio", 0, 0.0, 65.0)];
        let pref = UserPreference::new(60.0, 18.0, false).unwrap();

        let filtered = HeightWindowFilter
            .apply(records.iter().collect(), &SearchContext::new(&pref))
            .unwrap();

        assert!(filtered.is_empty());
    }
}
