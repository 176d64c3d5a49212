//! Runs coaster candidates through the hard filters in a fixed order,
//! logging how many survive each stage.

use crate::traits::Filter;
use crate::types::SearchContext;
use crate::filters::{HeightWindowFilter, InversionFilter, SpeedWindowFilter, StateFilter};
use anyhow::Result;
use catalog::CoasterRecord;

/// Ordered list of filters; a coaster is eligible only if every stage keeps it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(StateFilter)
///     .add_filter(SpeedWindowFilter);
///
/// let survivors = pipeline.apply(candidates, &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The full set of hard filters a recommendation must pass
    pub fn hard_filters() -> Self {
        Self::new()
            .add_filter(StateFilter)
            .add_filter(InversionFilter)
            .add_filter(SpeedWindowFilter)
            .add_filter(HeightWindowFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Stops early once nothing is left. Survivors keep their input order.
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a CoasterRecord>,
        context: &SearchContext<'_>,
    ) -> Result<Vec<&'a CoasterRecord>> {
        let mut current = candidates;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{coaster, names};
    use crate::preference::UserPreference;

    #[test]
    fn test_empty_pipeline() {
        let records = vec![
            coaster("Apex", "Texas", 0, 200.0, 65.0),
            coaster("Bolt", "Ohio", 2, 20.0, 120.0),
        ];
        let pref = UserPreference::new(60.0, 190.0, false).unwrap();

        let filtered = FilterPipeline::new()
            .apply(records.iter().collect(), &SearchContext::new(&pref))
            .unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let records = vec![
            coaster("Apex", "Texas", 0, 200.0, 65.0),
            coaster("Bolt", "Ohio", 2, 20.0, 120.0),
        ];
        let pref = UserPreference::new(60.0, 190.0, false)
            .unwrap()
            .with_states(["Ohio"]);

        let pipeline = FilterPipeline::new().add_filter(StateFilter);
        let filtered = pipeline
            .apply(records.iter().collect(), &SearchContext::new(&pref))
            .unwrap();
        assert_eq!(names(&filtered), vec!["Bolt"]);
    }

    #[test]
    fn test_hard_filters_require_every_predicate() {
        let records = vec![
            coaster("Apex", "Texas", 0, 200.0, 65.0),
            coaster("Looper", "Texas", 2, 200.0, 65.0),  // wrong inversion status
            coaster("Rocket", "Texas", 0, 200.0, 100.0), // too fast
            coaster("Tower", "Texas", 0, 300.0, 65.0),   // too tall
            coaster("Elsewhere", "Ohio", 0, 200.0, 65.0),
        ];
        let pref = UserPreference::new(60.0, 190.0, false)
            .unwrap()
            .with_states(["Texas"]);

        let pipeline = FilterPipeline::hard_filters();
        assert_eq!(
            pipeline.filter_names(),
            vec!["StateFilter", "InversionFilter", "SpeedWindowFilter", "HeightWindowFilter"]
        );

        let filtered = pipeline
            .apply(records.iter().collect(), &SearchContext::new(&pref))
            .unwrap();
        assert_eq!(names(&filtered), vec!["Apex"]);
    }
}
