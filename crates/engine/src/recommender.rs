//! # Recommender
//!
//! Coordinates one recommendation request:
//! 1. Derive the target score and search window from the preference
//! 2. Run every catalog record through the hard filters
//! 3. Score the survivors and drop non-positive scores
//! 4. Rank by distance from the target score
//!
//! The recommender never mutates the catalog, so one instance (or any number
//! of clones) can serve concurrent requests.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use catalog::{Catalog, CoasterRecord};

use crate::filter_pipeline::FilterPipeline;
use crate::preference::UserPreference;
use crate::scoring::{candidate_score, score_delta};
use crate::types::{Recommendation, RecommendationOutcome, SearchContext};

/// Entry point for turning a preference into a ranked coaster list
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    filter_pipeline: Arc<FilterPipeline>,
}

impl Recommender {
    /// Create a recommender using the standard hard filters
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_pipeline(catalog, FilterPipeline::hard_filters())
    }

    /// Create a recommender with a custom filter pipeline
    pub fn with_pipeline(catalog: Arc<Catalog>, filter_pipeline: FilterPipeline) -> Self {
        Self {
            catalog,
            filter_pipeline: Arc::new(filter_pipeline),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rank every eligible coaster by closeness to the user's adventure score.
    ///
    /// Returns the full list, ascending by `score_delta`; ties keep catalog
    /// order. An empty list comes back as [`RecommendationOutcome::NoMatch`].
    /// Fails if the preference names a design the catalog doesn't have.
    pub fn recommend(&self, preference: &UserPreference) -> Result<RecommendationOutcome> {
        let start = Instant::now();
        preference.check_designs(&self.catalog)?;
        let context = SearchContext::new(preference);
        debug!(
            "Target score {:.2}, window {:?}",
            context.target_score, context.window
        );

        let candidates: Vec<&CoasterRecord> = self.catalog.records().iter().collect();
        let survivors = self
            .filter_pipeline
            .apply(candidates, &context)
            .context("Failed to apply hard filters")?;

        let mut scored: Vec<(f64, f64, &CoasterRecord)> = survivors
            .into_iter()
            .filter_map(|record| {
                let score = candidate_score(record, preference.wants_inversion());
                (score > 0.0).then(|| (score_delta(score, context.target_score), score, record))
            })
            .collect();

        // sort_by is stable, so equal deltas stay in catalog order
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));

        let recommendations: Vec<Recommendation> = scored
            .into_iter()
            .enumerate()
            .map(|(idx, (delta, score, record))| Recommendation::new(idx + 1, delta, score, record))
            .collect();

        info!(
            "Found {} recommendations in {:?}",
            recommendations.len(),
            start.elapsed()
        );

        let target_score = context.target_score;
        if recommendations.is_empty() {
            Ok(RecommendationOutcome::NoMatch { target_score })
        } else {
            Ok(RecommendationOutcome::Matches {
                target_score,
                recommendations,
            })
        }
    }
}
