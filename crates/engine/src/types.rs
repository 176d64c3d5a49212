//! Request context and result types shared across the engine.

use crate::preference::UserPreference;
use crate::scoring;
use crate::window::SearchWindow;
use catalog::CoasterRecord;
use serde::Serialize;

/// Everything the filters need to judge a candidate, derived once per
/// request from the user's preference.
#[derive(Debug, Clone)]
pub struct SearchContext<'p> {
    pub preference: &'p UserPreference,
    pub window: SearchWindow,
    pub target_score: f64,
}

impl<'p> SearchContext<'p> {
    pub fn new(preference: &'p UserPreference) -> Self {
        Self {
            preference,
            window: SearchWindow::from_preference(preference),
            target_score: scoring::target_score(preference),
        }
    }
}

/// One ranked coaster, carrying the fields needed to display it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// 1-based position in the result list
    pub rank: usize,
    pub score_delta: f64,
    pub adventure_score: f64,
    pub city: String,
    pub state: String,
    pub name: String,
    pub inversion_count: u32,
    pub has_inversions: bool,
    pub height_ft: f64,
    pub speed_mph: f64,
    pub park: String,
}

impl Recommendation {
    pub fn new(rank: usize, score_delta: f64, adventure_score: f64, record: &CoasterRecord) -> Self {
        Self {
            rank,
            score_delta,
            adventure_score,
            city: record.city.clone(),
            state: record.state.clone(),
            name: record.name.clone(),
            inversion_count: record.inversion_count,
            has_inversions: record.has_inversions(),
            height_ft: record.max_height_ft,
            speed_mph: record.top_speed_mph,
            park: record.park.clone(),
        }
    }
}

/// Result of a recommendation request.
///
/// `NoMatch` is an ordinary outcome the user can fix by loosening their
/// criteria, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    /// At least one coaster, ascending by `score_delta`
    Matches {
        target_score: f64,
        recommendations: Vec<Recommendation>,
    },
    NoMatch { target_score: f64 },
}

impl RecommendationOutcome {
    pub fn target_score(&self) -> f64 {
        match self {
            Self::Matches { target_score, .. } | Self::NoMatch { target_score } => *target_score,
        }
    }

    /// The ranked list; empty for `NoMatch`
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            Self::Matches { recommendations, .. } => recommendations,
            Self::NoMatch { .. } => &[],
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matches { .. })
    }
}
