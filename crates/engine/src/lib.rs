//! Recommendation engine for the coaster catalog.
//!
//! This crate provides:
//! - `UserPreference`, a validated, immutable set of user choices
//! - The adventure-score formulas and the speed/height search window
//! - A Filter trait and the hard filters, composed by `FilterPipeline`
//! - `Recommender`, which filters, scores and ranks the catalog
//!
//! ## Architecture
//! A request runs in stages:
//! 1. The preference yields a target score and a search window
//! 2. Filters remove ineligible coasters (state, inversions, speed, height)
//! 3. Survivors get an adventure score and are ranked by distance to the target
//!
//! ## Example Usage
//! ```ignore
//! use engine::{Recommender, RecommendationOutcome, UserPreference};
//!
//! let recommender = Recommender::new(catalog.clone());
//! let preference = UserPreference::new(60.0, 190.0, false)?
//!     .with_states(["Texas"]);
//!
//! match recommender.recommend(&preference)? {
//!     RecommendationOutcome::Matches { recommendations, .. } => { /* render */ }
//!     RecommendationOutcome::NoMatch { .. } => { /* ask for looser criteria */ }
//! }
//! ```

pub mod error;
pub mod preference;
pub mod window;
pub mod scoring;
pub mod types;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod recommender;

// Re-export main types
pub use error::PreferenceError;
pub use preference::UserPreference;
pub use window::SearchWindow;
pub use types::{Recommendation, RecommendationOutcome, SearchContext};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use recommender::Recommender;
