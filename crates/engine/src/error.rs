//! Errors raised while validating a user's preferences.
//!
//! An empty result is not an error; see
//! [`RecommendationOutcome::NoMatch`](crate::RecommendationOutcome::NoMatch).

use thiserror::Error;

/// A preference value outside the range the sliders allow
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreferenceError {
    #[error("Desired speed {value} mph is outside {min}..={max}")]
    SpeedOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Desired height {value} ft is outside {min}..={max}")]
    HeightOutOfRange { value: f64, min: f64, max: f64 },

    /// NaN or infinite input; there is nothing sensible to clamp it to
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// A design style no coaster in the catalog has
    #[error("Unknown design {design:?}; choose from: {valid}")]
    UnknownDesign { design: String, valid: String },
}
