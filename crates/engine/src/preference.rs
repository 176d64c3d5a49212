//! The user's finalized preferences for one recommendation request.

use crate::error::PreferenceError;
use catalog::Catalog;
use serde::Serialize;
use std::collections::BTreeSet;

/// Slider bounds for desired top speed, in mph
pub const MIN_SPEED_MPH: f64 = 27.0;
pub const MAX_SPEED_MPH: f64 = 120.0;

/// Slider bounds for desired maximum height, in feet
pub const MIN_HEIGHT_FT: f64 = 18.0;
pub const MAX_HEIGHT_FT: f64 = 420.0;

/// An immutable, validated set of preferences.
///
/// Built once every input is final and handed to the recommender by
/// reference. Speed and height are always within the slider bounds.
///
/// ```ignore
/// let preference = UserPreference::new(60.0, 190.0, false)?
///     .with_designs(["Sitdown"])
///     .with_states(["Texas", "Ohio"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPreference {
    desired_speed_mph: f64,
    desired_height_ft: f64,
    wants_inversion: bool,
    chosen_designs: BTreeSet<String>,
    /// Empty means nothing can match
    acceptable_states: BTreeSet<String>,
}

impl UserPreference {
    /// Validate speed and height, rejecting anything outside the sliders.
    pub fn new(
        desired_speed_mph: f64,
        desired_height_ft: f64,
        wants_inversion: bool,
    ) -> Result<Self, PreferenceError> {
        check_finite(desired_speed_mph, "desired speed")?;
        check_finite(desired_height_ft, "desired height")?;

        if !(MIN_SPEED_MPH..=MAX_SPEED_MPH).contains(&desired_speed_mph) {
            return Err(PreferenceError::SpeedOutOfRange {
                value: desired_speed_mph,
                min: MIN_SPEED_MPH,
                max: MAX_SPEED_MPH,
            });
        }
        if !(MIN_HEIGHT_FT..=MAX_HEIGHT_FT).contains(&desired_height_ft) {
            return Err(PreferenceError::HeightOutOfRange {
                value: desired_height_ft,
                min: MIN_HEIGHT_FT,
                max: MAX_HEIGHT_FT,
            });
        }

        Ok(Self::unchecked(desired_speed_mph, desired_height_ft, wants_inversion))
    }

    /// Like [`UserPreference::new`], but pulls out-of-range values back to
    /// the nearest slider bound instead of rejecting them.
    pub fn clamped(
        desired_speed_mph: f64,
        desired_height_ft: f64,
        wants_inversion: bool,
    ) -> Result<Self, PreferenceError> {
        check_finite(desired_speed_mph, "desired speed")?;
        check_finite(desired_height_ft, "desired height")?;

        Ok(Self::unchecked(
            desired_speed_mph.clamp(MIN_SPEED_MPH, MAX_SPEED_MPH),
            desired_height_ft.clamp(MIN_HEIGHT_FT, MAX_HEIGHT_FT),
            wants_inversion,
        ))
    }

    fn unchecked(desired_speed_mph: f64, desired_height_ft: f64, wants_inversion: bool) -> Self {
        Self {
            desired_speed_mph,
            desired_height_ft,
            wants_inversion,
            chosen_designs: BTreeSet::new(),
            acceptable_states: BTreeSet::new(),
        }
    }

    /// Set the design styles the user would like to ride
    pub fn with_designs<I, S>(mut self, designs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chosen_designs = designs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the states the user is willing to travel to
    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acceptable_states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn desired_speed_mph(&self) -> f64 {
        self.desired_speed_mph
    }

    pub fn desired_height_ft(&self) -> f64 {
        self.desired_height_ft
    }

    pub fn wants_inversion(&self) -> bool {
        self.wants_inversion
    }

    pub fn chosen_designs(&self) -> &BTreeSet<String> {
        &self.chosen_designs
    }

    pub fn acceptable_states(&self) -> &BTreeSet<String> {
        &self.acceptable_states
    }

    /// Check every chosen design against the designs present in `catalog`.
    ///
    /// Each design adds to the target score, so a misspelt or invented one
    /// would shift every result. States are not checked here: a state with
    /// no coasters simply yields no matches.
    pub fn check_designs(&self, catalog: &Catalog) -> Result<(), PreferenceError> {
        let known = catalog.designs();
        match self
            .chosen_designs
            .iter()
            .find(|design| !known.contains(&design.as_str()))
        {
            Some(design) => Err(PreferenceError::UnknownDesign {
                design: design.clone(),
                valid: known.join(", "),
            }),
            None => Ok(()),
        }
    }
}

fn check_finite(value: f64, field: &'static str) -> Result<(), PreferenceError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PreferenceError::NotFinite { field })
    }
}
