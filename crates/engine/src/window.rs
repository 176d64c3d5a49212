//! Tolerance band around the user's literal speed and height inputs.

use crate::preference::{MAX_HEIGHT_FT, MAX_SPEED_MPH, MIN_HEIGHT_FT, MIN_SPEED_MPH, UserPreference};

/// How far a candidate's top speed may stray from the desired speed
pub const SPEED_TOLERANCE_MPH: f64 = 30.0;

/// How far a candidate's height may stray from the desired height
pub const HEIGHT_TOLERANCE_FT: f64 = 80.0;

/// Inclusive speed and height ranges a candidate must fall into.
///
/// Both ranges are clamped to the slider bounds, so the window never
/// reaches past what the controls allow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWindow {
    pub min_speed_mph: f64,
    pub max_speed_mph: f64,
    pub min_height_ft: f64,
    pub max_height_ft: f64,
}

impl SearchWindow {
    pub fn from_preference(preference: &UserPreference) -> Self {
        let speed = preference.desired_speed_mph();
        let height = preference.desired_height_ft();

        Self {
            min_speed_mph: (speed - SPEED_TOLERANCE_MPH).max(MIN_SPEED_MPH),
            max_speed_mph: (speed + SPEED_TOLERANCE_MPH).min(MAX_SPEED_MPH),
            min_height_ft: (height - HEIGHT_TOLERANCE_FT).max(MIN_HEIGHT_FT),
            max_height_ft: (height + HEIGHT_TOLERANCE_FT).min(MAX_HEIGHT_FT),
        }
    }

    pub fn contains_speed(&self, speed_mph: f64) -> bool {
        speed_mph >= self.min_speed_mph && speed_mph <= self.max_speed_mph
    }

    pub fn contains_height(&self, height_ft: f64) -> bool {
        height_ft >= self.min_height_ft && height_ft <= self.max_height_ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(speed: f64, height: f64) -> SearchWindow {
        SearchWindow::from_preference(&UserPreference::new(speed, height, false).unwrap())
    }

    #[test]
    fn test_window_in_middle_of_range() {
        let w = window(60.0, 190.0);
        assert_eq!((w.min_speed_mph, w.max_speed_mph), (30.0, 90.0));
        assert_eq!((w.min_height_ft, w.max_height_ft), (110.0, 270.0));
    }

    #[test]
    fn test_window_clamped_at_upper_bounds() {
        let w = window(120.0, 420.0);
        assert_eq!(w.max_speed_mph, MAX_SPEED_MPH);
        assert_eq!(w.max_height_ft, MAX_HEIGHT_FT);
        assert_eq!(w.min_speed_mph, 90.0);
        assert_eq!(w.min_height_ft, 340.0);
    }

    #[test]
    fn test_window_clamped_at_lower_bounds() {
        let w = window(27.0, 18.0);
        assert_eq!(w.min_speed_mph, MIN_SPEED_MPH);
        assert_eq!(w.min_height_ft, MIN_HEIGHT_FT);
        assert_eq!(w.max_speed_mph, 57.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let w = window(60.0, 190.0);
        assert!(w.contains_speed(30.0));
        assert!(w.contains_speed(90.0));
        assert!(!w.contains_speed(90.5));
        assert!(w.contains_height(270.0));
        assert!(!w.contains_height(109.9));
    }
}
