//! Adventure scores for the user's target and for each candidate.
//!
//! Both scores add normalized speed and height to fixed bonuses. The
//! inversion bonus is 2 when computing the user's target but 4 when scoring
//! a candidate; the two stages use separate constants on purpose.

use catalog::CoasterRecord;
use crate::preference::UserPreference;

/// Divides speed in mph so 120 mph is worth 2 points
pub const SPEED_DIVISOR: f64 = 60.0;

/// Divides height in feet so 420 ft is worth 2 points
pub const HEIGHT_DIVISOR: f64 = 210.0;

/// Added to the target score when the user wants inversions
pub const TARGET_INVERSION_BONUS: f64 = 2.0;

/// Added to every candidate's score when the user wants inversions
pub const CANDIDATE_INVERSION_BONUS: f64 = 4.0;

/// Half a point per chosen design style
pub const DESIGN_POINTS_PER_CHOICE: f64 = 0.5;

/// The user's desired adventure level.
///
/// `speed/60 + height/210 + inversion bonus + designs/2`
pub fn target_score(preference: &UserPreference) -> f64 {
    let inversion_points = if preference.wants_inversion() {
        TARGET_INVERSION_BONUS
    } else {
        0.0
    };
    let design_points = preference.chosen_designs().len() as f64 * DESIGN_POINTS_PER_CHOICE;

    preference.desired_speed_mph() / SPEED_DIVISOR
        + preference.desired_height_ft() / HEIGHT_DIVISOR
        + inversion_points
        + design_points
}

/// A coaster's adventure score for a user who does or doesn't want inversions.
pub fn candidate_score(record: &CoasterRecord, wants_inversion: bool) -> f64 {
    let inversion_bonus = if wants_inversion {
        CANDIDATE_INVERSION_BONUS
    } else {
        0.0
    };
    record.max_height_ft / HEIGHT_DIVISOR + record.top_speed_mph / SPEED_DIVISOR + inversion_bonus
}

/// Distance between a candidate and the target; the ranking key
pub fn score_delta(candidate_score: f64, target_score: f64) -> f64 {
    (candidate_score - target_score).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coaster(height: f64, speed: f64) -> CoasterRecord {
        CoasterRecord {
            name: "Apex".to_string(),
            state: "Texas".to_string(),
            design: "Sitdown".to_string(),
            inversion_count: 0,
            max_height_ft: height,
            top_speed_mph: speed,
            latitude: 30.2,
            longitude: -97.7,
            city: "Austin".to_string(),
            park: "Thrill Park".to_string(),
        }
    }

    #[test]
    fn test_target_score_without_bonuses() {
        let pref = UserPreference::new(60.0, 210.0, false).unwrap();
        assert!((target_score(&pref) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_target_score_with_bonuses() {
        let pref = UserPreference::new(120.0, 420.0, true)
            .unwrap()
            .with_designs(["Sitdown", "Flying", "Inverted"]);
        // 2 + 2 + 2 + 1.5
        assert!((target_score(&pref) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_target_score_is_deterministic() {
        let a = UserPreference::new(75.5, 233.0, true).unwrap().with_designs(["Flying"]);
        let b = a.clone().with_states(["Ohio"]);
        assert_eq!(target_score(&a), target_score(&a));
        // States don't feed the score
        assert_eq!(target_score(&a), target_score(&b));
    }

    #[test]
    fn test_candidate_score() {
        let apex = coaster(200.0, 65.0);
        let plain = candidate_score(&apex, false);
        assert!((plain - (200.0 / 210.0 + 65.0 / 60.0)).abs() < 1e-12);
        assert!((candidate_score(&apex, true) - plain - CANDIDATE_INVERSION_BONUS).abs() < 1e-12);
    }

    #[test]
    fn test_score_delta_is_symmetric() {
        assert_eq!(score_delta(2.5, 2.0), 0.5);
        assert_eq!(score_delta(2.0, 2.5), 0.5);
    }
}
