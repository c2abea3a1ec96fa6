//! Fourth-down call: go for it, kick, or punt.

use serde::{Deserialize, Serialize};

use crate::engine::config::probabilities::kicking;
use crate::engine::config::situational::fourth_down as bands;
use crate::engine::play::Situation;
use crate::engine::rng::GameRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FourthDownCall {
    GoForIt,
    FieldGoal,
    Punt,
}

/// Distance of a field-goal try from the current spot.
pub fn kick_distance(field_position: i32) -> i32 {
    100 - field_position + kicking::SNAP_AND_HOLD_YARDS
}

/// Trailing late in the fourth quarter.
pub fn is_desperate(situation: &Situation) -> bool {
    situation.quarter == bands::DESPERATION_QUARTER
        && situation.time_remaining < bands::DESPERATION_SECONDS
        && situation.score_diff < 0
}

/// Go-for-it chance on fourth and short by field-position band.
pub fn go_probability(field_position: i32) -> f64 {
    if field_position < bands::MIDFIELD {
        bands::GO_OWN_TERRITORY
    } else if field_position < bands::IN_RANGE {
        bands::GO_MIDFIELD
    } else {
        bands::GO_IN_RANGE
    }
}

pub fn decide(situation: &Situation, rng: &mut GameRng) -> FourthDownCall {
    let short = situation.yards_to_go <= bands::SHORT_YARDAGE_YARDS;

    let go = if is_desperate(situation) && (situation.field_position >= bands::IN_RANGE || short) {
        true
    } else if short {
        rng.chance(go_probability(situation.field_position))
    } else {
        false
    };

    if go {
        FourthDownCall::GoForIt
    } else if kick_distance(situation.field_position) <= kicking::MAX_ATTEMPT_DISTANCE {
        FourthDownCall::FieldGoal
    } else {
        FourthDownCall::Punt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fourth(yards_to_go: i32, field_position: i32) -> Situation {
        Situation {
            down: 4,
            yards_to_go,
            field_position,
            quarter: 2,
            time_remaining: 600,
            score_diff: 0,
        }
    }

    #[test]
    fn test_long_yardage_kicks_or_punts() {
        let mut rng = GameRng::seeded(1);
        assert_eq!(decide(&fourth(8, 30), &mut rng), FourthDownCall::Punt);
        assert_eq!(decide(&fourth(8, 70), &mut rng), FourthDownCall::FieldGoal);
        // 100 - 62 + 17 = 55: the longest try the call allows.
        assert_eq!(decide(&fourth(8, 62), &mut rng), FourthDownCall::FieldGoal);
        assert_eq!(decide(&fourth(8, 61), &mut rng), FourthDownCall::Punt);
    }

    #[test]
    fn test_band_rates() {
        let mut rng = GameRng::seeded(2);
        let n = 10_000;
        for (fp, expected) in [(30, 0.15), (55, 0.40), (75, 0.50)] {
            let go = (0..n)
                .filter(|_| decide(&fourth(1, fp), &mut rng) == FourthDownCall::GoForIt)
                .count() as f64
                / n as f64;
            assert!((go - expected).abs() < 0.03, "fp={fp} go={go}");
        }
    }

    #[test]
    fn test_desperation_override() {
        let mut rng = GameRng::seeded(3);
        let mut s = fourth(7, 65);
        s.quarter = 4;
        s.time_remaining = 90;
        s.score_diff = -4;
        for _ in 0..100 {
            assert_eq!(decide(&s, &mut rng), FourthDownCall::GoForIt);
        }
        s.score_diff = 0;
        assert_eq!(decide(&s, &mut rng), FourthDownCall::FieldGoal);
    }
}
