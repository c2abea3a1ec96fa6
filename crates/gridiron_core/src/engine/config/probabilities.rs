//! Base outcome probabilities for the matchup primitives.
//!
//! `diff` below always means (offense tier − defense tier) of the players in
//! the matchup. Every probability derived from these constants is clamped to
//! an explicit floor and ceiling so that tier extremes never produce a
//! certain outcome.

use serde::{Deserialize, Serialize};

// ============================================================================
// Enum-keyed tables
// ============================================================================

/// Depth of a pass attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassType {
    Short,
    Medium,
    Deep,
}

impl PassType {
    /// Air yards at the catch point (inclusive).
    pub fn yard_range(self) -> (i32, i32) {
        match self {
            PassType::Short => (3, 8),
            PassType::Medium => (9, 17),
            PassType::Deep => (18, 38),
        }
    }

    pub fn accuracy_modifier(self) -> f64 {
        match self {
            PassType::Short => 0.06,
            PassType::Medium => 0.0,
            PassType::Deep => -0.12,
        }
    }

    pub fn interception_multiplier(self) -> f64 {
        match self {
            PassType::Deep => 1.3,
            PassType::Short | PassType::Medium => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PassType::Short => "short",
            PassType::Medium => "medium",
            PassType::Deep => "deep",
        }
    }
}

/// Receiver separation from coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separation {
    Open,
    Contested,
    Covered,
}

impl Separation {
    pub fn accuracy_modifier(self) -> f64 {
        match self {
            Separation::Open => 0.08,
            Separation::Contested => 0.0,
            Separation::Covered => -0.10,
        }
    }

    pub fn completion_multiplier(self) -> f64 {
        match self {
            Separation::Open => 1.0,
            Separation::Contested => 0.90,
            Separation::Covered => 0.72,
        }
    }

    /// Upper bound of yards after catch before tier scaling.
    pub fn max_yac(self) -> f64 {
        match self {
            Separation::Open => 8.0,
            Separation::Contested => 4.0,
            Separation::Covered => 2.0,
        }
    }

    pub fn interception_multiplier(self) -> f64 {
        match self {
            Separation::Covered => 1.5,
            Separation::Open | Separation::Contested => 1.0,
        }
    }
}

/// Running lane produced by the line battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleSize {
    Big,
    Small,
    Tight,
}

impl HoleSize {
    pub fn yards_modifier(self) -> f64 {
        match self {
            HoleSize::Big => 2.5,
            HoleSize::Small => 0.5,
            HoleSize::Tight => -1.5,
        }
    }

    pub fn breakaway_base(self) -> f64 {
        match self {
            HoleSize::Big => 0.05,
            HoleSize::Small | HoleSize::Tight => 0.015,
        }
    }
}

// ============================================================================
// Scalar tables
// ============================================================================

pub mod protection {
    pub const SACK_BASE: f64 = 0.06;
    pub const SACK_PER_DIFF: f64 = 0.012;
    pub const SACK_MIN: f64 = 0.02;
    pub const SACK_MAX: f64 = 0.25;
    pub const SACK_LOSS_MIN: i32 = 3;
    pub const SACK_LOSS_MAX: i32 = 9;

    pub const PRESSURE_BASE: f64 = 0.24;
    pub const PRESSURE_PER_DIFF: f64 = 0.03;
    pub const PRESSURE_MIN: f64 = 0.08;
    pub const PRESSURE_MAX: f64 = 0.55;

    pub const POCKET_TIME_MIN: f64 = 2.0;
    pub const POCKET_TIME_MAX: f64 = 3.5;
    pub const POCKET_TIME_PER_DIFF: f64 = 0.15;
    pub const POCKET_TIME_FLOOR: f64 = 1.5;
    pub const POCKET_TIME_CEILING: f64 = 4.5;
}

pub mod coverage {
    pub const TIER_BIAS: f64 = 0.06;
    pub const OPEN_THRESHOLD: f64 = 0.65;
    pub const CONTESTED_THRESHOLD: f64 = 0.35;
}

pub mod throw {
    pub const BASE: f64 = 0.76;
    /// Accuracy gained per unit of QB rating above 0.5.
    pub const QB_RATING_SCALE: f64 = 0.5;
    pub const PRESSURE_PENALTY: f64 = 0.12;
    pub const VARIANCE_SD: f64 = 0.05;
    pub const MIN: f64 = 0.15;
    pub const MAX: f64 = 0.95;
}

pub mod catching {
    pub const BASE_ABILITY: f64 = 0.92;
    pub const ABILITY_RATING_SCALE: f64 = 0.3;
    pub const ABILITY_MIN: f64 = 0.50;
    pub const ABILITY_MAX: f64 = 0.98;
    /// Ability swing for a "hands" trait of 0 or 100.
    pub const HANDS_TRAIT_SCALE: f64 = 0.02;

    pub const COMPLETION_MIN: f64 = 0.05;
    pub const COMPLETION_MAX: f64 = 0.95;

    pub const YAC_BASE_SCALE: f64 = 0.7;
    pub const YAC_RATING_SCALE: f64 = 0.6;

    pub const INTERCEPTION_BASE: f64 = 0.03;
    pub const INTERCEPTION_PER_DIFF: f64 = 0.008;
    pub const INTERCEPTION_MIN: f64 = 0.01;
    pub const INTERCEPTION_MAX: f64 = 0.10;

    pub const PASS_DEFENDED_BASE: f64 = 0.20;
    pub const PASS_DEFENDED_RATING_SCALE: f64 = 0.30;
}

pub mod blocking {
    pub const STUFF_BASE: f64 = 0.10;
    pub const STUFF_PER_DIFF: f64 = 0.015;
    pub const STUFF_MIN: f64 = 0.04;
    pub const STUFF_MAX: f64 = 0.25;
    pub const TFL_MIN: i32 = 1;
    pub const TFL_MAX: i32 = 3;

    pub const HOLE_TIER_BIAS: f64 = 0.05;
    pub const BIG_HOLE_THRESHOLD: f64 = 0.70;
    pub const SMALL_HOLE_THRESHOLD: f64 = 0.35;
}

pub mod rushing {
    pub const MEAN_YARDS: f64 = 3.4;
    pub const YARDS_PER_DIFF: f64 = 0.35;
    pub const YARDS_SD: f64 = 2.2;

    pub const BROKEN_TACKLE_BASE: f64 = 0.10;
    pub const BROKEN_TACKLE_PER_DIFF: f64 = 0.02;
    /// Chance swing for an "elusiveness" trait of 0 or 100.
    pub const ELUSIVENESS_SCALE: f64 = 0.02;
    pub const BROKEN_TACKLE_MIN: f64 = 0.03;
    pub const BROKEN_TACKLE_MAX: f64 = 0.30;
    pub const BROKEN_TACKLE_YARDS_MIN: f64 = 3.0;
    pub const BROKEN_TACKLE_YARDS_MAX: f64 = 8.0;

    pub const BREAKAWAY_PER_DIFF: f64 = 0.005;
    pub const BREAKAWAY_MIN: f64 = 0.005;
    pub const BREAKAWAY_MAX: f64 = 0.10;
    pub const BREAKAWAY_YARDS_MIN: f64 = 15.0;
    pub const BREAKAWAY_YARDS_MAX: f64 = 60.0;

    pub const FUMBLE_BASE: f64 = 0.012;
    pub const FUMBLE_PER_DIFF: f64 = 0.001;
    pub const FUMBLE_MIN: f64 = 0.004;
    pub const FUMBLE_MAX: f64 = 0.03;

    /// Yards at or beyond which a run is classified as a big gain.
    pub const BIG_GAIN_YARDS: i32 = 15;
}

pub mod qb_run {
    pub const DESIGNED_MEAN: f64 = 4.0;
    pub const DESIGNED_SD: f64 = 3.0;
    pub const SCRAMBLE_MEAN: f64 = 5.0;
    pub const SCRAMBLE_SD: f64 = 4.5;
    pub const YARDS_PER_DIFF: f64 = 0.3;
    pub const MIN_YARDS: f64 = -3.0;
    pub const FUMBLE: f64 = 0.008;

    pub const SCRAMBLE_BASE: f64 = 0.10;
    pub const SCRAMBLE_MOBILITY_SCALE: f64 = 0.30;
    pub const SCRAMBLE_MAX: f64 = 0.60;

    pub const DESIGNED_RUN_BASE: f64 = 0.04;
    pub const DESIGNED_RUN_RUSH_SCALE: f64 = 0.10;
}

pub mod kicking {
    /// Yards added to the line-to-gain distance for snap + hold depth.
    pub const SNAP_AND_HOLD_YARDS: i32 = 17;
    /// Holder's depth behind the line of scrimmage; a miss is spotted here.
    pub const HOLD_YARDS: i32 = 7;
    /// Longest attempt the fourth-down logic will call for.
    pub const MAX_ATTEMPT_DISTANCE: i32 = 55;

    pub const TIER_BONUS_SCALE: f64 = 0.2;
    pub const FG_MIN: f64 = 0.05;
    pub const FG_MAX: f64 = 0.99;

    /// Extra points are snapped from the offense's own 85 (the 15-yard line).
    pub const EXTRA_POINT_SPOT: i32 = 85;
    pub const XP_BASE: f64 = 0.94;
    pub const XP_RATING_SCALE: f64 = 0.08;
    pub const XP_MIN: f64 = 0.85;
    pub const XP_MAX: f64 = 0.995;

    /// Base make probability by attempt distance.
    pub fn field_goal_base(distance: i32) -> f64 {
        match distance {
            i32::MIN..=29 => 0.97,
            30..=39 => 0.90,
            40..=49 => 0.78,
            50..=55 => 0.62,
            _ => 0.40,
        }
    }
}

pub mod punting {
    pub const GROSS_MEAN: f64 = 44.0;
    pub const GROSS_RATING_SCALE: f64 = 12.0;
    pub const GROSS_SD: f64 = 6.0;
    pub const RETURN_MAX: f64 = 12.0;
    pub const TOUCHBACK_SPOT: i32 = 20;
    /// Free kicks after a safety are taken from the kicking team's own 20.
    pub const FREE_KICK_SPOT: i32 = 20;
}

pub mod kickoff {
    /// Kicking team's own-perspective tee spot.
    pub const KICK_SPOT: i32 = 35;
    pub const TOUCHBACK_BASE: f64 = 0.60;
    pub const TOUCHBACK_RATING_SCALE: f64 = 0.40;
    pub const TOUCHBACK_MIN: f64 = 0.20;
    pub const TOUCHBACK_MAX: f64 = 0.95;
    pub const TOUCHBACK_SPOT: i32 = 25;
    pub const RETURN_SPOT_MEAN: f64 = 24.0;
    pub const RETURN_SPOT_SD: f64 = 7.0;
    pub const RETURN_SPOT_MIN: i32 = 5;
    pub const RETURN_SPOT_MAX: i32 = 50;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_goal_bands_decrease_with_distance() {
        let bands = [20, 35, 45, 52, 60].map(kicking::field_goal_base);
        assert!(bands.windows(2).all(|w| w[0] > w[1]), "{bands:?}");
    }

    #[test]
    fn test_pass_type_ranges_are_ordered() {
        let (s_lo, s_hi) = PassType::Short.yard_range();
        let (m_lo, m_hi) = PassType::Medium.yard_range();
        let (d_lo, _) = PassType::Deep.yard_range();
        assert!(s_lo <= s_hi && s_hi < m_lo && m_hi < d_lo);
    }

    #[test]
    fn test_separation_tables_are_monotone() {
        assert!(
            Separation::Open.completion_multiplier()
                > Separation::Contested.completion_multiplier()
        );
        assert!(
            Separation::Contested.completion_multiplier()
                > Separation::Covered.completion_multiplier()
        );
        assert!(Separation::Open.max_yac() > Separation::Covered.max_yac());
    }
}
