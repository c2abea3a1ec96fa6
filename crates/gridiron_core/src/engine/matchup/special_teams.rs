//! Kicking game. These are invoked by the game loop directly; they are not
//! down-and-distance plays.

use serde::{Deserialize, Serialize};

use crate::engine::config::probabilities::{kicking, kickoff as ko, punting};
use crate::engine::config::tier_to_rating;
use crate::engine::rng::GameRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuntOutcome {
    pub gross_yards: i32,
    pub touchback: bool,
    pub return_yards: i32,
    /// Receiving team's own-perspective spot after the return.
    pub receiving_field_position: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickoffOutcome {
    pub touchback: bool,
    /// Receiving team's own-perspective spot.
    pub receiving_field_position: i32,
}

pub fn field_goal_probability(kicker: f64, distance: i32) -> f64 {
    (kicking::field_goal_base(distance)
        + (tier_to_rating(kicker) - 0.5) * kicking::TIER_BONUS_SCALE)
        .clamp(kicking::FG_MIN, kicking::FG_MAX)
}

pub fn field_goal(kicker: f64, distance: i32, rng: &mut GameRng) -> bool {
    rng.chance(field_goal_probability(kicker, distance))
}

pub fn extra_point_probability(kicker: f64) -> f64 {
    (kicking::XP_BASE + (tier_to_rating(kicker) - 0.5) * kicking::XP_RATING_SCALE)
        .clamp(kicking::XP_MIN, kicking::XP_MAX)
}

pub fn extra_point(kicker: f64, rng: &mut GameRng) -> bool {
    rng.chance(extra_point_probability(kicker))
}

/// Punt from the kicking team's `field_position`.
pub fn punt(punter: f64, field_position: i32, rng: &mut GameRng) -> PuntOutcome {
    let gross = rng.normal(
        punting::GROSS_MEAN + (tier_to_rating(punter) - 0.5) * punting::GROSS_RATING_SCALE,
        punting::GROSS_SD,
    );
    let landing = field_position as f64 + gross;
    if landing >= 100.0 {
        return PuntOutcome {
            gross_yards: gross.round() as i32,
            touchback: true,
            return_yards: 0,
            receiving_field_position: punting::TOUCHBACK_SPOT,
        };
    }
    let ret = rng.range(0.0, punting::RETURN_MAX);
    let spot = ((100.0 - landing + ret).round() as i32).clamp(1, 99);
    PuntOutcome {
        gross_yards: gross.round() as i32,
        touchback: false,
        return_yards: ret.round() as i32,
        receiving_field_position: spot,
    }
}

/// Free kick after a safety: punt mechanics from the kicking team's own 20.
pub fn free_kick(kicker: f64, rng: &mut GameRng) -> PuntOutcome {
    punt(kicker, punting::FREE_KICK_SPOT, rng)
}

pub fn kickoff(kicker: f64, rng: &mut GameRng) -> KickoffOutcome {
    let touchback_p = (ko::TOUCHBACK_BASE
        + (tier_to_rating(kicker) - 0.5) * ko::TOUCHBACK_RATING_SCALE)
        .clamp(ko::TOUCHBACK_MIN, ko::TOUCHBACK_MAX);
    if rng.chance(touchback_p) {
        return KickoffOutcome { touchback: true, receiving_field_position: ko::TOUCHBACK_SPOT };
    }
    let spot = (rng.normal(ko::RETURN_SPOT_MEAN, ko::RETURN_SPOT_SD).round() as i32)
        .clamp(ko::RETURN_SPOT_MIN, ko::RETURN_SPOT_MAX);
    KickoffOutcome { touchback: false, receiving_field_position: spot }
}
