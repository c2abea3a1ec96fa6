//! Running-game duels: line blocking, ball-carrier yards, QB keepers.

use serde::{Deserialize, Serialize};

use crate::engine::config::probabilities::HoleSize;
use crate::engine::config::probabilities::{blocking, qb_run as qb, rushing};
use crate::engine::rng::GameRng;
use crate::models::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockingOutcome {
    /// Tackled behind the line.
    Stuffed { yards_lost: i32 },
    Hole(HoleSize),
}

/// Yards and flags from a single carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RushOutcome {
    pub yards: i32,
    pub broken_tackle: bool,
    pub breakaway: bool,
    pub fumble: bool,
}

pub fn stuff_probability(ol: f64, dl: f64) -> f64 {
    (blocking::STUFF_BASE - (ol - dl) * blocking::STUFF_PER_DIFF)
        .clamp(blocking::STUFF_MIN, blocking::STUFF_MAX)
}

pub fn run_blocking(ol: f64, dl: f64, rng: &mut GameRng) -> BlockingOutcome {
    if rng.chance(stuff_probability(ol, dl)) {
        let yards_lost = rng.range_int(blocking::TFL_MIN, blocking::TFL_MAX);
        return BlockingOutcome::Stuffed { yards_lost };
    }
    let v = rng.roll() + (ol - dl) * blocking::HOLE_TIER_BIAS;
    let hole = if v >= blocking::BIG_HOLE_THRESHOLD {
        HoleSize::Big
    } else if v >= blocking::SMALL_HOLE_THRESHOLD {
        HoleSize::Small
    } else {
        HoleSize::Tight
    };
    BlockingOutcome::Hole(hole)
}

pub fn broken_tackle_probability(rb: &Player, lb: f64) -> f64 {
    let diff = rb.effective_tier() - lb;
    (rushing::BROKEN_TACKLE_BASE
        + diff * rushing::BROKEN_TACKLE_PER_DIFF
        + rb.trait_signal("elusiveness") * rushing::ELUSIVENESS_SCALE)
        .clamp(rushing::BROKEN_TACKLE_MIN, rushing::BROKEN_TACKLE_MAX)
}

pub fn breakaway_probability(diff: f64, hole: HoleSize) -> f64 {
    (hole.breakaway_base() + diff * rushing::BREAKAWAY_PER_DIFF)
        .clamp(rushing::BREAKAWAY_MIN, rushing::BREAKAWAY_MAX)
}

pub fn fumble_probability(diff: f64) -> f64 {
    (rushing::FUMBLE_BASE - diff * rushing::FUMBLE_PER_DIFF)
        .clamp(rushing::FUMBLE_MIN, rushing::FUMBLE_MAX)
}

/// Running back vs linebacker through the given hole.
pub fn rush(rb: &Player, lb: f64, hole: HoleSize, rng: &mut GameRng) -> RushOutcome {
    let diff = rb.effective_tier() - lb;
    let mut yards = rng.normal(rushing::MEAN_YARDS + diff * rushing::YARDS_PER_DIFF, rushing::YARDS_SD)
        + hole.yards_modifier();

    let broken_tackle = rng.chance(broken_tackle_probability(rb, lb));
    if broken_tackle {
        yards += rng.range(rushing::BROKEN_TACKLE_YARDS_MIN, rushing::BROKEN_TACKLE_YARDS_MAX);
    }

    // Breakaway replaces whatever the carry would otherwise have gained.
    let breakaway = rng.chance(breakaway_probability(diff, hole));
    if breakaway {
        yards = rng.range(rushing::BREAKAWAY_YARDS_MIN, rushing::BREAKAWAY_YARDS_MAX);
    }

    let fumble = rng.chance(fumble_probability(diff));
    RushOutcome { yards: yards.round() as i32, broken_tackle, breakaway, fumble }
}

/// Quarterback keeper. Scrambles have a higher mean and wider spread than
/// designed runs.
pub fn qb_run(qb_tier: f64, defender: f64, designed: bool, rng: &mut GameRng) -> RushOutcome {
    let diff = qb_tier - defender;
    let (mean, sd) = if designed {
        (qb::DESIGNED_MEAN, qb::DESIGNED_SD)
    } else {
        (qb::SCRAMBLE_MEAN, qb::SCRAMBLE_SD)
    };
    let yards = rng.normal(mean + diff * qb::YARDS_PER_DIFF, sd).max(qb::MIN_YARDS);
    let fumble = rng.chance(qb::FUMBLE);
    RushOutcome { yards: yards.round() as i32, fumble, ..Default::default() }
}
