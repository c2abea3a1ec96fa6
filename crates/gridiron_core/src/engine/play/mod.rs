//! Play resolution.
//!
//! Given the two teams and the down-and-distance situation, choose pass or
//! run by tendency and resolve the play through the matchup primitives.
//! Special teams are not resolved here: the game loop calls the kicking
//! primitives directly.

mod pass;
mod run;

use serde::{Deserialize, Serialize};

use crate::engine::config::probabilities::{PassType, Separation};
use crate::engine::config::situational::{clock, tendency};
use crate::engine::ratings::TeamRatings;
use crate::engine::rng::GameRng;
use crate::engine::strategy::TeamStrategy;
use crate::models::{Lineup, PlayResultKind, PlayType, Side, TurnoverKind};

pub use pass::{choose_pass_type, choose_target, pass_type_weights};

/// A team as the play engine sees it: boosted lineup, ratings and the
/// strategy fixed at kickoff.
#[derive(Debug, Clone)]
pub struct SimTeam {
    pub side: Side,
    pub name: String,
    pub lineup: Lineup,
    pub ratings: TeamRatings,
    pub strategy: TeamStrategy,
}

/// Snapshot of the game from the offense's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Situation {
    pub down: u8,
    pub yards_to_go: i32,
    pub field_position: i32,
    pub quarter: u8,
    pub time_remaining: u32,
    /// Offense score minus defense score.
    pub score_diff: i32,
}

/// Everything a resolved scrimmage play produced. The game loop adds the
/// snap context to turn this into a [`Play`](crate::models::Play).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub play_type: PlayType,
    pub result: PlayResultKind,
    pub yards: i32,
    pub elapsed: u32,
    pub turnover: Option<TurnoverKind>,
    pub pass_type: Option<PassType>,
    pub separation: Option<Separation>,
    pub pressured: bool,
    pub pass_defended: bool,
    pub passer: Option<String>,
    pub target: Option<String>,
    pub ball_carrier: Option<String>,
    pub description: String,
}

impl PlayOutcome {
    fn new(play_type: PlayType, result: PlayResultKind, yards: i32, elapsed: u32) -> Self {
        Self {
            play_type,
            result,
            yards,
            elapsed,
            turnover: None,
            pass_type: None,
            separation: None,
            pressured: false,
            pass_defended: false,
            passer: None,
            target: None,
            ball_carrier: None,
            description: String::new(),
        }
    }
}

/// Seconds a play of this kind takes off the clock.
pub(crate) fn elapsed(range: (i32, i32), rng: &mut GameRng) -> u32 {
    rng.range_int(range.0, range.1).max(0) as u32
}

/// Probability that the offense calls a pass in this situation.
pub fn pass_tendency(offense: &SimTeam, defense: &SimTeam, situation: &Situation) -> f64 {
    let off = &offense.ratings.offense;
    let def = &defense.ratings.defense;

    let mut t = offense.strategy.offense.base_pass_tendency() + off.config.pass_tendency_shift;

    // Lean toward whichever phase has the bigger edge over the matching defense.
    let edge = (off.pass_rating - def.pass_defense_rating) - (off.run_rating - def.run_defense_rating);
    t += (edge * tendency::RATING_DIFF_SCALE)
        .clamp(-tendency::RATING_DIFF_CAP, tendency::RATING_DIFF_CAP);

    let Situation { down, yards_to_go, field_position, quarter, time_remaining, score_diff } =
        *situation;

    if down == 3 && yards_to_go >= tendency::THIRD_AND_LONG_YARDS {
        t += tendency::THIRD_AND_LONG;
    }
    if down >= 3 && yards_to_go <= tendency::SHORT_YARDAGE_YARDS {
        t += tendency::SHORT_YARDAGE;
    }
    if field_position >= tendency::GOAL_LINE_FIELD_POSITION {
        t += tendency::GOAL_LINE;
    }
    let half_ending = quarter == 2 || quarter == clock::REGULATION_QUARTERS;
    if half_ending && time_remaining <= tendency::TWO_MINUTE_SECONDS && score_diff <= 0 {
        t += tendency::TWO_MINUTE_DRILL;
    }
    if quarter == clock::REGULATION_QUARTERS
        && score_diff > 0
        && time_remaining < tendency::PROTECT_LEAD_SECONDS
    {
        t += tendency::PROTECT_LEAD;
    }

    t.clamp(tendency::MIN, tendency::MAX)
}

/// Resolve one scrimmage play.
pub fn simulate_play(
    offense: &SimTeam,
    defense: &SimTeam,
    situation: &Situation,
    rng: &mut GameRng,
) -> PlayOutcome {
    if rng.chance(pass_tendency(offense, defense, situation)) {
        pass::resolve_pass(offense, defense, situation, rng)
    } else {
        run::resolve_run(offense, defense, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ratings::lineup_ratings;
    use crate::models::Roster;

    pub(crate) fn team(side: Side, tier: f64) -> SimTeam {
        let lineup = Lineup::from_roster(&Roster::uniform(format!("T{tier}"), tier));
        SimTeam {
            side,
            name: format!("T{tier}"),
            ratings: lineup_ratings(&lineup),
            strategy: TeamStrategy::derive(&lineup, false),
            lineup,
        }
    }

    fn situation(down: u8, yards_to_go: i32, field_position: i32) -> Situation {
        Situation { down, yards_to_go, field_position, quarter: 1, time_remaining: 900, score_diff: 0 }
    }

    #[test]
    fn test_neutral_tendency_is_strategy_base() {
        let (a, b) = (team(Side::Home, 5.0), team(Side::Away, 5.0));
        let t = pass_tendency(&a, &b, &situation(1, 10, 25));
        assert!((t - 0.55).abs() < 1e-9, "t={t}");
    }

    #[test]
    fn test_situational_deltas() {
        let (a, b) = (team(Side::Home, 5.0), team(Side::Away, 5.0));
        let long = pass_tendency(&a, &b, &situation(3, 9, 40));
        assert!((long - 0.75).abs() < 1e-9);
        let short = pass_tendency(&a, &b, &situation(4, 1, 40));
        assert!((short - 0.40).abs() < 1e-9);
        let goal_line = pass_tendency(&a, &b, &situation(1, 3, 97));
        assert!((goal_line - 0.40).abs() < 1e-9);

        let mut drill = situation(2, 8, 30);
        drill.quarter = 4;
        drill.time_remaining = 90;
        drill.score_diff = -3;
        assert!((pass_tendency(&a, &b, &drill) - 0.75).abs() < 1e-9);

        let mut kneel = drill;
        kneel.score_diff = 7;
        kneel.time_remaining = 200;
        assert!((pass_tendency(&a, &b, &kneel) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_tendency_is_clamped() {
        let (a, b) = (team(Side::Home, 5.0), team(Side::Away, 5.0));
        let mut s = situation(3, 15, 30);
        s.quarter = 4;
        s.time_remaining = 30;
        s.score_diff = -10;
        assert_eq!(pass_tendency(&a, &b, &s), tendency::MAX);
    }

    #[test]
    fn test_simulate_play_fills_elapsed_and_description() {
        let (a, b) = (team(Side::Home, 7.0), team(Side::Away, 6.0));
        let mut rng = GameRng::seeded(77);
        for _ in 0..500 {
            let out = simulate_play(&a, &b, &situation(1, 10, 30), &mut rng);
            assert!((16..=42).contains(&out.elapsed), "{out:?}");
            assert!(!out.description.is_empty());
            assert!(matches!(out.play_type, PlayType::Pass | PlayType::Run));
            assert_eq!(out.turnover.is_some(), matches!(
                out.result,
                PlayResultKind::Interception | PlayResultKind::Fumble
            ));
        }
    }

    #[test]
    fn test_same_seed_same_play() {
        let (a, b) = (team(Side::Home, 8.0), team(Side::Away, 4.0));
        let s = situation(2, 6, 45);
        let x = simulate_play(&a, &b, &s, &mut GameRng::seeded(5));
        let y = simulate_play(&a, &b, &s, &mut GameRng::seeded(5));
        assert_eq!(x, y);
    }
}
