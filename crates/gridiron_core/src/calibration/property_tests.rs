//! Statistical properties of whole games.
//!
//! These run thousands of seeded games through [`BatchRunner`] and check the
//! aggregate behaviour the engine promises: stronger rosters win more, every
//! overtime ends with a winner, scores decompose into football scoring plays.

use super::batch_runner::{BatchReport, BatchRunner};
use crate::engine::config::{tier_to_rating, DefensiveStrategy, OffensiveStrategy, STRATEGY_BOOST};
use crate::engine::game::{GameEngine, GameOptions};
use crate::engine::rng::GameRng;
use crate::engine::strategy::{StrategyBoosts, TeamStrategy};
use crate::models::{DriveResult, GameResult, PosGroup, Roster, Side, Winner};

fn batch(home_tier: f64, away_tier: f64, games: u32, base_seed: u64) -> BatchReport {
    BatchRunner::new(
        Roster::uniform(format!("T{home_tier}"), home_tier),
        Roster::uniform(format!("T{away_tier}"), away_tier),
        games,
        base_seed,
    )
    .run()
}

fn mixed_results(games: u32, base_seed: u64) -> Vec<GameResult> {
    let mut results = Vec::new();
    for (i, (home, away)) in [(5.0, 5.0), (8.0, 4.0), (3.0, 7.0), (6.5, 6.0)].into_iter().enumerate() {
        let runner = BatchRunner::new(
            Roster::uniform("H", home),
            Roster::uniform("A", away),
            games / 4,
            base_seed + 100_000 * i as u64,
        );
        results.extend(runner.results());
    }
    results
}

// ============================================================================
// Tier monotonicity
// ============================================================================

#[test]
fn test_higher_tier_wins_more() {
    let vs_eight = batch(9.0, 8.0, 2000, 10_000);
    let vs_seven = batch(9.0, 7.0, 2000, 10_000);
    assert!(
        vs_eight.home_win_rate() > 0.55,
        "T9 vs T8 win rate {:.3}",
        vs_eight.home_win_rate()
    );
    assert!(
        vs_seven.home_win_rate() > vs_eight.home_win_rate(),
        "T9 vs T7 {:.3} <= T9 vs T8 {:.3}",
        vs_seven.home_win_rate(),
        vs_eight.home_win_rate()
    );
}

#[test]
fn test_mirror_match_is_even_and_realistic() {
    let report = batch(5.0, 5.0, 200, 31_337);
    let rate = report.home_win_rate();
    assert!((0.40..=0.60).contains(&rate), "home win rate {rate:.3}");
    let total = report.avg_total_points();
    assert!((30.0..=60.0).contains(&total), "avg total points {total:.1}");
    assert_eq!(report.ties, 0);
}

// ============================================================================
// Overtime
// ============================================================================

fn overtime_session(seed: u64) -> GameResult {
    let mut engine = GameEngine::with_rng(
        &Roster::uniform("H", 6.0),
        &Roster::uniform("A", 6.0),
        GameOptions::seeded(seed),
        GameRng::seeded(seed),
    );
    engine.skip_to_overtime(20);
    engine.run()
}

#[test]
fn test_overtime_always_produces_a_winner() {
    for seed in 0..1000 {
        let result = overtime_session(seed);
        assert!(result.overtime);
        assert_ne!(result.winner, Winner::Tie, "seed {seed}");
    }
}

#[test]
fn test_opening_overtime_score_is_answered() {
    let mut scored_first = 0;
    for seed in 0..1000 {
        let result = overtime_session(seed);
        let ot: Vec<_> = result.overtime_drives().collect();
        let Some(first) = ot.first() else { continue };
        if !matches!(first.result, Some(DriveResult::Touchdown | DriveResult::FieldGoal)) {
            continue;
        }
        scored_first += 1;
        assert!(
            ot.iter().any(|d| d.team == first.team.other()),
            "seed {seed}: {:?} scored first and the game ended",
            first.team
        );
    }
    assert!(scored_first > 50, "only {scored_first} opening scores");
}

// ============================================================================
// Game log well-formedness
// ============================================================================

#[test]
fn test_scores_decompose_into_scoring_plays() {
    for result in mixed_results(1000, 7) {
        for side in [Side::Home, Side::Away] {
            let s = result.stats(side);
            let expected = 6 * s.touchdowns + s.extra_points_made + 3 * s.field_goals_made + 2 * s.safeties;
            assert_eq!(result.score(side), expected, "{side} {s:?}");
            assert_eq!(s.points, expected);
            assert!(s.extra_points_made <= s.extra_point_attempts);
            assert!(s.extra_point_attempts <= s.touchdowns);
            assert!(s.field_goals_made <= s.field_goal_attempts);
        }
    }
}

/// A drive that opens a half or an overtime period follows a kickoff that
/// ignores who had the ball last.
fn opens_period(result: &GameResult, index: usize) -> bool {
    let drive = &result.drives[index];
    (drive.start_quarter == 3 && drive.start_time == 900)
        || (drive.start_quarter == 5 && drive.start_time == 600)
}

#[test]
fn test_possession_alternates_between_drives() {
    for result in mixed_results(400, 99) {
        for i in 1..result.drives.len() {
            let prev = &result.drives[i - 1];
            let next = &result.drives[i];
            if prev.result.is_some_and(DriveResult::is_period_end) || opens_period(&result, i) {
                continue;
            }
            assert_ne!(
                prev.team, next.team,
                "drive {i}: {:?} followed by another {:?} drive",
                prev.result, next.team
            );
        }
    }
}

// ============================================================================
// Strategy boosts and ratings
// ============================================================================

#[test]
fn test_strategy_boosts_are_reciprocal() {
    let strategies: Vec<TeamStrategy> = OffensiveStrategy::ALL
        .into_iter()
        .flat_map(|offense| {
            DefensiveStrategy::ALL.into_iter().map(move |defense| TeamStrategy { offense, defense })
        })
        .collect();
    let groups = [
        PosGroup::QB,
        PosGroup::RB,
        PosGroup::WR,
        PosGroup::TE,
        PosGroup::OL,
        PosGroup::DL,
        PosGroup::LB,
        PosGroup::DB,
        PosGroup::K,
        PosGroup::P,
    ];
    for &a in &strategies {
        for &b in &strategies {
            let boosts = StrategyBoosts::between(a, b);
            for group in groups {
                let m = boosts.multiplier(group);
                let k = (m - 1.0).abs();
                assert!(k < 1e-12 || (k - STRATEGY_BOOST).abs() < 1e-12, "{group:?} {m}");
            }
            // What one offense gains the other defense loses, and vice versa.
            let theirs = StrategyBoosts::between(b, a);
            assert_eq!(boosts.offense_outcome, theirs.defense_outcome);
            assert_eq!(boosts.defense_outcome, theirs.offense_outcome);
        }
    }
}

#[test]
fn test_tier_rating_clamps() {
    for tier in [0.0, 12.0, f64::NAN, f64::INFINITY, -3.0] {
        let r = tier_to_rating(tier);
        assert!((0.0..=1.0).contains(&r), "tier {tier} -> {r}");
    }
}
