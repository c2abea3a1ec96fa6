//! # Game State Machine
//!
//! Owns the authoritative [`GameState`] and drives the control flow of one
//! game: kickoffs, drives, fourth-down calls, scores, turnovers, period
//! transitions and overtime.
//!
//! ```text
//! Kickoff ─▶ Scrimmage (down 1..4) ─┬─▶ TD ─▶ XP ─▶ Kickoff
//!                                    ├─▶ FG ─▶ Kickoff
//!                                    ├─▶ Safety ─▶ FreeKick
//!                                    └─▶ Punt / Turnover / Downs ─▶ Scrimmage (other team)
//! Regulation ─(tied)─▶ Overtime(GuaranteedPossession) ─▶ Overtime(SuddenDeath) ─▶ Final
//! ```
//!
//! One engine owns one [`GameRng`]; nothing is shared between games.

/// Per-drive and per-score narration: `info!` when the caller asked for a
/// verbose game, `debug!` otherwise.
macro_rules! game_event {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

mod box_score;
mod clock;
pub mod fourth_down;
pub mod overtime;
pub mod state;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::config::probabilities::{kicking, kickoff as ko, punting};
use crate::engine::config::situational::{clock as timing, respot};
use crate::engine::matchup;
use crate::engine::play::{self, simulate_play, SimTeam, Situation};
use crate::engine::ratings::lineup_ratings;
use crate::engine::rng::GameRng;
use crate::engine::strategy::{StrategyBoosts, TeamStrategy};
use crate::models::{
    Drive, DriveResult, GameResult, Lineup, Play, PlayResultKind, PlayType, Roster, Side,
    TurnoverKind, Winner,
};

pub use fourth_down::FourthDownCall;
pub use state::{GamePhase, GameState, NextSnap, OtPossessions, OvertimeStage};

/// Per-call options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Fixed seed for a reproducible game; entropy when absent.
    pub seed: Option<u64>,
    /// Log drives and scores at `info` instead of `debug`.
    pub verbose: bool,
    /// Regulation snap ceiling.
    pub max_plays: u32,
    /// Overtime snap ceiling.
    pub max_overtime_plays: u32,
    pub home_force_balanced: bool,
    pub away_force_balanced: bool,
    /// When false a tie after regulation stands.
    pub allow_overtime: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: None,
            verbose: false,
            max_plays: timing::DEFAULT_MAX_PLAYS,
            max_overtime_plays: timing::DEFAULT_MAX_OVERTIME_PLAYS,
            home_force_balanced: false,
            away_force_balanced: false,
            allow_overtime: true,
        }
    }
}

impl GameOptions {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Default::default() }
    }
}

#[derive(Debug, Clone)]
struct Teams {
    home: SimTeam,
    away: SimTeam,
}

impl Teams {
    /// Derive both strategies from the base lineups, then boost each lineup
    /// for its matchup against the other.
    fn build(home: &Roster, away: &Roster, options: &GameOptions) -> Self {
        let home_base = Lineup::from_roster(home);
        let away_base = Lineup::from_roster(away);
        let home_strategy = TeamStrategy::derive(&home_base, options.home_force_balanced);
        let away_strategy = TeamStrategy::derive(&away_base, options.away_force_balanced);

        let home_lineup = StrategyBoosts::between(home_strategy, away_strategy).apply(&home_base);
        let away_lineup = StrategyBoosts::between(away_strategy, home_strategy).apply(&away_base);

        Self {
            home: SimTeam {
                side: Side::Home,
                name: home.name.clone(),
                ratings: lineup_ratings(&home_lineup),
                lineup: home_lineup,
                strategy: home_strategy,
            },
            away: SimTeam {
                side: Side::Away,
                name: away.name.clone(),
                ratings: lineup_ratings(&away_lineup),
                lineup: away_lineup,
                strategy: away_strategy,
            },
        }
    }

    fn get(&self, side: Side) -> &SimTeam {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// (offense, defense)
    fn pair(&self, offense: Side) -> (&SimTeam, &SimTeam) {
        match offense {
            Side::Home => (&self.home, &self.away),
            Side::Away => (&self.away, &self.home),
        }
    }
}

pub struct GameEngine {
    teams: Teams,
    options: GameOptions,
    rng: GameRng,
    state: GameState,
}

impl GameEngine {
    pub fn new(home: &Roster, away: &Roster, options: GameOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(home, away, options, rng)
    }

    pub fn with_rng(home: &Roster, away: &Roster, options: GameOptions, mut rng: GameRng) -> Self {
        let teams = Teams::build(home, away, &options);
        let receiver = if rng.coin_flip() { Side::Home } else { Side::Away };
        debug!(
            home = %teams.home.name,
            away = %teams.away.name,
            home_strategy = ?teams.home.strategy,
            away_strategy = ?teams.away.strategy,
            receiver = %receiver,
            "game start"
        );
        Self { teams, options, rng, state: GameState::new(receiver) }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run(mut self) -> GameResult {
        while self.step() {}
        self.into_result()
    }

    /// Advance the game by one transition. Returns `false` once the game is
    /// over.
    pub fn step(&mut self) -> bool {
        if self.state.is_final() {
            return false;
        }
        if self.state.time_remaining == 0 {
            self.end_period();
            return !self.state.is_final();
        }
        match self.state.phase {
            GamePhase::Regulation if self.state.regulation_snaps >= self.options.max_plays => {
                warn!(snaps = self.state.regulation_snaps, "regulation play ceiling reached");
                self.end_regulation();
                return !self.state.is_final();
            }
            GamePhase::Overtime(_)
                if self.state.overtime_snaps >= self.options.max_overtime_plays =>
            {
                self.overtime_fallback();
                return false;
            }
            _ => {}
        }

        match self.state.next_snap {
            NextSnap::Kickoff { kicking } => self.kickoff(kicking),
            NextSnap::FreeKick { kicking } => self.free_kick(kicking),
            NextSnap::Scrimmage => {
                let call = if self.state.down >= 4 {
                    let situation = self.situation();
                    fourth_down::decide(&situation, &mut self.rng)
                } else {
                    FourthDownCall::GoForIt
                };
                match call {
                    FourthDownCall::GoForIt => self.run_scrimmage(),
                    FourthDownCall::FieldGoal => self.attempt_field_goal(),
                    FourthDownCall::Punt => self.punt(),
                }
            }
        }
        !self.state.is_final()
    }

    pub fn into_result(self) -> GameResult {
        let state = self.state;
        let winner = state.winner.unwrap_or(match state.leader() {
            Some(side) => Winner::from(side),
            None => Winner::Tie,
        });
        GameResult {
            home_score: state.home_score,
            away_score: state.away_score,
            winner,
            overtime: state.went_to_overtime,
            plays: state.plays,
            drives: state.drives,
            home_stats: state.home_stats,
            away_stats: state.away_stats,
            home_ratings: self.teams.home.ratings,
            away_ratings: self.teams.away.ratings,
            home_strategy: self.teams.home.strategy,
            away_strategy: self.teams.away.strategy,
            seed: self.options.seed,
        }
    }

    // ------------------------------------------------------------------
    // Bookkeeping
    // ------------------------------------------------------------------

    fn situation(&self) -> Situation {
        let s = &self.state;
        Situation {
            down: s.down,
            yards_to_go: s.yards_to_go,
            field_position: s.field_position,
            quarter: s.quarter,
            time_remaining: s.time_remaining,
            score_diff: s.score_diff(s.possession),
        }
    }

    fn count_snap(&mut self) {
        if self.state.in_overtime() {
            self.state.overtime_snaps += 1;
        } else {
            self.state.regulation_snaps += 1;
        }
    }

    /// A play record stamped with the current snap context.
    fn play_record(
        &self,
        offense: Side,
        play_type: PlayType,
        result: PlayResultKind,
        yards: i32,
        elapsed: u32,
        description: String,
    ) -> Play {
        let s = &self.state;
        Play {
            index: s.plays.len(),
            quarter: s.quarter,
            time_remaining: s.time_remaining,
            offense,
            down: s.down,
            yards_to_go: s.yards_to_go,
            field_position: s.field_position,
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
            first_down: false,
            touchdown: false,
            safety: false,
            description,
        }
    }

    fn push_play(&mut self, mut play: Play) {
        let index = self.state.plays.len();
        play.index = index;
        if let Some(drive) = self.state.current_drive.as_mut() {
            drive.plays.push(index);
        }
        tracing::trace!(index, quarter = play.quarter, "{}", play.description);
        self.state.plays.push(play);
    }

    fn open_drive(&mut self, team: Side, field_position: i32) {
        if self.state.in_overtime() {
            self.state.ot_possessions.record(team);
            self.check_sudden_death_on_open();
        }
        let s = &mut self.state;
        s.current_drive = Some(Drive::open(team, s.quarter, s.time_remaining, field_position));
    }

    pub(crate) fn close_drive(&mut self, result: DriveResult) {
        if let Some(mut drive) = self.state.current_drive.take() {
            drive.result = Some(result);
            game_event!(
                self.options.verbose,
                team = %drive.team,
                result = ?result,
                plays = drive.plays.len(),
                yards = drive.yards,
                "drive over"
            );
            self.state.drives.push(drive);
        }
    }

    pub(crate) fn finish(&mut self, winner: Winner, result: DriveResult) {
        self.close_drive(result);
        self.state.phase = GamePhase::Final;
        self.state.winner = Some(winner);
        game_event!(
            self.options.verbose,
            home = self.state.home_score,
            away = self.state.away_score,
            winner = ?winner,
            overtime = self.state.went_to_overtime,
            "final"
        );
    }

    /// Close the current drive and hand the ball to the other team at
    /// `field_position` (their own perspective).
    fn change_possession(&mut self, result: DriveResult, field_position: i32) {
        let team = self.state.possession;
        self.close_drive(result);
        if self.check_overtime() {
            return;
        }
        let next = team.other();
        self.state.possession = next;
        self.state.set_first_down(field_position);
        self.open_drive(next, field_position);
        self.state.next_snap = NextSnap::Scrimmage;
    }

    // ------------------------------------------------------------------
    // Kicks
    // ------------------------------------------------------------------

    fn kickoff(&mut self, kicking: Side) {
        let receiver = kicking.other();
        let kicker = &self.teams.get(kicking).lineup.k;
        let kicker_name = kicker.short_name();
        let out = matchup::kickoff(kicker.effective_tier(), &mut self.rng);
        let elapsed = play::elapsed(timing::KICKOFF, &mut self.rng);
        let spot = out.receiving_field_position;

        // The receiver owns the ball (and the clock) from the kick on.
        self.state.possession = receiver;
        self.open_drive(receiver, spot);

        let (result, description) = if out.touchback {
            (PlayResultKind::Touchback, format!("{kicker_name} kicks off, touchback"))
        } else {
            (PlayResultKind::KickReturn, format!("{kicker_name} kicks off, returned to the {spot}"))
        };
        let mut record =
            self.play_record(kicking, PlayType::Kickoff, result, spot, elapsed, description);
        record.down = 0;
        record.yards_to_go = 0;
        record.field_position = ko::KICK_SPOT;
        self.push_play(record);
        self.advance_clock(elapsed);

        self.state.set_first_down(spot);
        self.state.next_snap = NextSnap::Scrimmage;
    }

    fn free_kick(&mut self, kicking: Side) {
        let receiver = kicking.other();
        let kicker = &self.teams.get(kicking).lineup.k;
        let kicker_name = kicker.short_name();
        let out = matchup::free_kick(kicker.effective_tier(), &mut self.rng);
        let elapsed = play::elapsed(timing::PUNT, &mut self.rng);
        let spot = out.receiving_field_position;

        self.state.possession = receiver;
        self.open_drive(receiver, spot);

        let (result, description) = if out.touchback {
            (PlayResultKind::Touchback, format!("{kicker_name} free kick, touchback"))
        } else {
            (PlayResultKind::KickReturn, format!("{kicker_name} free kick, returned to the {spot}"))
        };
        let mut record =
            self.play_record(kicking, PlayType::FreeKick, result, spot, elapsed, description);
        record.down = 0;
        record.yards_to_go = 0;
        record.field_position = punting::FREE_KICK_SPOT;
        self.push_play(record);
        self.advance_clock(elapsed);

        self.state.set_first_down(spot);
        self.state.next_snap = NextSnap::Scrimmage;
    }

    fn attempt_field_goal(&mut self) {
        self.count_snap();
        let offense = self.state.possession;
        let spot = self.state.field_position;
        let distance = fourth_down::kick_distance(spot);
        let kicker = &self.teams.get(offense).lineup.k;
        let kicker_name = kicker.short_name();
        let made = matchup::field_goal(kicker.effective_tier(), distance, &mut self.rng);
        let elapsed = play::elapsed(timing::FIELD_GOAL, &mut self.rng);

        let (result, description) = if made {
            (PlayResultKind::FieldGoalGood, format!("{kicker_name} {distance}-yard field goal is GOOD"))
        } else {
            (PlayResultKind::FieldGoalMissed, format!("{kicker_name} {distance}-yard field goal is no good"))
        };
        let record = self.play_record(offense, PlayType::FieldGoal, result, distance, elapsed, description);
        self.push_play(record);
        let stats = self.state.stats_mut(offense);
        stats.field_goal_attempts += 1;
        stats.field_goals_made += u32::from(made);
        self.advance_clock(elapsed);

        if made {
            self.state.add_points(offense, 3);
            game_event!(self.options.verbose, team = %offense, distance, "field goal");
            self.close_drive(DriveResult::FieldGoal);
            if self.check_overtime() {
                return;
            }
            self.state.next_snap = NextSnap::Kickoff { kicking: offense };
        } else {
            let miss_spot = (100 - (spot - kicking::HOLD_YARDS)).clamp(respot::MIN, respot::MAX);
            self.change_possession(DriveResult::MissedFieldGoal, miss_spot);
        }
    }

    fn punt(&mut self) {
        self.count_snap();
        let offense = self.state.possession;
        let punter = &self.teams.get(offense).lineup.p;
        let punter_name = punter.short_name();
        let out = matchup::punt(punter.effective_tier(), self.state.field_position, &mut self.rng);
        let elapsed = play::elapsed(timing::PUNT, &mut self.rng);

        let (result, description) = if out.touchback {
            (PlayResultKind::Touchback, format!("{punter_name} punts {} yards, touchback", out.gross_yards))
        } else {
            (
                PlayResultKind::PuntReturn,
                format!("{punter_name} punts {} yards, returned {}", out.gross_yards, out.return_yards),
            )
        };
        let record = self.play_record(offense, PlayType::Punt, result, out.gross_yards, elapsed, description);
        self.push_play(record);
        self.state.stats_mut(offense).punts += 1;
        self.advance_clock(elapsed);

        self.change_possession(DriveResult::Punt, out.receiving_field_position);
    }

    fn kick_extra_point(&mut self, scorer: Side) {
        let kicker = &self.teams.get(scorer).lineup.k;
        let kicker_name = kicker.short_name();
        let made = matchup::extra_point(kicker.effective_tier(), &mut self.rng);
        let (result, description) = if made {
            (PlayResultKind::ExtraPointGood, format!("{kicker_name} extra point is GOOD"))
        } else {
            (PlayResultKind::ExtraPointMissed, format!("{kicker_name} extra point is no good"))
        };
        let mut record = self.play_record(scorer, PlayType::ExtraPoint, result, 0, 0, description);
        record.down = 0;
        record.yards_to_go = 0;
        record.field_position = kicking::EXTRA_POINT_SPOT;
        self.push_play(record);

        let stats = self.state.stats_mut(scorer);
        stats.extra_point_attempts += 1;
        stats.extra_points_made += u32::from(made);
        if made {
            self.state.add_points(scorer, 1);
        }
    }

    // ------------------------------------------------------------------
    // Scrimmage
    // ------------------------------------------------------------------

    fn run_scrimmage(&mut self) {
        self.count_snap();
        let offense = self.state.possession;
        let situation = self.situation();
        let (off, def) = self.teams.pair(offense);
        let outcome = simulate_play(off, def, &situation, &mut self.rng);

        let start = situation.field_position;
        let spot = (start + outcome.yards).clamp(0, 100);
        let live = outcome.turnover.is_none();
        let touchdown = live && spot >= 100;
        let safety = live && spot <= 0;
        let first_down = live && !touchdown && !safety && outcome.yards >= situation.yards_to_go;

        let mut record = self.play_record(
            offense,
            outcome.play_type,
            outcome.result,
            outcome.yards,
            outcome.elapsed,
            outcome.description,
        );
        record.turnover = outcome.turnover;
        record.pass_type = outcome.pass_type;
        record.separation = outcome.separation;
        record.pressured = outcome.pressured;
        record.pass_defended = outcome.pass_defended;
        record.passer = outcome.passer;
        record.target = outcome.target;
        record.ball_carrier = outcome.ball_carrier;
        record.first_down = first_down;
        record.touchdown = touchdown;
        record.safety = safety;

        box_score::record_scrimmage(self.state.stats_mut(offense), &record);
        if live {
            if let Some(drive) = self.state.current_drive.as_mut() {
                drive.yards += spot - start;
            }
        }
        self.push_play(record);
        self.advance_clock(outcome.elapsed);

        if let Some(kind) = outcome.turnover {
            let result = match kind {
                TurnoverKind::Interception => DriveResult::Interception,
                TurnoverKind::Fumble => DriveResult::Fumble,
            };
            let new_spot = (100 - start - outcome.yards).clamp(respot::MIN, respot::MAX);
            self.change_possession(result, new_spot);
            return;
        }

        self.state.field_position = spot;
        if touchdown {
            self.score_touchdown(offense);
        } else if safety {
            self.score_safety(offense);
        } else if first_down {
            self.state.set_first_down(spot);
        } else {
            self.state.yards_to_go -= outcome.yards;
            self.state.down += 1;
            if self.state.down > 4 {
                self.change_possession(DriveResult::Downs, 100 - spot);
            }
        }
    }

    // ------------------------------------------------------------------
    // Scoring
    // ------------------------------------------------------------------

    pub(crate) fn score_touchdown(&mut self, scorer: Side) {
        self.state.add_points(scorer, 6);
        self.state.stats_mut(scorer).touchdowns += 1;
        game_event!(
            self.options.verbose,
            team = %scorer,
            home = self.state.home_score,
            away = self.state.away_score,
            "touchdown"
        );

        // A sudden-death touchdown ends the game on the spot.
        if self.state.phase != GamePhase::Overtime(OvertimeStage::SuddenDeath) {
            self.kick_extra_point(scorer);
        }
        self.close_drive(DriveResult::Touchdown);
        if self.check_overtime() {
            return;
        }
        self.state.next_snap = NextSnap::Kickoff { kicking: scorer };
    }

    fn score_safety(&mut self, offense: Side) {
        let defense = offense.other();
        self.state.add_points(defense, 2);
        self.state.stats_mut(defense).safeties += 1;
        game_event!(self.options.verbose, team = %defense, "safety");

        self.close_drive(DriveResult::Safety);
        if self.check_overtime() {
            return;
        }
        self.state.next_snap = NextSnap::FreeKick { kicking: offense };
    }
}

/// Simulate a full game between two rosters.
pub fn simulate_game(home: &Roster, away: &Roster, options: &GameOptions) -> GameResult {
    GameEngine::new(home, away, options.clone()).run()
}

/// Simulate with a caller-supplied generator (batch runners derive one per
/// game).
pub fn simulate_game_with_rng(
    home: &Roster,
    away: &Roster,
    options: &GameOptions,
    rng: GameRng,
) -> GameResult {
    GameEngine::with_rng(home, away, options.clone(), rng).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::situational::clock::{OVERTIME_SECONDS, QUARTER_SECONDS};

    fn engine(seed: u64) -> GameEngine {
        GameEngine::with_rng(
            &Roster::uniform("Home", 5.0),
            &Roster::uniform("Away", 5.0),
            GameOptions::default(),
            GameRng::seeded(seed),
        )
    }

    /// Put the engine at the end of a tied regulation and start overtime.
    fn tied_overtime(seed: u64, receiver: Side) -> GameEngine {
        let mut e = engine(seed);
        e.state.home_score = 17;
        e.state.away_score = 17;
        e.state.quarter = 4;
        e.state.time_remaining = 0;
        e.begin_overtime_with_receiver(receiver);
        e
    }

    #[test]
    fn test_same_seed_same_game() {
        let home = Roster::uniform("A", 7.0);
        let away = Roster::uniform("B", 6.0);
        let opts = GameOptions::seeded(2024);
        assert_eq!(simulate_game(&home, &away, &opts), simulate_game(&home, &away, &opts));
    }

    #[test]
    fn test_play_log_invariants() {
        for seed in 0..20 {
            let result = simulate_game(
                &Roster::uniform("A", 6.0),
                &Roster::uniform("B", 5.0),
                &GameOptions::seeded(seed),
            );
            let mut last: Option<&Play> = None;
            for (i, play) in result.plays.iter().enumerate() {
                assert_eq!(play.index, i);
                assert!((0..=100).contains(&play.field_position), "{play:?}");
                if matches!(play.play_type, PlayType::Pass | PlayType::Run) {
                    assert!((1..=4).contains(&play.down), "{play:?}");
                    assert!(play.yards_to_go >= 1);
                }
                if let Some(prev) = last {
                    // Overtime periods share quarter 5 and reset the clock.
                    if prev.quarter == play.quarter && play.quarter <= 4 {
                        assert!(play.time_remaining <= prev.time_remaining, "clock ran backwards");
                    }
                }
                last = Some(play);
            }
            for drive in &result.drives {
                assert!(drive.result.is_some());
                assert!(drive.plays.windows(2).all(|w| w[0] < w[1]));
                assert!(drive.plays.iter().all(|&i| i < result.plays.len()));
            }
            assert!(result.plays.iter().all(|p| p.description.len() > 3));
        }
    }

    #[test]
    fn test_time_of_possession_covers_regulation() {
        let result = simulate_game(
            &Roster::uniform("A", 5.0),
            &Roster::uniform("B", 5.0),
            &GameOptions { allow_overtime: false, ..GameOptions::seeded(9) },
        );
        let top = result.home_stats.time_of_possession + result.away_stats.time_of_possession;
        assert_eq!(top, 4 * QUARTER_SECONDS);
    }

    #[test]
    fn test_halftime_kickoff_goes_to_other_team() {
        let mut e = engine(4);
        e.state.quarter = 2;
        e.state.time_remaining = 0;
        let opening = e.state.opening_receiver;
        assert!(e.step());
        assert_eq!(e.state.quarter, 3);
        assert_eq!(e.state.next_snap, NextSnap::Kickoff { kicking: opening });
        assert!(e.step());
        assert_eq!(e.state.possession, opening.other());
    }

    #[test]
    fn test_first_possession_touchdown_gives_opponent_the_ball() {
        let mut e = tied_overtime(11, Side::Home);
        assert!(e.step());
        assert_eq!(e.state.possession, Side::Home);
        assert_eq!(e.state.ot_possessions, OtPossessions { home: 1, away: 0 });

        e.score_touchdown(Side::Home);
        assert!(!e.state.is_final());
        assert_eq!(e.state.phase, GamePhase::Overtime(OvertimeStage::GuaranteedPossession));
        assert_eq!(e.state.next_snap, NextSnap::Kickoff { kicking: Side::Home });

        assert!(e.step());
        assert_eq!(e.state.possession, Side::Away);
        assert_eq!(e.state.ot_possessions.away, 1);
    }

    #[test]
    fn test_sudden_death_touchdown_skips_extra_point() {
        let mut e = tied_overtime(12, Side::Away);
        assert!(e.step());
        e.state.phase = GamePhase::Overtime(OvertimeStage::SuddenDeath);
        let plays_before = e.state.plays.len();
        e.score_touchdown(Side::Away);
        assert!(e.state.is_final());
        assert_eq!(e.state.winner, Some(Winner::Away));
        assert_eq!(e.state.away_score, 23);
        assert_eq!(e.state.plays.len(), plays_before);
        assert_eq!(e.state.drives.last().and_then(|d| d.result), Some(DriveResult::Touchdown));
    }

    #[test]
    fn test_tied_drive_after_both_possess_is_sudden_death() {
        let mut e = tied_overtime(14, Side::Home);
        assert!(e.step());
        assert_eq!(e.state.possession, Side::Home);

        e.change_possession(DriveResult::Punt, 30);
        assert_eq!(e.state.ot_possessions, OtPossessions { home: 1, away: 1 });
        assert_eq!(e.state.phase, GamePhase::Overtime(OvertimeStage::SuddenDeath));

        let plays_before = e.state.plays.len();
        e.score_touchdown(Side::Away);
        assert!(e.state.is_final());
        assert_eq!(e.state.winner, Some(Winner::Away));
        assert_eq!(e.state.away_score, 23);
        assert_eq!(e.state.plays.len(), plays_before);
    }

    #[test]
    fn test_expired_period_after_both_possess_enters_sudden_death() {
        let mut e = tied_overtime(15, Side::Away);
        assert!(e.step());
        e.state.ot_possessions = OtPossessions { home: 1, away: 1 };
        e.state.phase = GamePhase::Overtime(OvertimeStage::GuaranteedPossession);
        e.state.time_remaining = 0;
        assert!(e.step());
        assert_eq!(e.state.phase, GamePhase::Overtime(OvertimeStage::SuddenDeath));
        assert_eq!(e.state.time_remaining, OVERTIME_SECONDS);
    }

    #[test]
    fn test_tie_stands_without_overtime() {
        let mut e = GameEngine::with_rng(
            &Roster::uniform("A", 5.0),
            &Roster::uniform("B", 5.0),
            GameOptions { allow_overtime: false, ..GameOptions::default() },
            GameRng::seeded(3),
        );
        e.state.quarter = 4;
        e.state.time_remaining = 0;
        assert!(!e.step());
        assert_eq!(e.into_result().winner, Winner::Tie);
    }

    #[test]
    fn test_overtime_period_resets_while_tied() {
        let mut e = tied_overtime(13, Side::Home);
        assert!(e.step());
        e.state.time_remaining = 0;
        assert!(e.step());
        assert_eq!(e.state.time_remaining, OVERTIME_SECONDS);
        assert_eq!(e.state.quarter, 5);
    }

    #[test]
    fn test_regulation_ceiling_forces_end() {
        let opts = GameOptions { max_plays: 12, ..GameOptions::seeded(5) };
        let e = GameEngine::new(&Roster::uniform("A", 5.0), &Roster::uniform("B", 5.0), opts);
        let result = e.run();
        let regulation_snaps = result
            .plays
            .iter()
            .filter(|p| p.quarter <= 4)
            .filter(|p| matches!(p.play_type, PlayType::Pass | PlayType::Run | PlayType::Punt | PlayType::FieldGoal))
            .count();
        assert!(regulation_snaps <= 12);
        assert_ne!(result.winner, Winner::Tie);
    }

    #[test]
    fn test_overtime_ceiling_picks_a_winner() {
        let opts = GameOptions { max_overtime_plays: 0, ..GameOptions::seeded(8) };
        let mut e = GameEngine::new(&Roster::uniform("A", 5.0), &Roster::uniform("B", 5.0), opts);
        e.state.quarter = 4;
        e.state.time_remaining = 0;
        e.state.home_score = 10;
        e.state.away_score = 10;
        while e.step() {}
        let result = e.into_result();
        assert!(result.overtime);
        assert_ne!(result.winner, Winner::Tie);
    }
}
