//! The single mutable aggregate of a game in progress.

use serde::{Deserialize, Serialize};

use crate::engine::config::situational::clock;
use crate::models::{Drive, Play, Side, TeamStats, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OvertimeStage {
    /// A score only ends the game once the trailing team has had the ball.
    GuaranteedPossession,
    /// Both teams have possessed; any score ends the game.
    SuddenDeath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Regulation,
    Overtime(OvertimeStage),
    Final,
}

/// What the next snap is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextSnap {
    Kickoff { kicking: Side },
    /// Free kick after a safety, by the team that gave it up.
    FreeKick { kicking: Side },
    Scrimmage,
}

/// Overtime drives started by each team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OtPossessions {
    pub home: u32,
    pub away: u32,
}

impl OtPossessions {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    pub fn record(&mut self, side: Side) {
        match side {
            Side::Home => self.home += 1,
            Side::Away => self.away += 1,
        }
    }

    pub fn both_possessed(&self) -> bool {
        self.home >= 1 && self.away >= 1
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub next_snap: NextSnap,

    pub home_score: u32,
    pub away_score: u32,

    /// 1-4 in regulation, 5 for every overtime period.
    pub quarter: u8,
    /// Seconds left in the current period. Only decreases within a period.
    pub time_remaining: u32,

    pub possession: Side,
    /// 0-100 from the offense's own goal line.
    pub field_position: i32,
    /// 1-4 at rest.
    pub down: u8,
    pub yards_to_go: i32,

    pub opening_receiver: Side,
    pub went_to_overtime: bool,
    pub ot_possessions: OtPossessions,
    pub regulation_snaps: u32,
    pub overtime_snaps: u32,

    pub plays: Vec<Play>,
    pub drives: Vec<Drive>,
    pub current_drive: Option<Drive>,
    pub home_stats: TeamStats,
    pub away_stats: TeamStats,
    pub winner: Option<Winner>,
}

impl GameState {
    pub fn new(opening_receiver: Side) -> Self {
        Self {
            phase: GamePhase::Regulation,
            next_snap: NextSnap::Kickoff { kicking: opening_receiver.other() },
            home_score: 0,
            away_score: 0,
            quarter: 1,
            time_remaining: clock::QUARTER_SECONDS,
            possession: opening_receiver,
            field_position: 25,
            down: 1,
            yards_to_go: 10,
            opening_receiver,
            went_to_overtime: false,
            ot_possessions: OtPossessions::default(),
            regulation_snaps: 0,
            overtime_snaps: 0,
            plays: Vec::new(),
            drives: Vec::new(),
            current_drive: None,
            home_stats: TeamStats::default(),
            away_stats: TeamStats::default(),
            winner: None,
        }
    }

    pub fn is_final(&self) -> bool {
        self.phase == GamePhase::Final
    }

    pub fn in_overtime(&self) -> bool {
        matches!(self.phase, GamePhase::Overtime(_))
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    /// Points for `side` minus points for the other team.
    pub fn score_diff(&self, side: Side) -> i32 {
        self.score(side) as i32 - self.score(side.other()) as i32
    }

    /// Team ahead on the scoreboard, if any.
    pub fn leader(&self) -> Option<Side> {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn stats_mut(&mut self, side: Side) -> &mut TeamStats {
        match side {
            Side::Home => &mut self.home_stats,
            Side::Away => &mut self.away_stats,
        }
    }

    pub fn add_points(&mut self, side: Side, points: u32) {
        match side {
            Side::Home => self.home_score += points,
            Side::Away => self.away_score += points,
        }
        self.stats_mut(side).points += points;
    }

    /// First-and-ten (or goal) for `side` at `field_position`.
    pub fn set_first_down(&mut self, field_position: i32) {
        self.field_position = field_position;
        self.down = 1;
        self.yards_to_go = 10.min(100 - field_position);
    }
}
