//! Game records: plays, drives, box score and the final result.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::config::probabilities::{PassType, Separation};
use crate::engine::ratings::TeamRatings;
use crate::engine::strategy::TeamStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Home => f.write_str("home"),
            Side::Away => f.write_str("away"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Home,
    Away,
    Tie,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Home => Winner::Home,
            Side::Away => Winner::Away,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayType {
    Pass,
    Run,
    Kickoff,
    FreeKick,
    Punt,
    FieldGoal,
    ExtraPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayResultKind {
    // Pass
    Sack,
    Scramble,
    Complete,
    Incomplete,
    Interception,
    // Run
    Stuffed,
    Gain,
    BigGain,
    Fumble,
    // Kicks
    Touchback,
    KickReturn,
    PuntReturn,
    FieldGoalGood,
    FieldGoalMissed,
    ExtraPointGood,
    ExtraPointMissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnoverKind {
    Interception,
    Fumble,
}

/// One snap. Appended to `GameResult::plays` and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Play {
    pub index: usize,
    pub quarter: u8,
    /// Seconds left in the quarter at the snap.
    pub time_remaining: u32,
    /// Team in possession at the snap (the kicking team for kicks).
    pub offense: Side,
    pub down: u8,
    pub yards_to_go: i32,
    /// Offense's own-perspective spot at the snap.
    pub field_position: i32,
    pub play_type: PlayType,
    pub result: PlayResultKind,
    /// Net yards (air yards intended for an interception, return spot for kicks).
    pub yards: i32,
    pub elapsed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnover: Option<TurnoverKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_type: Option<PassType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separation: Option<Separation>,
    #[serde(default)]
    pub pressured: bool,
    #[serde(default)]
    pub pass_defended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_carrier: Option<String>,
    #[serde(default)]
    pub first_down: bool,
    #[serde(default)]
    pub touchdown: bool,
    #[serde(default)]
    pub safety: bool,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveResult {
    Touchdown,
    FieldGoal,
    MissedFieldGoal,
    Punt,
    Interception,
    Fumble,
    Downs,
    Safety,
    EndOfHalf,
    EndOfRegulation,
    EndOfGame,
}

impl DriveResult {
    pub fn is_turnover(self) -> bool {
        matches!(self, DriveResult::Interception | DriveResult::Fumble | DriveResult::Downs)
    }

    pub fn is_score(self) -> bool {
        matches!(self, DriveResult::Touchdown | DriveResult::FieldGoal)
    }

    /// Drive cut short by the clock rather than by a football event.
    pub fn is_period_end(self) -> bool {
        matches!(
            self,
            DriveResult::EndOfHalf | DriveResult::EndOfRegulation | DriveResult::EndOfGame
        )
    }
}

/// A contiguous possession by one team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Drive {
    pub team: Side,
    pub start_quarter: u8,
    pub start_time: u32,
    pub start_field_position: i32,
    /// Indices into `GameResult::plays`.
    pub plays: Vec<usize>,
    pub yards: i32,
    pub time_elapsed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DriveResult>,
}

impl Drive {
    pub fn open(team: Side, quarter: u8, time_remaining: u32, field_position: i32) -> Self {
        Self {
            team,
            start_quarter: quarter,
            start_time: time_remaining,
            start_field_position: field_position,
            plays: Vec::new(),
            yards: 0,
            time_elapsed: 0,
            result: None,
        }
    }
}

/// Box-score counters for one team.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamStats {
    pub points: u32,
    pub touchdowns: u32,
    pub extra_point_attempts: u32,
    pub extra_points_made: u32,
    pub field_goal_attempts: u32,
    pub field_goals_made: u32,
    /// Safeties scored by this team's defense.
    pub safeties: u32,

    pub plays: u32,
    pub total_yards: i32,
    pub first_downs: u32,

    pub pass_attempts: u32,
    pub completions: u32,
    pub passing_yards: i32,
    pub interceptions_thrown: u32,
    pub sacks_taken: u32,
    pub sack_yards_lost: i32,

    pub rush_attempts: u32,
    pub rushing_yards: i32,
    pub fumbles_lost: u32,

    pub turnovers: u32,
    pub third_down_attempts: u32,
    pub third_down_conversions: u32,
    pub fourth_down_attempts: u32,
    pub fourth_down_conversions: u32,
    pub punts: u32,
    pub big_plays: u32,

    /// Seconds of game clock run while this team had the ball.
    pub time_of_possession: u32,
}

impl TeamStats {
    pub fn completion_pct(&self) -> f64 {
        if self.pass_attempts == 0 {
            return 0.0;
        }
        self.completions as f64 / self.pass_attempts as f64
    }

    pub fn yards_per_carry(&self) -> f64 {
        if self.rush_attempts == 0 {
            return 0.0;
        }
        self.rushing_yards as f64 / self.rush_attempts as f64
    }
}

/// Read-only outcome of one simulated game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameResult {
    pub home_score: u32,
    pub away_score: u32,
    pub winner: Winner,
    pub overtime: bool,
    pub plays: Vec<Play>,
    pub drives: Vec<Drive>,
    pub home_stats: TeamStats,
    pub away_stats: TeamStats,
    pub home_ratings: TeamRatings,
    pub away_ratings: TeamRatings,
    pub home_strategy: TeamStrategy,
    pub away_strategy: TeamStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GameResult {
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    pub fn stats(&self, side: Side) -> &TeamStats {
        match side {
            Side::Home => &self.home_stats,
            Side::Away => &self.away_stats,
        }
    }

    pub fn total_points(&self) -> u32 {
        self.home_score + self.away_score
    }

    /// Drives that started in overtime.
    pub fn overtime_drives(&self) -> impl Iterator<Item = &Drive> {
        self.drives.iter().filter(|d| d.start_quarter > 4)
    }
}
