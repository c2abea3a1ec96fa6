//! Strategy archetypes and the rock-paper-scissors matchup table.
//!
//! The table is the single source of truth for who wins a strategy matchup.
//! There are exactly three outcomes; no in-between state is ever derived.

use serde::{Deserialize, Serialize};

use crate::models::PosGroup;

/// Magnitude of the strategy matchup swing (±0.7%).
pub const STRATEGY_BOOST: f64 = 0.007;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OffensiveStrategy {
    PassHeavy,
    #[default]
    Balanced,
    RunHeavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DefensiveStrategy {
    CoverageShell,
    RunStuff,
    #[default]
    BaseDefense,
}

/// Result of an offense-vs-defense strategy matchup, from the offense's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchupOutcome {
    /// Offense exploits the defense.
    Advantage,
    /// Defense has the offense's number.
    Captured,
    Neutral,
}

impl OffensiveStrategy {
    pub const ALL: [OffensiveStrategy; 3] =
        [OffensiveStrategy::PassHeavy, OffensiveStrategy::Balanced, OffensiveStrategy::RunHeavy];

    /// Starting pass tendency before playstyle and situation.
    pub fn base_pass_tendency(self) -> f64 {
        match self {
            OffensiveStrategy::PassHeavy => 0.62,
            OffensiveStrategy::Balanced => 0.55,
            OffensiveStrategy::RunHeavy => 0.45,
        }
    }

    /// Position groups whose ratings the matchup multiplier touches.
    pub fn affected_groups(self) -> &'static [PosGroup] {
        match self {
            OffensiveStrategy::PassHeavy => &[PosGroup::QB, PosGroup::WR, PosGroup::TE],
            OffensiveStrategy::Balanced => &[PosGroup::QB, PosGroup::RB],
            OffensiveStrategy::RunHeavy => &[PosGroup::RB, PosGroup::OL, PosGroup::TE],
        }
    }
}

impl DefensiveStrategy {
    pub const ALL: [DefensiveStrategy; 3] = [
        DefensiveStrategy::CoverageShell,
        DefensiveStrategy::RunStuff,
        DefensiveStrategy::BaseDefense,
    ];

    pub fn affected_groups(self) -> &'static [PosGroup] {
        match self {
            DefensiveStrategy::CoverageShell => &[PosGroup::DB, PosGroup::LB],
            DefensiveStrategy::RunStuff => &[PosGroup::DL, PosGroup::LB],
            DefensiveStrategy::BaseDefense => &[PosGroup::DL, PosGroup::LB, PosGroup::DB],
        }
    }
}

impl MatchupOutcome {
    /// Multiplier for the offense's affected groups.
    pub fn offense_multiplier(self) -> f64 {
        match self {
            MatchupOutcome::Advantage => 1.0 + STRATEGY_BOOST,
            MatchupOutcome::Captured => 1.0 - STRATEGY_BOOST,
            MatchupOutcome::Neutral => 1.0,
        }
    }

    /// Multiplier for the defense's affected groups (mirror of the offense).
    pub fn defense_multiplier(self) -> f64 {
        match self {
            MatchupOutcome::Advantage => 1.0 - STRATEGY_BOOST,
            MatchupOutcome::Captured => 1.0 + STRATEGY_BOOST,
            MatchupOutcome::Neutral => 1.0,
        }
    }
}

/// Canonical matchup lookup.
pub fn strategy_matchup(offense: OffensiveStrategy, defense: DefensiveStrategy) -> MatchupOutcome {
    use DefensiveStrategy::*;
    use OffensiveStrategy::*;
    match (offense, defense) {
        (PassHeavy, RunStuff) => MatchupOutcome::Advantage,
        (PassHeavy, CoverageShell) => MatchupOutcome::Captured,
        (PassHeavy, BaseDefense) => MatchupOutcome::Neutral,
        (RunHeavy, CoverageShell) => MatchupOutcome::Advantage,
        (RunHeavy, RunStuff) => MatchupOutcome::Captured,
        (RunHeavy, BaseDefense) => MatchupOutcome::Neutral,
        (Balanced, BaseDefense) => MatchupOutcome::Captured,
        (Balanced, CoverageShell) => MatchupOutcome::Neutral,
        (Balanced, RunStuff) => MatchupOutcome::Neutral,
    }
}
