//! QB playstyle archetypes.
//!
//! The playstyle shapes how much of the passing rating comes from the QB
//! versus the receivers, how much the QB feeds the run game, and how eagerly
//! the offense throws.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QbPlaystyle {
    PassHeavy,
    DualThreat,
    #[default]
    Balanced,
    GameManager,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaystyleProfile {
    /// Share of the raw passing rating taken from the QB.
    pub qb_weight: f64,
    /// Share of the raw passing rating taken from the receivers.
    pub wr_weight: f64,
    /// How much of the run rating the QB absorbs (dual threats only).
    pub rush_contribution: f64,
    /// Added to the base pass tendency.
    pub pass_tendency_shift: f64,
    /// Multiplier on the scramble chance when pressured.
    pub scramble_factor: f64,
}

impl QbPlaystyle {
    pub fn profile(self) -> PlaystyleProfile {
        match self {
            QbPlaystyle::PassHeavy => PlaystyleProfile {
                qb_weight: 0.55,
                wr_weight: 0.45,
                rush_contribution: 0.0,
                pass_tendency_shift: 0.06,
                scramble_factor: 0.8,
            },
            QbPlaystyle::DualThreat => PlaystyleProfile {
                qb_weight: 0.50,
                wr_weight: 0.50,
                rush_contribution: 0.30,
                pass_tendency_shift: -0.06,
                scramble_factor: 1.5,
            },
            QbPlaystyle::Balanced => PlaystyleProfile {
                qb_weight: 0.50,
                wr_weight: 0.50,
                rush_contribution: 0.10,
                pass_tendency_shift: 0.0,
                scramble_factor: 1.0,
            },
            QbPlaystyle::GameManager => PlaystyleProfile {
                qb_weight: 0.45,
                wr_weight: 0.55,
                rush_contribution: 0.05,
                pass_tendency_shift: -0.03,
                scramble_factor: 0.9,
            },
        }
    }
}

/// Per-game volume thresholds used by playstyle classification.
pub mod thresholds {
    /// Fewer games than this is not enough sample: classify as balanced.
    pub const MIN_GAMES: u32 = 3;
    pub const DUAL_THREAT_RUSHES_PER_GAME: f64 = 7.0;
    pub const PASS_HEAVY_ATTEMPTS_PER_GAME: f64 = 35.0;
    pub const PASS_HEAVY_MAX_RUSHES_PER_GAME: f64 = 4.0;
    pub const GAME_MANAGER_MAX_ATTEMPTS_PER_GAME: f64 = 26.0;
}
