//! # gridiron_core - Tier-Based American Football Simulation Engine
//!
//! Simulates a full game between two card rosters. Every player card carries
//! a tier (1-11); tiers map to ratings, ratings drive probabilistic unit
//! matchups, matchups resolve plays, and a game state machine strings plays
//! into drives, quarters and overtime.
//!
//! ## Features
//! - Deterministic per seed (same rosters + seed = same result)
//! - Full play-by-play log, drive summaries and a per-team box score
//! - Strategy derivation with rock-paper-scissors matchup boosts
//! - Modern overtime with a guaranteed first possession
//! - JSON API and parallel calibration batches

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Play records carry many fields; constructors take them all
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod calibration;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{calculate_team_ratings_json, simulate_game_json, GameRequest, GameResponse};
pub use error::{GameError, Result};

// Re-export the engine surface
pub use engine::{
    calculate_team_ratings, simulate_game, simulate_game_with_rng, GameEngine, GameOptions,
    GameRng, StrategyContext, TeamRatings, TeamStrategy,
};
pub use models::{
    Drive, DriveResult, GameResult, LegacyRoster, Lineup, Play, Player, PosGroup, Roster, RosterInput,
    Side, Slot, TeamStats, Winner,
};

// Calibration
pub use calibration::{BatchReport, BatchRunner};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
