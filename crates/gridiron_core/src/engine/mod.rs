//! Simulation engine.
//!
//! Layered bottom-up: `config` holds the tuning tables, `matchup` resolves
//! one unit against another, `ratings`/`strategy` summarize a team before
//! kickoff, `play` resolves a single snap and `game` runs the state machine.

pub mod config;
pub mod game;
pub mod matchup;
pub mod play;
pub mod ratings;
pub mod rng;
pub mod strategy;

pub use game::{
    simulate_game, simulate_game_with_rng, GameEngine, GameOptions, GamePhase, GameState,
    NextSnap, OvertimeStage,
};
pub use play::{simulate_play, PlayOutcome, SimTeam, Situation};
pub use ratings::{
    calculate_team_ratings, lineup_ratings, DefenseRatings, OffenseRatings, SpecialTeamsRatings,
    TeamRatings,
};
pub use rng::GameRng;
pub use strategy::{StrategyBoosts, StrategyContext, TeamStrategy};
