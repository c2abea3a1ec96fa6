//! # Engine Configuration
//!
//! Every tuning constant of the simulation lives under this module, grouped by
//! the subsystem that consumes it:
//!
//! | Module | Contents |
//! |--------|----------|
//! | `tiers` | tier → rating curve, replacement tier, intra-tier trait offset |
//! | `playstyle` | QB playstyle archetypes and their rating/tendency profiles |
//! | `weights` | position blend weights for team ratings |
//! | `probabilities` | base outcome probabilities for every matchup primitive |
//! | `situational` | pass-tendency deltas, fourth-down bands, clock ranges |
//! | `strategy_table` | offensive/defensive strategies and the matchup lookup |
//!
//! Everything here is pure data. Lookups are keyed by enums and consumed with
//! exhaustive `match`, so a missing table entry is a compile error rather than
//! a silent default.

pub mod playstyle;
pub mod probabilities;
pub mod situational;
pub mod strategy_table;
pub mod tiers;
pub mod weights;

pub use playstyle::{PlaystyleProfile, QbPlaystyle};
pub use strategy_table::{
    DefensiveStrategy, MatchupOutcome, OffensiveStrategy, STRATEGY_BOOST,
};
pub use tiers::{tier_to_rating, REPLACEMENT_TIER};
