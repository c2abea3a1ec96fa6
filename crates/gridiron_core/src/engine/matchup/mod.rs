//! Matchup primitives.
//!
//! Stateless functions that turn two tiers (or a card, where its traits
//! matter) plus draws from a [`GameRng`](crate::engine::rng::GameRng) into a
//! structured outcome. Every probability is clamped to an explicit floor and
//! ceiling.

pub mod passing;
pub mod rushing;
pub mod special_teams;

pub use passing::{
    catch_ability, catch_ball, coverage, protection, throw_accuracy, CatchOutcome,
    ProtectionOutcome,
};
pub use rushing::{qb_run, run_blocking, rush, BlockingOutcome, RushOutcome};
pub use special_teams::{
    extra_point, field_goal, free_kick, kickoff, punt, KickoffOutcome, PuntOutcome,
};
