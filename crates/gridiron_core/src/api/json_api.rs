use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::game::{simulate_game, GameOptions};
use crate::engine::ratings::{calculate_team_ratings, TeamRatings};
use crate::engine::strategy::{StrategyContext, TeamStrategy};
use crate::error::{GameError, Result};
use crate::models::{GameResult, Lineup, RosterInput};
use crate::SCHEMA_VERSION;

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

fn check_schema(found: u8) -> Result<()> {
    if found == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(GameError::UnsupportedSchema { found, expected: SCHEMA_VERSION })
    }
}

// ============================================================================
// Game simulation
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    /// Overrides `options.seed` when present.
    #[serde(default)]
    pub seed: Option<u64>,
    pub home: RosterInput,
    pub away: RosterInput,
    #[serde(default)]
    pub options: GameOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub schema_version: u8,
    pub home_team: String,
    pub away_team: String,
    #[serde(flatten)]
    pub result: GameResult,
}

/// Simulate one game from a JSON request, returning the full result as JSON.
pub fn simulate_game_json(request_json: &str) -> Result<String> {
    let request: GameRequest = serde_json::from_str(request_json)?;
    let response = run_request(request)?;
    serde_json::to_string(&response).map_err(|e| GameError::Serialization(e.to_string()))
}

pub fn run_request(request: GameRequest) -> Result<GameResponse> {
    check_schema(request.schema_version)?;
    let home = request.home.into_roster();
    let away = request.away.into_roster();
    let mut options = request.options;
    if request.seed.is_some() {
        options.seed = request.seed;
    }
    debug!(home = %home.name, away = %away.name, seed = ?options.seed, "json game request");

    let result = simulate_game(&home, &away, &options);
    Ok(GameResponse {
        schema_version: SCHEMA_VERSION,
        home_team: home.name,
        away_team: away.name,
        result,
    })
}

// ============================================================================
// Team ratings
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingsRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub roster: RosterInput,
    /// Opponent roster; when given, ratings include the strategy matchup
    /// boosts against it.
    #[serde(default)]
    pub opponent: Option<RosterInput>,
    #[serde(default)]
    pub force_balanced: bool,
    #[serde(default)]
    pub opponent_force_balanced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingsResponse {
    pub schema_version: u8,
    pub team: String,
    pub strategy: TeamStrategy,
    pub ratings: TeamRatings,
}

pub fn calculate_team_ratings_json(request_json: &str) -> Result<String> {
    let request: RatingsRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let roster = request.roster.into_roster();
    let strategy = TeamStrategy::derive(&Lineup::from_roster(&roster), request.force_balanced);
    let context = request.opponent.map(|opponent| {
        let opponent = opponent.into_roster();
        StrategyContext {
            opponent: TeamStrategy::derive(
                &Lineup::from_roster(&opponent),
                request.opponent_force_balanced,
            ),
            force_balanced: request.force_balanced,
        }
    });
    let ratings = calculate_team_ratings(&roster, context.as_ref());

    let response = RatingsResponse { schema_version: SCHEMA_VERSION, team: roster.name, strategy, ratings };
    serde_json::to_string(&response).map_err(|e| GameError::Serialization(e.to_string()))
}
