pub mod json_api;

pub use json_api::{
    calculate_team_ratings_json, run_request, simulate_game_json, GameRequest, GameResponse,
    RatingsRequest, RatingsResponse,
};
