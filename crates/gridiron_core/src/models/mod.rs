pub mod game_result;
pub mod lineup;
pub mod player;
pub mod roster;

pub use game_result::{
    Drive, DriveResult, GameResult, Play, PlayResultKind, PlayType, Side, TeamStats,
    TurnoverKind, Winner,
};
pub use lineup::Lineup;
pub use player::{Player, PosGroup, SeasonStats};
pub use roster::{LegacyRoster, Roster, RosterInput, Slot};
