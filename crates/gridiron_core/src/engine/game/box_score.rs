//! Box-score accumulation for scrimmage snaps.

use crate::engine::config::probabilities::rushing::BIG_GAIN_YARDS;
use crate::models::{Play, PlayResultKind, TeamStats};

/// Completions of at least this many yards count as big plays.
pub const BIG_PASS_YARDS: i32 = 20;

/// Credit a pass or run snap to the offense's box score.
pub fn record_scrimmage(offense: &mut TeamStats, play: &Play) {
    match play.result {
        PlayResultKind::Sack => {
            offense.sacks_taken += 1;
            offense.sack_yards_lost += -play.yards;
            offense.total_yards += play.yards;
        }
        PlayResultKind::Complete => {
            offense.pass_attempts += 1;
            offense.completions += 1;
            offense.passing_yards += play.yards;
            offense.total_yards += play.yards;
            if play.yards >= BIG_PASS_YARDS {
                offense.big_plays += 1;
            }
        }
        PlayResultKind::Incomplete => {
            offense.pass_attempts += 1;
        }
        PlayResultKind::Interception => {
            offense.pass_attempts += 1;
            offense.interceptions_thrown += 1;
            offense.turnovers += 1;
        }
        PlayResultKind::Scramble
        | PlayResultKind::Stuffed
        | PlayResultKind::Gain
        | PlayResultKind::BigGain
        | PlayResultKind::Fumble => {
            offense.rush_attempts += 1;
            offense.rushing_yards += play.yards;
            offense.total_yards += play.yards;
            if play.yards >= BIG_GAIN_YARDS {
                offense.big_plays += 1;
            }
            if play.result == PlayResultKind::Fumble {
                offense.fumbles_lost += 1;
                offense.turnovers += 1;
            }
        }
        // Kicks are credited by the game loop.
        PlayResultKind::Touchback
        | PlayResultKind::KickReturn
        | PlayResultKind::PuntReturn
        | PlayResultKind::FieldGoalGood
        | PlayResultKind::FieldGoalMissed
        | PlayResultKind::ExtraPointGood
        | PlayResultKind::ExtraPointMissed => return,
    }

    offense.plays += 1;
    if play.first_down {
        offense.first_downs += 1;
    }
    let converted = play.first_down || play.touchdown;
    match play.down {
        3 => {
            offense.third_down_attempts += 1;
            offense.third_down_conversions += u32::from(converted);
        }
        4 => {
            offense.fourth_down_attempts += 1;
            offense.fourth_down_conversions += u32::from(converted);
        }
        _ => {}
    }
}
