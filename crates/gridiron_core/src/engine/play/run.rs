use crate::engine::config::probabilities::{qb_run as keeper, rushing};
use crate::engine::config::situational::clock;
use crate::engine::matchup::{self, BlockingOutcome};
use crate::engine::rng::GameRng;
use crate::models::{PlayResultKind, PlayType, Slot, TurnoverKind};

use super::{elapsed, PlayOutcome, SimTeam};

fn designed_qb_run_probability(offense: &SimTeam) -> f64 {
    keeper::DESIGNED_RUN_BASE
        + offense.ratings.offense.config.rush_contribution * keeper::DESIGNED_RUN_RUSH_SCALE
}

pub(super) fn resolve_run(offense: &SimTeam, defense: &SimTeam, rng: &mut GameRng) -> PlayOutcome {
    let off = &offense.lineup;
    let def = &defense.lineup;

    let hole = match matchup::run_blocking(off.tier(Slot::Ol), def.tier(Slot::Dl), rng) {
        BlockingOutcome::Stuffed { yards_lost } => {
            let carrier = off.rb.short_name();
            let mut out = PlayOutcome::new(
                PlayType::Run,
                PlayResultKind::Stuffed,
                -yards_lost,
                elapsed(clock::STUFFED, rng),
            );
            out.description =
                format!("{carrier} stuffed by {} for -{yards_lost}", def.dl.short_name());
            out.ball_carrier = Some(carrier);
            return out;
        }
        BlockingOutcome::Hole(hole) => hole,
    };

    let (carrier, run) = if rng.chance(designed_qb_run_probability(offense)) {
        (&off.qb, matchup::qb_run(off.tier(Slot::Qb), def.tier(Slot::Lb), true, rng))
    } else {
        (&off.rb, matchup::rush(&off.rb, def.tier(Slot::Lb), hole, rng))
    };
    let name = carrier.short_name();

    let result = if run.fumble {
        PlayResultKind::Fumble
    } else if run.yards >= rushing::BIG_GAIN_YARDS {
        PlayResultKind::BigGain
    } else {
        PlayResultKind::Gain
    };
    let mut out = PlayOutcome::new(PlayType::Run, result, run.yards, elapsed(clock::RUN, rng));
    out.description = match result {
        PlayResultKind::Fumble => format!("{name} runs for {} yards, FUMBLES, lost", run.yards),
        PlayResultKind::BigGain if run.breakaway => {
            format!("{name} breaks free for {} yards", run.yards)
        }
        _ if run.broken_tackle => {
            format!("{name} breaks a tackle, runs for {} yards", run.yards)
        }
        _ => format!("{name} runs for {} yards", run.yards),
    };
    out.turnover = run.fumble.then_some(TurnoverKind::Fumble);
    out.ball_carrier = Some(name);
    out
}
