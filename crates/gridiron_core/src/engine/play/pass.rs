use crate::engine::config::probabilities::{qb_run as scramble, PassType};
use crate::engine::config::situational::{clock, pass_depth as depth};
use crate::engine::matchup::{self, CatchOutcome, ProtectionOutcome};
use crate::engine::rng::GameRng;
use crate::models::{PlayResultKind, PlayType, Slot, TurnoverKind};

use super::{elapsed, PlayOutcome, SimTeam, Situation};

/// (short, medium, deep) weights for the down, distance and spot.
pub fn pass_type_weights(situation: &Situation) -> (f64, f64, f64) {
    let (mut short, mut medium, mut deep) = (depth::SHORT, depth::MEDIUM, depth::DEEP);
    if situation.yards_to_go >= depth::LONG_YARDAGE_YARDS {
        short += depth::LONG_SHORT_DELTA;
        medium += depth::LONG_MEDIUM_DELTA;
        deep += depth::LONG_DEEP_DELTA;
    } else if situation.yards_to_go <= depth::SHORT_YARDAGE_YARDS {
        short += depth::SHORT_SHORT_DELTA;
        medium += depth::SHORT_MEDIUM_DELTA;
        deep += depth::SHORT_DEEP_DELTA;
    }
    // No room for a deep shot in the red zone.
    if situation.field_position >= depth::RED_ZONE_FIELD_POSITION {
        medium += deep;
        deep = 0.0;
    }
    (short, medium, deep)
}

pub fn choose_pass_type(situation: &Situation, rng: &mut GameRng) -> PassType {
    let (short, medium, _) = pass_type_weights(situation);
    let v = rng.roll();
    if v < short {
        PassType::Short
    } else if v < short + medium {
        PassType::Medium
    } else {
        PassType::Deep
    }
}

/// Check a deep call down when the pocket will not hold for the drop.
pub fn fit_to_pocket(pass_type: PassType, pocket_time: f64) -> PassType {
    match pass_type {
        PassType::Deep if pocket_time < depth::DEEP_DROP_SECONDS => PassType::Medium,
        other => other,
    }
}

/// Pick the receiver and the defender covering him. Each candidate scores
/// tier plus a random spread; the tight end carries a one-tier handicap.
pub fn choose_target(offense: &SimTeam, rng: &mut GameRng) -> (Slot, Slot) {
    let candidates = [
        (Slot::Wr1, Slot::Db1, 0.0),
        (Slot::Wr2, Slot::Db2, 0.0),
        (Slot::Te, Slot::Lb, depth::TE_TARGET_HANDICAP),
    ];
    let mut best = (Slot::Wr1, Slot::Db1);
    let mut best_score = f64::NEG_INFINITY;
    for (receiver, defender, handicap) in candidates {
        let score = offense.lineup.tier(receiver) - handicap + rng.roll() * depth::TARGET_SPREAD;
        if score > best_score {
            best_score = score;
            best = (receiver, defender);
        }
    }
    best
}

fn scramble_probability(offense: &SimTeam) -> f64 {
    let mobility = offense.lineup.qb.trait_score("mobility") / 100.0;
    let factor = offense.ratings.offense.config.scramble_factor;
    ((scramble::SCRAMBLE_BASE + mobility * scramble::SCRAMBLE_MOBILITY_SCALE) * factor)
        .min(scramble::SCRAMBLE_MAX)
}

pub(super) fn resolve_pass(
    offense: &SimTeam,
    defense: &SimTeam,
    situation: &Situation,
    rng: &mut GameRng,
) -> PlayOutcome {
    let off = &offense.lineup;
    let def = &defense.lineup;
    let passer = off.qb.short_name();

    let (pressured, pocket_time) = match matchup::protection(off.tier(Slot::Ol), def.tier(Slot::Dl), rng) {
        ProtectionOutcome::Sack { yards_lost } => {
            let mut out = PlayOutcome::new(
                PlayType::Pass,
                PlayResultKind::Sack,
                -yards_lost,
                elapsed(clock::SACK, rng),
            );
            out.description = format!("{passer} sacked by {} for -{yards_lost}", def.dl.short_name());
            out.passer = Some(passer);
            out.pressured = true;
            return out;
        }
        ProtectionOutcome::Pocket { pressured, pocket_time } => (pressured, pocket_time),
    };

    let pass_type = fit_to_pocket(choose_pass_type(situation, rng), pocket_time);
    let (receiver_slot, defender_slot) = choose_target(offense, rng);
    let receiver = off.get(receiver_slot);
    let defender_tier = def.tier(defender_slot);
    let separation = matchup::coverage(receiver.effective_tier(), defender_tier, rng);

    if pressured && rng.chance(scramble_probability(offense)) {
        let run = matchup::qb_run(off.tier(Slot::Qb), def.tier(Slot::Lb), false, rng);
        let result = if run.fumble { PlayResultKind::Fumble } else { PlayResultKind::Scramble };
        let mut out =
            PlayOutcome::new(PlayType::Pass, result, run.yards, elapsed(clock::SCRAMBLE, rng));
        out.description = if run.fumble {
            format!("{passer} scrambles, fumbles, recovered by defense")
        } else {
            format!("{passer} scrambles for {} yards", run.yards)
        };
        out.turnover = run.fumble.then_some(TurnoverKind::Fumble);
        out.pressured = true;
        out.ball_carrier = Some(passer.clone());
        out.passer = Some(passer);
        return out;
    }

    let accuracy = matchup::throw_accuracy(off.tier(Slot::Qb), pressured, separation, pass_type, rng);
    let target = receiver.short_name();
    let defender = def.get(defender_slot).short_name();
    let depth_label = pass_type.label();

    let mut out = match matchup::catch_ball(receiver, defender_tier, accuracy, separation, pass_type, rng) {
        CatchOutcome::Complete { yards } => {
            let mut out = PlayOutcome::new(
                PlayType::Pass,
                PlayResultKind::Complete,
                yards,
                elapsed(clock::COMPLETE, rng),
            );
            out.description = format!("{passer} pass {depth_label} to {target} for {yards} yards");
            out
        }
        CatchOutcome::Interception { air_yards } => {
            let mut out = PlayOutcome::new(
                PlayType::Pass,
                PlayResultKind::Interception,
                air_yards,
                elapsed(clock::INTERCEPTION, rng),
            );
            out.description =
                format!("{passer} pass {depth_label} intended for {target} INTERCEPTED by {defender}");
            out.turnover = Some(TurnoverKind::Interception);
            out
        }
        CatchOutcome::Incomplete { defended } => {
            let mut out = PlayOutcome::new(
                PlayType::Pass,
                PlayResultKind::Incomplete,
                0,
                elapsed(clock::INCOMPLETE, rng),
            );
            out.description = if defended {
                format!("{passer} pass {depth_label} to {target} incomplete, broken up by {defender}")
            } else {
                format!("{passer} pass {depth_label} to {target} incomplete")
            };
            out.pass_defended = defended;
            out
        }
    };
    out.pass_type = Some(pass_type);
    out.separation = Some(separation);
    out.pressured = pressured;
    out.passer = Some(passer);
    out.target = Some(target);
    out
}
