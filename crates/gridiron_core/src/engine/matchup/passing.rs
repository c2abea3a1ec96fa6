//! Passing-game duels: line protection, receiver separation, throw and catch.

use serde::{Deserialize, Serialize};

use crate::engine::config::probabilities::{catching, coverage as cov, protection as prot, throw};
use crate::engine::config::probabilities::{PassType, Separation};
use crate::engine::config::tier_to_rating;
use crate::engine::rng::GameRng;
use crate::models::Player;

// ============================================================================
// Protection
// ============================================================================

/// OL vs DL at the snap of a pass play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProtectionOutcome {
    /// QB brought down; resolution of the play stops here.
    Sack { yards_lost: i32 },
    /// QB gets a throw off. `pocket_time` is seconds before the rush arrives.
    Pocket { pressured: bool, pocket_time: f64 },
}

pub fn sack_probability(ol: f64, dl: f64) -> f64 {
    let diff = ol - dl;
    (prot::SACK_BASE - diff * prot::SACK_PER_DIFF).clamp(prot::SACK_MIN, prot::SACK_MAX)
}

pub fn pressure_probability(ol: f64, dl: f64) -> f64 {
    let diff = ol - dl;
    (prot::PRESSURE_BASE - diff * prot::PRESSURE_PER_DIFF)
        .clamp(prot::PRESSURE_MIN, prot::PRESSURE_MAX)
}

pub fn protection(ol: f64, dl: f64, rng: &mut GameRng) -> ProtectionOutcome {
    if rng.chance(sack_probability(ol, dl)) {
        let yards_lost = rng.range_int(prot::SACK_LOSS_MIN, prot::SACK_LOSS_MAX);
        return ProtectionOutcome::Sack { yards_lost };
    }
    let pressured = rng.chance(pressure_probability(ol, dl));
    let pocket_time = (rng.range(prot::POCKET_TIME_MIN, prot::POCKET_TIME_MAX)
        + (ol - dl) * prot::POCKET_TIME_PER_DIFF)
        .clamp(prot::POCKET_TIME_FLOOR, prot::POCKET_TIME_CEILING);
    ProtectionOutcome::Pocket { pressured, pocket_time }
}

// ============================================================================
// Coverage
// ============================================================================

/// Receiver vs defender separation, bucketed by a tier-biased roll.
pub fn coverage(wr: f64, db: f64, rng: &mut GameRng) -> Separation {
    let v = rng.roll() + (wr - db) * cov::TIER_BIAS;
    if v >= cov::OPEN_THRESHOLD {
        Separation::Open
    } else if v >= cov::CONTESTED_THRESHOLD {
        Separation::Contested
    } else {
        Separation::Covered
    }
}

// ============================================================================
// Throw
// ============================================================================

/// Ball placement quality in [0.15, 0.95].
pub fn throw_accuracy(
    qb: f64,
    pressured: bool,
    separation: Separation,
    pass_type: PassType,
    rng: &mut GameRng,
) -> f64 {
    let mut accuracy = throw::BASE + (tier_to_rating(qb) - 0.5) * throw::QB_RATING_SCALE;
    accuracy += separation.accuracy_modifier();
    accuracy += pass_type.accuracy_modifier();
    if pressured {
        accuracy -= throw::PRESSURE_PENALTY;
    }
    accuracy += rng.normal(0.0, throw::VARIANCE_SD);
    accuracy.clamp(throw::MIN, throw::MAX)
}

// ============================================================================
// Catch
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatchOutcome {
    Complete { yards: i32 },
    /// `air_yards` is how far downfield the ball was thrown.
    Interception { air_yards: i32 },
    Incomplete { defended: bool },
}

/// Receiver's hands: rating-scaled, nudged by the "hands" trait.
pub fn catch_ability(wr: &Player) -> f64 {
    let rating = tier_to_rating(wr.effective_tier());
    let ability = catching::BASE_ABILITY
        + (rating - 0.5) * catching::ABILITY_RATING_SCALE
        + wr.trait_signal("hands") * catching::HANDS_TRAIT_SCALE;
    ability.clamp(catching::ABILITY_MIN, catching::ABILITY_MAX)
}

pub fn interception_probability(
    wr: f64,
    db: f64,
    separation: Separation,
    pass_type: PassType,
) -> f64 {
    let p = (catching::INTERCEPTION_BASE + (db - wr) * catching::INTERCEPTION_PER_DIFF)
        .clamp(catching::INTERCEPTION_MIN, catching::INTERCEPTION_MAX);
    p * separation.interception_multiplier() * pass_type.interception_multiplier()
}

pub fn catch_ball(
    wr: &Player,
    db: f64,
    accuracy: f64,
    separation: Separation,
    pass_type: PassType,
    rng: &mut GameRng,
) -> CatchOutcome {
    let wr_tier = wr.effective_tier();
    let completion = (accuracy * catch_ability(wr) * separation.completion_multiplier())
        .clamp(catching::COMPLETION_MIN, catching::COMPLETION_MAX);
    let (lo, hi) = pass_type.yard_range();

    if rng.chance(completion) {
        let air = rng.range_int(lo, hi);
        let yac_max = separation.max_yac()
            * (catching::YAC_BASE_SCALE + tier_to_rating(wr_tier) * catching::YAC_RATING_SCALE);
        let yac = rng.range(0.0, yac_max);
        return CatchOutcome::Complete { yards: (air as f64 + yac).round() as i32 };
    }

    if rng.chance(interception_probability(wr_tier, db, separation, pass_type)) {
        return CatchOutcome::Interception { air_yards: rng.range_int(lo, hi) };
    }

    let defended = rng.chance(
        catching::PASS_DEFENDED_BASE + tier_to_rating(db) * catching::PASS_DEFENDED_RATING_SCALE,
    );
    CatchOutcome::Incomplete { defended }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PosGroup;
    use proptest::prelude::*;

    #[test]
    fn test_better_line_allows_fewer_sacks() {
        assert!(sack_probability(9.0, 5.0) < sack_probability(5.0, 5.0));
        assert!(sack_probability(5.0, 9.0) > sack_probability(5.0, 5.0));
        assert_eq!(sack_probability(11.0, 1.0), prot::SACK_MIN);
        // Ten tiers of deficit stay under the cap; only wider gaps reach it.
        assert!((sack_probability(1.0, 11.0) - 0.18).abs() < 1e-12);
        assert_eq!(sack_probability(-10.0, 20.0), prot::SACK_MAX);
    }

    #[test]
    fn test_sack_loss_in_range() {
        let mut rng = GameRng::seeded(21);
        for _ in 0..2_000 {
            match protection(1.0, 11.0, &mut rng) {
                ProtectionOutcome::Sack { yards_lost } => {
                    assert!((prot::SACK_LOSS_MIN..=prot::SACK_LOSS_MAX).contains(&yards_lost))
                }
                ProtectionOutcome::Pocket { pocket_time, .. } => {
                    assert!((prot::POCKET_TIME_FLOOR..=prot::POCKET_TIME_CEILING)
                        .contains(&pocket_time))
                }
            }
        }
    }

    #[test]
    fn test_coverage_favors_better_receiver() {
        let mut rng = GameRng::seeded(4);
        let n = 4_000;
        let open_hi = (0..n).filter(|_| coverage(10.0, 3.0, &mut rng) == Separation::Open).count();
        let open_lo = (0..n).filter(|_| coverage(3.0, 10.0, &mut rng) == Separation::Open).count();
        assert!(open_hi > open_lo * 2, "hi={open_hi} lo={open_lo}");
    }

    #[test]
    fn test_pressure_lowers_accuracy_on_average() {
        let mut rng = GameRng::seeded(8);
        let n = 3_000;
        let clean: f64 = (0..n)
            .map(|_| throw_accuracy(7.0, false, Separation::Open, PassType::Short, &mut rng))
            .sum();
        let rushed: f64 = (0..n)
            .map(|_| throw_accuracy(7.0, true, Separation::Open, PassType::Short, &mut rng))
            .sum();
        assert!(clean > rushed);
    }

    #[test]
    fn test_interception_multipliers_stack() {
        let base = interception_probability(5.0, 5.0, Separation::Open, PassType::Short);
        let worst = interception_probability(5.0, 5.0, Separation::Covered, PassType::Deep);
        assert!((worst - base * 1.5 * 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_completion_yards_follow_pass_type() {
        let wr = Player::new("W", PosGroup::WR, 8.0);
        let mut rng = GameRng::seeded(13);
        for _ in 0..2_000 {
            if let CatchOutcome::Complete { yards } =
                catch_ball(&wr, 4.0, 0.95, Separation::Covered, PassType::Deep, &mut rng)
            {
                assert!(yards >= 18, "deep completion too short: {yards}");
            }
        }
    }

    #[test]
    fn test_hands_trait_nudges_ability() {
        // A fixed composite keeps the trait out of the intra-tier offset.
        let plain = Player::new("A", PosGroup::WR, 6.0).with_composite(50.0);
        let sure = plain.clone().with_trait("hands", 100.0);
        let diff = catch_ability(&sure) - catch_ability(&plain);
        assert!((diff - catching::HANDS_TRAIT_SCALE).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_throw_accuracy_clamped(qb in -5.0f64..20.0, seed in any::<u64>(), pressured in any::<bool>()) {
            let mut rng = GameRng::seeded(seed);
            let a = throw_accuracy(qb, pressured, Separation::Covered, PassType::Deep, &mut rng);
            prop_assert!((throw::MIN..=throw::MAX).contains(&a));
        }

        #[test]
        fn prop_protection_probabilities_clamped(ol in -20.0f64..30.0, dl in -20.0f64..30.0) {
            prop_assert!((prot::SACK_MIN..=prot::SACK_MAX).contains(&sack_probability(ol, dl)));
            prop_assert!(
                (prot::PRESSURE_MIN..=prot::PRESSURE_MAX).contains(&pressure_probability(ol, dl))
            );
        }
    }
}
