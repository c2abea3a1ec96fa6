//! Strategy derivation and the rock-paper-scissors boosts.
//!
//! Strategies are read from base tiers, not ratings, so that the WR synergy
//! bonus cannot tilt detection. They are fixed for the whole game.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::engine::config::strategy_table::strategy_matchup;
use crate::engine::config::tiers::{MAX_TIER, MIN_TIER};
use crate::engine::config::{DefensiveStrategy, MatchupOutcome, OffensiveStrategy};
use crate::models::{Lineup, PosGroup, Slot};

/// (QB + avg WR) / (RB + OL) above this is pass-heavy.
pub const PASS_HEAVY_RATIO: f64 = 1.2;
/// ... and below this is run-heavy.
pub const RUN_HEAVY_RATIO: f64 = 0.8;
/// Avg DB tier minus avg front tier needed to lean one way on defense.
pub const DEFENSE_LEAN_TIERS: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TeamStrategy {
    pub offense: OffensiveStrategy,
    pub defense: DefensiveStrategy,
}

/// What a team needs to know about its opponent to compute boosted ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StrategyContext {
    pub opponent: TeamStrategy,
    #[serde(default)]
    pub force_balanced: bool,
}

fn clamped_tier(lineup: &Lineup, slot: Slot) -> f64 {
    lineup.tier(slot).clamp(MIN_TIER, MAX_TIER)
}

pub fn derive_offensive_strategy(lineup: &Lineup) -> OffensiveStrategy {
    let passing = clamped_tier(lineup, Slot::Qb)
        + (clamped_tier(lineup, Slot::Wr1) + clamped_tier(lineup, Slot::Wr2)) / 2.0;
    let rushing = clamped_tier(lineup, Slot::Rb) + clamped_tier(lineup, Slot::Ol);
    let ratio = passing / rushing;
    if ratio > PASS_HEAVY_RATIO {
        OffensiveStrategy::PassHeavy
    } else if ratio < RUN_HEAVY_RATIO {
        OffensiveStrategy::RunHeavy
    } else {
        OffensiveStrategy::Balanced
    }
}

pub fn derive_defensive_strategy(lineup: &Lineup) -> DefensiveStrategy {
    let secondary = (clamped_tier(lineup, Slot::Db1) + clamped_tier(lineup, Slot::Db2)) / 2.0;
    let front = (clamped_tier(lineup, Slot::Dl) + clamped_tier(lineup, Slot::Lb)) / 2.0;
    let lean = secondary - front;
    if lean >= DEFENSE_LEAN_TIERS {
        DefensiveStrategy::CoverageShell
    } else if lean <= -DEFENSE_LEAN_TIERS {
        DefensiveStrategy::RunStuff
    } else {
        DefensiveStrategy::BaseDefense
    }
}

impl TeamStrategy {
    pub const BALANCED: TeamStrategy = TeamStrategy {
        offense: OffensiveStrategy::Balanced,
        defense: DefensiveStrategy::BaseDefense,
    };

    /// Derive from an unboosted lineup. `force_balanced` pins the team to
    /// balanced / base defense regardless of composition.
    pub fn derive(lineup: &Lineup, force_balanced: bool) -> Self {
        if force_balanced {
            return Self::BALANCED;
        }
        Self {
            offense: derive_offensive_strategy(lineup),
            defense: derive_defensive_strategy(lineup),
        }
    }
}

/// Per-group rating multipliers one team receives from both strategy
/// matchups of a game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyBoosts {
    pub own: TeamStrategy,
    /// Own offense vs opponent defense, from the offense's side.
    pub offense_outcome: MatchupOutcome,
    /// Opponent offense vs own defense, from the opponent offense's side.
    pub defense_outcome: MatchupOutcome,
}

impl StrategyBoosts {
    pub fn between(own: TeamStrategy, opponent: TeamStrategy) -> Self {
        Self {
            own,
            offense_outcome: strategy_matchup(own.offense, opponent.defense),
            defense_outcome: strategy_matchup(opponent.offense, own.defense),
        }
    }

    pub fn multiplier(&self, group: PosGroup) -> f64 {
        if group.is_offense() && self.own.offense.affected_groups().contains(&group) {
            self.offense_outcome.offense_multiplier()
        } else if group.is_defense() && self.own.defense.affected_groups().contains(&group) {
            self.defense_outcome.defense_multiplier()
        } else {
            1.0
        }
    }

    /// Boosted copy of the lineup. The input lineup is left untouched.
    pub fn apply(&self, lineup: &Lineup) -> Lineup {
        trace!(
            offense = ?self.offense_outcome,
            defense = ?self.defense_outcome,
            "applying strategy boosts"
        );
        lineup.scaled_by_group(|group| self.multiplier(group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::STRATEGY_BOOST;
    use crate::models::{Player, Roster};

    fn lineup(edits: &[(Slot, f64)]) -> Lineup {
        let mut roster = Roster::uniform("T", 5.0);
        for (slot, tier) in edits {
            roster.set(*slot, Player::new(format!("{slot:?}"), slot.pos_group(), *tier));
        }
        Lineup::from_roster(&roster)
    }

    #[test]
    fn test_offensive_derivation_bands() {
        assert_eq!(derive_offensive_strategy(&lineup(&[])), OffensiveStrategy::Balanced);
        let pass = lineup(&[(Slot::Qb, 9.0), (Slot::Wr1, 9.0), (Slot::Wr2, 9.0)]);
        assert_eq!(derive_offensive_strategy(&pass), OffensiveStrategy::PassHeavy);
        let run = lineup(&[(Slot::Rb, 9.0), (Slot::Ol, 9.0), (Slot::Qb, 4.0)]);
        assert_eq!(derive_offensive_strategy(&run), OffensiveStrategy::RunHeavy);
        // Exactly at the 1.2 edge stays balanced: (6 + 6) / (5 + 5).
        let edge = lineup(&[(Slot::Qb, 6.0), (Slot::Wr1, 6.0), (Slot::Wr2, 6.0)]);
        assert_eq!(derive_offensive_strategy(&edge), OffensiveStrategy::Balanced);
    }

    #[test]
    fn test_defensive_derivation_bands() {
        let shell = lineup(&[(Slot::Db1, 6.0), (Slot::Db2, 6.0)]);
        assert_eq!(derive_defensive_strategy(&shell), DefensiveStrategy::CoverageShell);
        let base = lineup(&[(Slot::Dl, 6.0), (Slot::Lb, 5.4)]);
        assert_eq!(derive_defensive_strategy(&base), DefensiveStrategy::BaseDefense);
        let stuff = lineup(&[(Slot::Dl, 6.0), (Slot::Lb, 6.0)]);
        assert_eq!(derive_defensive_strategy(&stuff), DefensiveStrategy::RunStuff);
    }

    #[test]
    fn test_force_balanced_overrides() {
        let pass = lineup(&[(Slot::Qb, 11.0), (Slot::Wr1, 11.0), (Slot::Db1, 11.0)]);
        assert_eq!(TeamStrategy::derive(&pass, true), TeamStrategy::BALANCED);
        assert_ne!(TeamStrategy::derive(&pass, false), TeamStrategy::BALANCED);
    }

    #[test]
    fn test_boosts_touch_only_affected_groups() {
        let own = TeamStrategy {
            offense: OffensiveStrategy::PassHeavy,
            defense: DefensiveStrategy::RunStuff,
        };
        let opponent = TeamStrategy {
            offense: OffensiveStrategy::RunHeavy,
            defense: DefensiveStrategy::RunStuff,
        };
        let boosts = StrategyBoosts::between(own, opponent);
        assert_eq!(boosts.offense_outcome, MatchupOutcome::Advantage);
        assert_eq!(boosts.defense_outcome, MatchupOutcome::Captured);

        assert_eq!(boosts.multiplier(PosGroup::QB), 1.0 + STRATEGY_BOOST);
        assert_eq!(boosts.multiplier(PosGroup::RB), 1.0);
        assert_eq!(boosts.multiplier(PosGroup::DL), 1.0 + STRATEGY_BOOST);
        assert_eq!(boosts.multiplier(PosGroup::DB), 1.0);
        assert_eq!(boosts.multiplier(PosGroup::K), 1.0);

        let base = lineup(&[]);
        let boosted = boosts.apply(&base);
        assert!((boosted.wr1.tier - 5.0 * (1.0 + STRATEGY_BOOST)).abs() < 1e-12);
        assert_eq!(boosted.ol.tier, 5.0);
        assert_eq!(base.wr1.tier, 5.0);
    }

    #[test]
    fn test_mirror_matchup_of_balanced_teams() {
        let boosts = StrategyBoosts::between(TeamStrategy::BALANCED, TeamStrategy::BALANCED);
        assert_eq!(boosts.multiplier(PosGroup::QB), 1.0 - STRATEGY_BOOST);
        assert_eq!(boosts.multiplier(PosGroup::LB), 1.0 + STRATEGY_BOOST);
    }
}
