//! Team ratings.
//!
//! Aggregates a lineup into offensive, defensive and special-teams ratings
//! on the 0-1 rating scale. Ratings are derived data: recomputed per game,
//! never persisted.

use serde::{Deserialize, Serialize};

use crate::engine::config::playstyle::thresholds;
use crate::engine::config::weights::{defense as dw, offense as ow, overall as aw};
use crate::engine::config::{tier_to_rating, PlaystyleProfile, QbPlaystyle};
use crate::engine::strategy::{StrategyBoosts, StrategyContext, TeamStrategy};
use crate::models::{Lineup, Player, Roster, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffenseRatings {
    pub pass_rating: f64,
    pub run_rating: f64,
    pub protection_rating: f64,
    pub style: QbPlaystyle,
    pub config: PlaystyleProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenseRatings {
    pub pass_defense_rating: f64,
    pub run_defense_rating: f64,
    pub pass_rush_rating: f64,
    pub coverage_rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialTeamsRatings {
    pub kicker_rating: f64,
    pub punter_rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamRatings {
    pub offense: OffenseRatings,
    pub defense: DefenseRatings,
    pub special_teams: SpecialTeamsRatings,
    pub overall: f64,
}

impl OffenseRatings {
    fn mean(&self) -> f64 {
        (self.pass_rating + self.run_rating + self.protection_rating) / 3.0
    }
}

impl DefenseRatings {
    fn mean(&self) -> f64 {
        (self.pass_defense_rating
            + self.run_defense_rating
            + self.pass_rush_rating
            + self.coverage_rating)
            / 4.0
    }
}

impl SpecialTeamsRatings {
    fn mean(&self) -> f64 {
        (self.kicker_rating + self.punter_rating) / 2.0
    }
}

/// Bucket a QB by per-game volume. Fewer than three games of data is not
/// enough to tell, so the QB is treated as balanced.
pub fn classify_qb_playstyle(qb: &Player) -> QbPlaystyle {
    let Some(stats) = qb.season_stats else {
        return QbPlaystyle::Balanced;
    };
    if stats.games < thresholds::MIN_GAMES {
        return QbPlaystyle::Balanced;
    }
    let attempts = stats.attempts_per_game();
    let rushes = stats.rushes_per_game();

    if rushes >= thresholds::DUAL_THREAT_RUSHES_PER_GAME {
        QbPlaystyle::DualThreat
    } else if attempts >= thresholds::PASS_HEAVY_ATTEMPTS_PER_GAME
        && rushes < thresholds::PASS_HEAVY_MAX_RUSHES_PER_GAME
    {
        QbPlaystyle::PassHeavy
    } else if attempts < thresholds::GAME_MANAGER_MAX_ATTEMPTS_PER_GAME {
        QbPlaystyle::GameManager
    } else {
        QbPlaystyle::Balanced
    }
}

fn rating(lineup: &Lineup, slot: Slot) -> f64 {
    tier_to_rating(lineup.tier(slot))
}

pub fn calculate_offensive_ratings(lineup: &Lineup) -> OffenseRatings {
    let style = classify_qb_playstyle(&lineup.qb);
    let config = style.profile();

    let qb = rating(lineup, Slot::Qb);
    let wr = (rating(lineup, Slot::Wr1) + rating(lineup, Slot::Wr2)) / 2.0;
    let te = rating(lineup, Slot::Te);
    let ol = rating(lineup, Slot::Ol);
    let rb = rating(lineup, Slot::Rb);

    let mut core = qb * config.qb_weight + wr * config.wr_weight;
    let avg_wr_tier = lineup.avg_wr_tier();
    if avg_wr_tier >= ow::WR_SYNERGY_BONUS_TIER {
        core *= ow::WR_SYNERGY_BONUS;
    } else if avg_wr_tier <= ow::WR_SYNERGY_PENALTY_TIER {
        core *= ow::WR_SYNERGY_PENALTY;
    }
    let pass_rating = core * ow::PASS_CORE + te * ow::PASS_TE + ol * ow::PASS_OL;

    let mut run_rating = rb * ow::RUN_RB + ol * ow::RUN_OL + te * ow::RUN_TE;
    if style == QbPlaystyle::DualThreat {
        run_rating = run_rating * (1.0 - config.rush_contribution) + qb * config.rush_contribution;
    }

    let protection_rating = ol * ow::PROTECTION_OL + te * ow::PROTECTION_TE;

    OffenseRatings { pass_rating, run_rating, protection_rating, style, config }
}

pub fn calculate_defensive_ratings(lineup: &Lineup) -> DefenseRatings {
    let dl = rating(lineup, Slot::Dl);
    let lb = rating(lineup, Slot::Lb);
    let db = (rating(lineup, Slot::Db1) + rating(lineup, Slot::Db2)) / 2.0;

    DefenseRatings {
        pass_defense_rating: db * dw::PASS_DEF_DB + lb * dw::PASS_DEF_LB + dl * dw::PASS_DEF_DL,
        run_defense_rating: dl * dw::RUN_DEF_DL + lb * dw::RUN_DEF_LB + db * dw::RUN_DEF_DB,
        pass_rush_rating: dl * dw::PASS_RUSH_DL + lb * dw::PASS_RUSH_LB,
        coverage_rating: db * dw::COVERAGE_DB + lb * dw::COVERAGE_LB,
    }
}

pub fn calculate_special_teams_ratings(lineup: &Lineup) -> SpecialTeamsRatings {
    SpecialTeamsRatings {
        kicker_rating: rating(lineup, Slot::K),
        punter_rating: rating(lineup, Slot::P),
    }
}

/// Ratings of an already-resolved (and possibly boosted) lineup.
pub fn lineup_ratings(lineup: &Lineup) -> TeamRatings {
    let offense = calculate_offensive_ratings(lineup);
    let defense = calculate_defensive_ratings(lineup);
    let special_teams = calculate_special_teams_ratings(lineup);
    let overall = aw::OFFENSE * offense.mean()
        + aw::DEFENSE * defense.mean()
        + aw::SPECIAL_TEAMS * special_teams.mean();
    TeamRatings { offense, defense, special_teams, overall }
}

/// Ratings for a roster. With a strategy context the roster's own strategy
/// is derived from its base tiers and the matchup boosts against the
/// opponent are applied before rating.
pub fn calculate_team_ratings(roster: &Roster, context: Option<&StrategyContext>) -> TeamRatings {
    let lineup = Lineup::from_roster(roster);
    match context {
        None => lineup_ratings(&lineup),
        Some(ctx) => {
            let own = TeamStrategy::derive(&lineup, ctx.force_balanced);
            let boosts = StrategyBoosts::between(own, ctx.opponent);
            lineup_ratings(&boosts.apply(&lineup))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{DefensiveStrategy, OffensiveStrategy};
    use crate::models::{PosGroup, SeasonStats};

    fn qb_with(games: u32, attempts: u32, rushes: u32) -> Player {
        Player::new("Q", PosGroup::QB, 7.0).with_season_stats(SeasonStats {
            games,
            pass_attempts: attempts,
            rush_attempts: rushes,
        })
    }

    #[test]
    fn test_classify_qb_playstyle() {
        assert_eq!(classify_qb_playstyle(&Player::new("Q", PosGroup::QB, 7.0)), QbPlaystyle::Balanced);
        assert_eq!(classify_qb_playstyle(&qb_with(2, 80, 30)), QbPlaystyle::Balanced);
        assert_eq!(classify_qb_playstyle(&qb_with(10, 300, 80)), QbPlaystyle::DualThreat);
        assert_eq!(classify_qb_playstyle(&qb_with(10, 380, 20)), QbPlaystyle::PassHeavy);
        assert_eq!(classify_qb_playstyle(&qb_with(10, 240, 30)), QbPlaystyle::GameManager);
        assert_eq!(classify_qb_playstyle(&qb_with(10, 300, 30)), QbPlaystyle::Balanced);
    }

    #[test]
    fn test_uniform_t5_ratings() {
        let r = calculate_team_ratings(&Roster::uniform("T5", 5.0), None);
        assert!((r.offense.pass_rating - 0.5).abs() < 1e-12);
        assert!((r.offense.run_rating - 0.5).abs() < 1e-12);
        assert!((r.defense.coverage_rating - 0.5).abs() < 1e-12);
        assert!((r.overall - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_wr_synergy_bonus_and_penalty() {
        let base = Roster::uniform("T5", 5.0);
        let elite = base
            .clone()
            .with(Slot::Wr1, Player::new("W1", PosGroup::WR, 8.0))
            .with(Slot::Wr2, Player::new("W2", PosGroup::WR, 8.0));
        let r = calculate_team_ratings(&elite, None);
        let wr = tier_to_rating(8.0);
        let expected = (0.5 * 0.5 + wr * 0.5) * 1.03 * 0.8 + 0.5 * 0.1 + 0.5 * 0.1;
        assert!((r.offense.pass_rating - expected).abs() < 1e-12);

        let weak = base
            .with(Slot::Wr1, Player::new("W1", PosGroup::WR, 2.0))
            .with(Slot::Wr2, Player::new("W2", PosGroup::WR, 3.0));
        let r = calculate_team_ratings(&weak, None);
        let wr = (tier_to_rating(2.0) + tier_to_rating(3.0)) / 2.0;
        let expected = (0.5 * 0.5 + wr * 0.5) * 0.97 * 0.8 + 0.1;
        assert!((r.offense.pass_rating - expected).abs() < 1e-12);
    }

    #[test]
    fn test_dual_threat_qb_lifts_run_rating() {
        let base = Roster::uniform("T5", 5.0);
        let runner = base.clone().with(Slot::Qb, qb_with(10, 250, 90).with_tier(9.0));
        let pocket = base.with(Slot::Qb, Player::new("Q", PosGroup::QB, 9.0));
        let dual = calculate_team_ratings(&runner, None).offense;
        let plain = calculate_team_ratings(&pocket, None).offense;
        assert_eq!(dual.style, QbPlaystyle::DualThreat);
        assert!(dual.run_rating > plain.run_rating);
        let expected = 0.5 * 0.7 + tier_to_rating(9.0) * 0.3;
        assert!((dual.run_rating - expected).abs() < 1e-12);
    }

    #[test]
    fn test_missing_punter_uses_kicker() {
        let roster = Roster::uniform("T5", 5.0).with(Slot::K, Player::new("K", PosGroup::K, 9.0));
        let st = calculate_team_ratings(&roster, None).special_teams;
        assert_eq!(st.kicker_rating, st.punter_rating);
    }

    #[test]
    fn test_context_applies_matchup_boost() {
        // Tier-balanced roster vs a base defense: balanced offense is captured.
        let roster = Roster::uniform("T6", 6.0);
        let ctx = StrategyContext {
            opponent: TeamStrategy {
                offense: OffensiveStrategy::Balanced,
                defense: DefensiveStrategy::BaseDefense,
            },
            force_balanced: false,
        };
        let plain = calculate_team_ratings(&roster, None);
        let boosted = calculate_team_ratings(&roster, Some(&ctx));
        assert!(boosted.offense.pass_rating < plain.offense.pass_rating);
        // Own base defense faces a balanced offense: captured, so the defense gains.
        assert!(boosted.defense.run_defense_rating > plain.defense.run_defense_rating);
    }
}
