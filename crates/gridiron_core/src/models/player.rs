use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::engine::config::tiers::{MAX_TRAIT_OFFSET, NEUTRAL_TRAIT_SCORE, REPLACEMENT_TIER};

/// A player card.
///
/// `tier` (1-11, fractional allowed) is the dominant skill signal. Traits and
/// the composite score only nudge the effective tier by at most
/// ±[`MAX_TRAIT_OFFSET`].
///
/// Cards are never mutated during a game: strategy boosts produce a clone via
/// [`Player::with_tier`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub pos_group: PosGroup,
    pub tier: f64,

    /// Trait name → 0-100 score (e.g. "mobility", "hands", "elusiveness").
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub engine_traits: BTreeMap<String, f64>,

    /// Overall 0-100 score within the tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_score: Option<f64>,

    /// Season volume, used to classify QB playstyle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_stats: Option<SeasonStats>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosGroup {
    QB,
    RB,
    WR,
    TE,
    OL,
    DL,
    LB,
    DB,
    K,
    P,
}

impl PosGroup {
    pub fn is_offense(&self) -> bool {
        matches!(self, PosGroup::QB | PosGroup::RB | PosGroup::WR | PosGroup::TE | PosGroup::OL)
    }

    pub fn is_defense(&self) -> bool {
        matches!(self, PosGroup::DL | PosGroup::LB | PosGroup::DB)
    }

    pub fn is_special_teams(&self) -> bool {
        matches!(self, PosGroup::K | PosGroup::P)
    }
}

impl fmt::Display for PosGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            PosGroup::QB => "QB",
            PosGroup::RB => "RB",
            PosGroup::WR => "WR",
            PosGroup::TE => "TE",
            PosGroup::OL => "OL",
            PosGroup::DL => "DL",
            PosGroup::LB => "LB",
            PosGroup::DB => "DB",
            PosGroup::K => "K",
            PosGroup::P => "P",
        };
        f.write_str(s)
    }
}

/// Per-season volume for a player (QB playstyle classification input).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SeasonStats {
    pub games: u32,
    #[serde(default)]
    pub pass_attempts: u32,
    #[serde(default)]
    pub rush_attempts: u32,
}

impl SeasonStats {
    pub fn attempts_per_game(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.pass_attempts as f64 / self.games as f64
    }

    pub fn rushes_per_game(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.rush_attempts as f64 / self.games as f64
    }
}

impl Player {
    pub fn new(name: impl Into<String>, pos_group: PosGroup, tier: f64) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            pos_group,
            tier,
            engine_traits: BTreeMap::new(),
            composite_score: None,
            season_stats: None,
        }
    }

    /// Implicit tier-5 stand-in for an empty slot.
    pub fn replacement(pos_group: PosGroup) -> Self {
        Self::new(format!("Replacement {pos_group}"), pos_group, REPLACEMENT_TIER)
    }

    pub fn with_trait(mut self, name: impl Into<String>, score: f64) -> Self {
        self.engine_traits.insert(name.into(), score);
        self
    }

    pub fn with_composite(mut self, score: f64) -> Self {
        self.composite_score = Some(score);
        self
    }

    pub fn with_season_stats(mut self, stats: SeasonStats) -> Self {
        self.season_stats = Some(stats);
        self
    }

    /// Clone with an overridden tier.
    pub fn with_tier(&self, tier: f64) -> Self {
        Self { tier, ..self.clone() }
    }

    /// Trait score on the 0-100 scale; missing or non-numeric traits read as 50.
    pub fn trait_score(&self, name: &str) -> f64 {
        match self.engine_traits.get(name) {
            Some(v) if v.is_finite() => v.clamp(0.0, 100.0),
            _ => NEUTRAL_TRAIT_SCORE,
        }
    }

    /// Trait score mapped to [-1, 1] around the neutral 50.
    pub fn trait_signal(&self, name: &str) -> f64 {
        (self.trait_score(name) - NEUTRAL_TRAIT_SCORE) / NEUTRAL_TRAIT_SCORE
    }

    /// Intra-tier offset from the composite score, or the trait mean when
    /// there is no composite.
    pub fn intra_tier_offset(&self) -> f64 {
        let score = match self.composite_score {
            Some(c) if c.is_finite() => c.clamp(0.0, 100.0),
            _ => {
                let valid: Vec<f64> = self
                    .engine_traits
                    .values()
                    .copied()
                    .filter(|v| v.is_finite())
                    .map(|v| v.clamp(0.0, 100.0))
                    .collect();
                if valid.is_empty() {
                    NEUTRAL_TRAIT_SCORE
                } else {
                    valid.iter().sum::<f64>() / valid.len() as f64
                }
            }
        };
        (score - NEUTRAL_TRAIT_SCORE) / NEUTRAL_TRAIT_SCORE * MAX_TRAIT_OFFSET
    }

    /// Tier used by every matchup: card tier plus the intra-tier offset.
    /// A non-numeric tier reads as the replacement tier.
    pub fn effective_tier(&self) -> f64 {
        let base = if self.tier.is_finite() { self.tier } else { REPLACEMENT_TIER };
        base + self.intra_tier_offset()
    }

    /// Short display name for play descriptions ("Patrick Mahomes" → "P. Mahomes").
    pub fn short_name(&self) -> String {
        let mut parts = self.name.split_whitespace();
        match (parts.next(), parts.next_back()) {
            (Some(first), Some(last)) => {
                let initial = first.chars().next().map(String::from).unwrap_or_default();
                format!("{initial}. {last}")
            }
            (Some(only), None) => only.to_string(),
            _ => self.pos_group.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_bounded() {
        let hi = Player::new("A", PosGroup::WR, 6.0).with_composite(100.0);
        let lo = Player::new("B", PosGroup::WR, 6.0).with_composite(0.0);
        let wild = Player::new("C", PosGroup::WR, 6.0).with_composite(1e9);
        assert!((hi.effective_tier() - 6.01).abs() < 1e-12);
        assert!((lo.effective_tier() - 5.99).abs() < 1e-12);
        assert!((wild.effective_tier() - 6.01).abs() < 1e-12);
    }

    #[test]
    fn test_trait_mean_used_without_composite() {
        let p = Player::new("A", PosGroup::RB, 4.0)
            .with_trait("elusiveness", 100.0)
            .with_trait("power", 50.0);
        assert!((p.intra_tier_offset() - 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_missing_trait_defaults_to_neutral() {
        let p = Player::new("A", PosGroup::QB, 7.0);
        assert_eq!(p.trait_score("mobility"), 50.0);
        assert_eq!(p.trait_signal("mobility"), 0.0);
        assert_eq!(p.effective_tier(), 7.0);
    }

    #[test]
    fn test_nan_tier_reads_as_replacement() {
        let p = Player::new("A", PosGroup::K, f64::NAN);
        assert_eq!(p.effective_tier(), REPLACEMENT_TIER);
    }

    #[test]
    fn test_with_tier_does_not_touch_original() {
        let p = Player::new("A", PosGroup::DB, 8.0).with_trait("ball_skills", 90.0);
        let boosted = p.with_tier(8.056);
        assert_eq!(p.tier, 8.0);
        assert_eq!(boosted.tier, 8.056);
        assert_eq!(boosted.engine_traits, p.engine_traits);
    }

    #[test]
    fn test_short_name() {
        assert_eq!(Player::new("Patrick Mahomes", PosGroup::QB, 9.0).short_name(), "P. Mahomes");
        assert_eq!(Player::new("Ghost", PosGroup::K, 5.0).short_name(), "Ghost");
    }

    #[test]
    fn test_deserialize_minimal_card() {
        let p: Player =
            serde_json::from_str(r#"{"name":"X","pos_group":"QB","tier":7.5}"#).unwrap();
        assert_eq!(p.pos_group, PosGroup::QB);
        assert!(p.engine_traits.is_empty());
        assert!(p.season_stats.is_none());
    }
}
