use serde::{Deserialize, Serialize};

use super::player::{Player, PosGroup};
use super::roster::{Roster, Slot};

/// Fully resolved starters for one game.
///
/// Built once from a [`Roster`]; every slot is guaranteed to hold a card, so
/// rating and play code never deals with absence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lineup {
    pub qb: Player,
    pub rb: Player,
    pub wr1: Player,
    pub wr2: Player,
    pub te: Player,
    pub ol: Player,
    pub dl: Player,
    pub lb: Player,
    pub db1: Player,
    pub db2: Player,
    pub k: Player,
    pub p: Player,
}

impl Lineup {
    pub fn from_roster(roster: &Roster) -> Self {
        let fill = |slot: Slot| {
            roster.get(slot).cloned().unwrap_or_else(|| Player::replacement(slot.pos_group()))
        };
        let k = fill(Slot::K);
        let p = roster.get(Slot::P).cloned().unwrap_or_else(|| k.clone());
        Self {
            qb: fill(Slot::Qb),
            rb: fill(Slot::Rb),
            wr1: fill(Slot::Wr1),
            wr2: fill(Slot::Wr2),
            te: fill(Slot::Te),
            ol: fill(Slot::Ol),
            dl: fill(Slot::Dl),
            lb: fill(Slot::Lb),
            db1: fill(Slot::Db1),
            db2: fill(Slot::Db2),
            k,
            p,
        }
    }

    pub fn get(&self, slot: Slot) -> &Player {
        match slot {
            Slot::Qb => &self.qb,
            Slot::Rb => &self.rb,
            Slot::Wr1 => &self.wr1,
            Slot::Wr2 => &self.wr2,
            Slot::Te => &self.te,
            Slot::Ol => &self.ol,
            Slot::Dl => &self.dl,
            Slot::Lb => &self.lb,
            Slot::Db1 => &self.db1,
            Slot::Db2 => &self.db2,
            Slot::K => &self.k,
            Slot::P => &self.p,
        }
    }

    /// Effective tier of a slot.
    pub fn tier(&self, slot: Slot) -> f64 {
        self.get(slot).effective_tier()
    }

    pub fn avg_wr_tier(&self) -> f64 {
        (self.tier(Slot::Wr1) + self.tier(Slot::Wr2)) / 2.0
    }

    pub fn avg_db_tier(&self) -> f64 {
        (self.tier(Slot::Db1) + self.tier(Slot::Db2)) / 2.0
    }

    /// New lineup with each card's tier scaled by its group's multiplier.
    /// Cards whose multiplier is exactly 1.0 are cloned unchanged.
    pub fn scaled_by_group(&self, multiplier: impl Fn(PosGroup) -> f64) -> Self {
        let scale = |p: &Player| {
            let m = multiplier(p.pos_group);
            if m == 1.0 {
                p.clone()
            } else {
                p.with_tier(p.tier * m)
            }
        };
        Self {
            qb: scale(&self.qb),
            rb: scale(&self.rb),
            wr1: scale(&self.wr1),
            wr2: scale(&self.wr2),
            te: scale(&self.te),
            ol: scale(&self.ol),
            dl: scale(&self.dl),
            lb: scale(&self.lb),
            db1: scale(&self.db1),
            db2: scale(&self.db2),
            k: scale(&self.k),
            p: scale(&self.p),
        }
    }
}
