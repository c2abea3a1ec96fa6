//! Roster shapes accepted at the engine boundary.
//!
//! The canonical shape is one card per starter slot. The legacy shape groups
//! any number of cards per position group. Both are converted to [`Roster`]
//! exactly once, at ingestion; nothing downstream knows the legacy shape
//! existed.

use serde::{Deserialize, Serialize};

use super::player::{Player, PosGroup};

/// Starter slots, in depth-chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Qb,
    Rb,
    Wr1,
    Wr2,
    Te,
    Ol,
    Dl,
    Lb,
    Db1,
    Db2,
    K,
    P,
}

impl Slot {
    pub const ALL: [Slot; 12] = [
        Slot::Qb,
        Slot::Rb,
        Slot::Wr1,
        Slot::Wr2,
        Slot::Te,
        Slot::Ol,
        Slot::Dl,
        Slot::Lb,
        Slot::Db1,
        Slot::Db2,
        Slot::K,
        Slot::P,
    ];

    pub fn pos_group(self) -> PosGroup {
        match self {
            Slot::Qb => PosGroup::QB,
            Slot::Rb => PosGroup::RB,
            Slot::Wr1 | Slot::Wr2 => PosGroup::WR,
            Slot::Te => PosGroup::TE,
            Slot::Ol => PosGroup::OL,
            Slot::Dl => PosGroup::DL,
            Slot::Lb => PosGroup::LB,
            Slot::Db1 | Slot::Db2 => PosGroup::DB,
            Slot::K => PosGroup::K,
            Slot::P => PosGroup::P,
        }
    }
}

/// Canonical roster: 11 starters plus an optional dedicated punter.
///
/// Any slot may be empty; the engine fills empty slots with a tier-5
/// replacement (the punter slot falls back to the kicker).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Roster {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub qb: Option<Player>,
    #[serde(default)]
    pub rb: Option<Player>,
    #[serde(default)]
    pub wr1: Option<Player>,
    #[serde(default)]
    pub wr2: Option<Player>,
    #[serde(default)]
    pub te: Option<Player>,
    #[serde(default)]
    pub ol: Option<Player>,
    #[serde(default)]
    pub dl: Option<Player>,
    #[serde(default)]
    pub lb: Option<Player>,
    #[serde(default)]
    pub db1: Option<Player>,
    #[serde(default)]
    pub db2: Option<Player>,
    #[serde(default)]
    pub k: Option<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<Player>,
}

impl Roster {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Every starter slot filled with a card of the given tier.
    pub fn uniform(name: impl Into<String>, tier: f64) -> Self {
        let mut roster = Self::new(name);
        for slot in Slot::ALL {
            if slot == Slot::P {
                continue;
            }
            let group = slot.pos_group();
            roster.set(slot, Player::new(format!("{group} {slot:?}"), group, tier));
        }
        roster
    }

    pub fn get(&self, slot: Slot) -> Option<&Player> {
        self.slot_ref(slot).as_ref()
    }

    pub fn set(&mut self, slot: Slot, player: Player) {
        *self.slot_mut(slot) = Some(player);
    }

    pub fn with(mut self, slot: Slot, player: Player) -> Self {
        self.set(slot, player);
        self
    }

    fn slot_ref(&self, slot: Slot) -> &Option<Player> {
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

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Player> {
        match slot {
            Slot::Qb => &mut self.qb,
            Slot::Rb => &mut self.rb,
            Slot::Wr1 => &mut self.wr1,
            Slot::Wr2 => &mut self.wr2,
            Slot::Te => &mut self.te,
            Slot::Ol => &mut self.ol,
            Slot::Dl => &mut self.dl,
            Slot::Lb => &mut self.lb,
            Slot::Db1 => &mut self.db1,
            Slot::Db2 => &mut self.db2,
            Slot::K => &mut self.k,
            Slot::P => &mut self.p,
        }
    }
}

/// Legacy roster: arrays of cards per position group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct LegacyRoster {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub qb: Vec<Player>,
    #[serde(default)]
    pub rb: Vec<Player>,
    #[serde(default)]
    pub wr: Vec<Player>,
    #[serde(default)]
    pub te: Vec<Player>,
    #[serde(default)]
    pub ol: Vec<Player>,
    #[serde(default)]
    pub dl: Vec<Player>,
    #[serde(default)]
    pub lb: Vec<Player>,
    #[serde(default)]
    pub db: Vec<Player>,
    #[serde(default)]
    pub k: Vec<Player>,
    #[serde(default)]
    pub p: Vec<Player>,
}

impl LegacyRoster {
    /// Collapse the grouped arrays into canonical slots by averaging tiers.
    pub fn into_roster(self) -> Roster {
        let (wr1, wr2) = split_pair(&self.wr);
        let (db1, db2) = split_pair(&self.db);
        Roster {
            name: self.name,
            qb: averaged(&self.qb),
            rb: averaged(&self.rb),
            wr1,
            wr2,
            te: averaged(&self.te),
            ol: averaged(&self.ol),
            dl: averaged(&self.dl),
            lb: averaged(&self.lb),
            db1,
            db2,
            k: averaged(&self.k),
            p: averaged(&self.p),
        }
    }
}

/// Either roster shape, as it arrives over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RosterInput {
    Legacy(LegacyRoster),
    Slots(Roster),
}

impl RosterInput {
    pub fn into_roster(self) -> Roster {
        match self {
            RosterInput::Slots(roster) => roster,
            RosterInput::Legacy(legacy) => legacy.into_roster(),
        }
    }
}

impl From<Roster> for RosterInput {
    fn from(roster: Roster) -> Self {
        RosterInput::Slots(roster)
    }
}

/// First card of the group, carrying the group's mean tier.
fn averaged(players: &[Player]) -> Option<Player> {
    let first = players.first()?;
    if players.len() == 1 {
        return Some(first.clone());
    }
    let mean = players.iter().map(|p| p.tier).sum::<f64>() / players.len() as f64;
    Some(first.with_tier(mean))
}

/// Two slots from one group: strongest half and remaining half, each averaged.
fn split_pair(players: &[Player]) -> (Option<Player>, Option<Player>) {
    if players.len() <= 2 {
        return (players.first().cloned(), players.get(1).cloned());
    }
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| b.tier.total_cmp(&a.tier));
    let half = sorted.len().div_ceil(2);
    let (top, rest) = sorted.split_at(half);
    (averaged(top), averaged(rest))
}
