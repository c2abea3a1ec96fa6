//! Position blend weights for team ratings.

pub mod offense {
    /// Passing rating = raw QB/WR blend × PASS_CORE + TE × PASS_TE + OL × PASS_OL.
    pub const PASS_CORE: f64 = 0.80;
    pub const PASS_TE: f64 = 0.10;
    pub const PASS_OL: f64 = 0.10;

    pub const RUN_RB: f64 = 0.60;
    pub const RUN_OL: f64 = 0.30;
    pub const RUN_TE: f64 = 0.10;

    pub const PROTECTION_OL: f64 = 0.80;
    pub const PROTECTION_TE: f64 = 0.20;

    /// Average WR tier at or above which the receiving corps earns a bonus.
    pub const WR_SYNERGY_BONUS_TIER: f64 = 7.0;
    /// Average WR tier at or below which the receiving corps is penalised.
    pub const WR_SYNERGY_PENALTY_TIER: f64 = 3.0;
    pub const WR_SYNERGY_BONUS: f64 = 1.03;
    pub const WR_SYNERGY_PENALTY: f64 = 0.97;
}

pub mod defense {
    pub const PASS_DEF_DB: f64 = 0.60;
    pub const PASS_DEF_LB: f64 = 0.20;
    pub const PASS_DEF_DL: f64 = 0.20;

    pub const RUN_DEF_DL: f64 = 0.45;
    pub const RUN_DEF_LB: f64 = 0.45;
    pub const RUN_DEF_DB: f64 = 0.10;

    pub const PASS_RUSH_DL: f64 = 0.75;
    pub const PASS_RUSH_LB: f64 = 0.25;

    pub const COVERAGE_DB: f64 = 0.80;
    pub const COVERAGE_LB: f64 = 0.20;
}

pub mod overall {
    pub const OFFENSE: f64 = 0.45;
    pub const DEFENSE: f64 = 0.45;
    pub const SPECIAL_TEAMS: f64 = 0.10;
}
