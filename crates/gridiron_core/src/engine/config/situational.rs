//! Situational modifiers: pass tendency, pass depth, fourth-down bands and
//! the clock model.

pub mod tendency {
    pub const RATING_DIFF_SCALE: f64 = 0.5;
    pub const RATING_DIFF_CAP: f64 = 0.08;

    pub const THIRD_AND_LONG_YARDS: i32 = 7;
    pub const THIRD_AND_LONG: f64 = 0.20;

    pub const SHORT_YARDAGE_YARDS: i32 = 2;
    pub const SHORT_YARDAGE: f64 = -0.15;

    /// Field position at or beyond which the offense is "at the goal line".
    pub const GOAL_LINE_FIELD_POSITION: i32 = 95;
    pub const GOAL_LINE: f64 = -0.15;

    pub const TWO_MINUTE_SECONDS: u32 = 120;
    pub const TWO_MINUTE_DRILL: f64 = 0.20;

    pub const PROTECT_LEAD_SECONDS: u32 = 300;
    pub const PROTECT_LEAD: f64 = -0.20;

    pub const MIN: f64 = 0.15;
    pub const MAX: f64 = 0.90;
}

pub mod pass_depth {
    pub const SHORT: f64 = 0.50;
    pub const MEDIUM: f64 = 0.32;
    pub const DEEP: f64 = 0.18;

    pub const LONG_YARDAGE_YARDS: i32 = 10;
    pub const LONG_SHORT_DELTA: f64 = -0.10;
    pub const LONG_MEDIUM_DELTA: f64 = 0.05;
    pub const LONG_DEEP_DELTA: f64 = 0.05;

    pub const SHORT_YARDAGE_YARDS: i32 = 3;
    pub const SHORT_SHORT_DELTA: f64 = 0.15;
    pub const SHORT_MEDIUM_DELTA: f64 = -0.10;
    pub const SHORT_DEEP_DELTA: f64 = -0.05;

    /// A pocket collapsing sooner than this turns a deep call into a
    /// medium throw.
    pub const DEEP_DROP_SECONDS: f64 = 2.0;

    /// Inside this field position deep shots fold into medium throws.
    pub const RED_ZONE_FIELD_POSITION: i32 = 80;

    /// Tier handicap for the tight end when picking a target.
    pub const TE_TARGET_HANDICAP: f64 = 1.0;
    /// Random spread added to each receiver's tier when picking a target.
    pub const TARGET_SPREAD: f64 = 4.0;
}

pub mod fourth_down {
    pub const SHORT_YARDAGE_YARDS: i32 = 2;
    pub const MIDFIELD: i32 = 50;
    pub const IN_RANGE: i32 = 60;

    pub const GO_OWN_TERRITORY: f64 = 0.15;
    pub const GO_MIDFIELD: f64 = 0.40;
    pub const GO_IN_RANGE: f64 = 0.50;

    pub const DESPERATION_QUARTER: u8 = 4;
    pub const DESPERATION_SECONDS: u32 = 120;
}

/// Spot bounds for the new offense after a turnover or a missed field goal.
pub mod respot {
    pub const MIN: i32 = 20;
    pub const MAX: i32 = 80;
}

pub mod clock {
    pub const QUARTER_SECONDS: u32 = 900;
    pub const OVERTIME_SECONDS: u32 = 600;
    pub const REGULATION_QUARTERS: u8 = 4;
    pub const OVERTIME_QUARTER: u8 = 5;

    pub const DEFAULT_MAX_PLAYS: u32 = 300;
    pub const DEFAULT_MAX_OVERTIME_PLAYS: u32 = 100;

    /// Elapsed-seconds ranges (inclusive) per outcome.
    pub const SACK: (i32, i32) = (25, 35);
    pub const SCRAMBLE: (i32, i32) = (30, 40);
    pub const COMPLETE: (i32, i32) = (28, 40);
    pub const INCOMPLETE: (i32, i32) = (16, 24);
    pub const INTERCEPTION: (i32, i32) = (20, 30);
    pub const STUFFED: (i32, i32) = (30, 40);
    pub const RUN: (i32, i32) = (32, 42);
    pub const KICKOFF: (i32, i32) = (8, 20);
    pub const PUNT: (i32, i32) = (10, 18);
    pub const FIELD_GOAL: (i32, i32) = (5, 10);
}
