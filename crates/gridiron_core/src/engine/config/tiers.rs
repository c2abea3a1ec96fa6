//! Tier → rating curve.

pub const MIN_TIER: f64 = 1.0;
pub const MAX_TIER: f64 = 11.0;

/// Tier assumed for any roster slot or player reference that is missing.
pub const REPLACEMENT_TIER: f64 = 5.0;

/// Rating returned for input that is not a number.
pub const NEUTRAL_RATING: f64 = 0.50;

/// Largest tier-equivalent offset traits/composite score can add or remove.
pub const MAX_TRAIT_OFFSET: f64 = 0.01;

/// Neutral trait / composite score (0-100 scale).
pub const NEUTRAL_TRAIT_SCORE: f64 = 50.0;

/// Rating multiplier for integer tiers 1..=11.
pub const TIER_RATINGS: [f64; 11] = [
    0.20, // T1
    0.28, // T2
    0.36, // T3
    0.44, // T4
    0.50, // T5
    0.56, // T6
    0.63, // T7
    0.70, // T8
    0.78, // T9
    0.86, // T10
    0.95, // T11
];

/// Convert a (possibly fractional) tier to a 0-1 rating.
///
/// Input is clamped to [1, 11]; fractional tiers interpolate linearly between
/// the neighbouring integer tiers. NaN yields [`NEUTRAL_RATING`].
pub fn tier_to_rating(tier: f64) -> f64 {
    if tier.is_nan() {
        return NEUTRAL_RATING;
    }
    let t = tier.clamp(MIN_TIER, MAX_TIER);
    let lo = t.floor();
    let lo_idx = (lo as usize).saturating_sub(1).min(TIER_RATINGS.len() - 1);
    let hi_idx = (lo_idx + 1).min(TIER_RATINGS.len() - 1);
    let frac = t - lo;
    TIER_RATINGS[lo_idx] + (TIER_RATINGS[hi_idx] - TIER_RATINGS[lo_idx]) * frac
}
