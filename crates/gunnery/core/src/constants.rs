//! Fixed constants of the turret ballistic model.
//!
//! These values are part of the model itself, not tunables. They are exposed
//! so callers can display them, never so they can be overridden.

/// Turret signature resolution in meters.
///
/// Relates angular velocity to tracking difficulty: a target whose signature
/// radius equals this value is tracked at exactly the turret's tracking speed.
pub const SIGNATURE_RESOLUTION: f64 = 40_000.0;

/// Base of the halving law: each unit of combined exponent halves the hit chance.
pub const HIT_CHANCE_BASE: f64 = 0.5;

/// Share of hits that are ordinary (non-wrecking) hits.
pub const NORMAL_HIT_SHARE: f64 = 0.97;

/// Average damage multiplier of an ordinary hit.
pub const NORMAL_HIT_MULTIPLIER: f64 = 0.5;

/// Share of hits that are wrecking hits.
pub const WRECKING_HIT_SHARE: f64 = 0.03;

/// Damage multiplier of a wrecking hit.
pub const WRECKING_HIT_MULTIPLIER: f64 = 3.0;

/// Expected damage multiplier per landed hit (`0.97 × 0.5 + 0.03 × 3`).
pub const EXPECTED_HIT_MULTIPLIER: f64 = NORMAL_HIT_SHARE * NORMAL_HIT_MULTIPLIER
    + WRECKING_HIT_SHARE * WRECKING_HIT_MULTIPLIER;

/// Milliradians per radian, for display scaling of angular velocity.
pub const MILLIRADIANS_PER_RADIAN: f64 = 1_000.0;
