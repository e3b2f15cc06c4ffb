//! Forward hit-chance calculation.

use crate::constants::{EXPECTED_HIT_MULTIPLIER, HIT_CHANCE_BASE, MILLIRADIANS_PER_RADIAN};
use crate::params::TurretParameters;

use super::components::{
    calculate_angular_velocity, calculate_range_component, calculate_tracking_component,
};

/// Result of a forward hit-chance calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct HitResult {
    /// Probability of a hit, in `[0, 1]`.
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub hit_chance: f64,

    /// `hit_chance × 100`.
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub hit_chance_percent: f64,

    /// Target angular velocity (rad/s).
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub angular_velocity: f64,

    /// Angular velocity in milliradians per second.
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub angular_velocity_mrad: f64,

    /// Squared tracking term of the exponent.
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub tracking_component: f64,

    /// Squared range term of the exponent.
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub range_component: f64,

    /// `distance <= optimal`.
    pub is_in_optimal: bool,

    /// `distance <= optimal + falloff`.
    pub is_in_falloff: bool,

    /// Expected damage per shot relative to base damage.
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub expected_damage_modifier: f64,
}

/// Calculate hit chance and its derived quantities.
///
/// # Formula
///
/// ```text
/// angular    = transversal / distance
/// tracking   = ((angular × 40000) / (tracking_speed × signature))²
/// range      = (max(0, distance - optimal) / falloff)²
/// hit_chance = 0.5 ^ (tracking + range)                 clamped to [0, 1]
/// expected   = hit_chance × (0.97 × 0.5 + 0.03 × 3)
/// ```
///
/// Any infinite component drives the hit chance to exactly `0.0`.
pub fn calculate_hit_chance(params: &TurretParameters) -> HitResult {
    let angular_velocity = calculate_angular_velocity(params.transversal, params.distance);
    let tracking_component = calculate_tracking_component(
        angular_velocity,
        params.tracking_speed,
        params.signature_radius,
    );
    let range_component =
        calculate_range_component(params.distance, params.optimal_range, params.falloff);

    let hit_chance = HIT_CHANCE_BASE
        .powf(tracking_component + range_component)
        .clamp(0.0, 1.0);

    HitResult {
        hit_chance,
        hit_chance_percent: hit_chance * 100.0,
        angular_velocity,
        angular_velocity_mrad: angular_velocity * MILLIRADIANS_PER_RADIAN,
        tracking_component,
        range_component,
        is_in_optimal: params.distance <= params.optimal_range,
        is_in_falloff: params.distance <= params.optimal_range + params.falloff,
        expected_damage_modifier: hit_chance * EXPECTED_HIT_MULTIPLIER,
    }
}
