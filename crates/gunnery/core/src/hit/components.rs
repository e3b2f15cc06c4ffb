//! Building blocks of the hit-chance exponent.
//!
//! Each function is total over `f64`. Degenerate inputs (non-positive
//! distance, tracking, signature or falloff) map to `f64::INFINITY` or `0.0`
//! as documented per function; nothing here divides by zero or panics.

use crate::constants::SIGNATURE_RESOLUTION;

/// Calculate angular velocity from transversal velocity and distance.
///
/// # Formula
///
/// ```text
/// angular = transversal / distance
/// ```
///
/// A non-positive `distance` is a degenerate geometry and yields
/// `f64::INFINITY`, which downstream turns into a zero hit chance.
///
/// # Returns
///
/// Angular velocity in rad/s.
pub fn calculate_angular_velocity(transversal: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return f64::INFINITY;
    }
    transversal / distance
}

/// Calculate the tracking term of the hit-chance exponent.
///
/// # Formula
///
/// ```text
/// tracking = ((angular × 40000) / (tracking_speed × signature_radius))²
/// ```
///
/// A turret with non-positive tracking speed, or a target with non-positive
/// signature radius, can never be tracked: the result is `f64::INFINITY`.
///
/// # Arguments
///
/// * `angular_velocity` - Target angular velocity (rad/s)
/// * `tracking_speed` - Turret tracking speed (rad/s)
/// * `signature_radius` - Target signature radius (m)
pub fn calculate_tracking_component(
    angular_velocity: f64,
    tracking_speed: f64,
    signature_radius: f64,
) -> f64 {
    if tracking_speed <= 0.0 || signature_radius <= 0.0 {
        return f64::INFINITY;
    }

    let ratio = (angular_velocity * SIGNATURE_RESOLUTION) / (tracking_speed * signature_radius);
    ratio * ratio
}

/// Calculate the range term of the hit-chance exponent.
///
/// # Formula
///
/// ```text
/// range = (max(0, distance - optimal) / falloff)²
/// ```
///
/// Without a falloff band (`falloff <= 0`) the turret either hits inside
/// optimal (`0.0`) or cannot hit at all beyond it (`f64::INFINITY`).
pub fn calculate_range_component(distance: f64, optimal: f64, falloff: f64) -> f64 {
    if falloff <= 0.0 {
        return if distance > optimal { f64::INFINITY } else { 0.0 };
    }

    let excess = (distance - optimal).max(0.0);
    let ratio = excess / falloff;
    ratio * ratio
}
