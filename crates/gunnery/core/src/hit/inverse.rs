//! Inverse calculation: maximum transversal velocity for a target hit chance.

use crate::constants::{HIT_CHANCE_BASE, SIGNATURE_RESOLUTION};
use crate::params::InverseParameters;

use super::components::calculate_range_component;

/// Calculate the highest transversal velocity that still achieves the target hit chance.
///
/// Holds distance, tracking, signature, optimal and falloff fixed and inverts
/// the forward model for transversal.
///
/// # Formula
///
/// ```text
/// total    = ln(target) / ln(0.5)                  (= -log2(target))
/// budget   = total - range
/// angular  = sqrt(budget) × tracking_speed × signature / 40000
/// max      = angular × distance
/// ```
///
/// # Returns
///
/// - `0.0` when the target is outside `(0, 1]` (no safe speed exists)
/// - `f64::INFINITY` when `budget <= 0`: the range term alone already uses up
///   the allowed exponent, so transversal is not the limiting factor
/// - `0.0` when tracking, signature or distance is non-positive, since the
///   forward model cannot hit at any speed there
/// - otherwise the finite maximum transversal (m/s)
pub fn calculate_max_transversal(params: &InverseParameters) -> f64 {
    let target = params.target_hit_chance;
    if !(target > 0.0 && target <= 1.0) {
        return 0.0;
    }

    let total_exponent = target.ln() / HIT_CHANCE_BASE.ln();
    let range_component =
        calculate_range_component(params.distance, params.optimal_range, params.falloff);

    let tracking_budget = total_exponent - range_component;
    if tracking_budget <= 0.0 {
        return f64::INFINITY;
    }

    if params.tracking_speed <= 0.0 || params.signature_radius <= 0.0 || params.distance <= 0.0 {
        return 0.0;
    }

    let max_angular = tracking_budget.sqrt() * params.tracking_speed * params.signature_radius
        / SIGNATURE_RESOLUTION;

    max_angular * params.distance
}
