//! Turret hit-chance model.
//!
//! This module provides pure functions for the turret ballistic model.
//! All functions are deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `calculate_hit_chance`: Forward model (parameters → hit chance and derived values)
//! - `calculate_max_transversal`: Inverse model (target hit chance → maximum transversal)
//! - `calculate_angular_velocity`, `calculate_tracking_component`,
//!   `calculate_range_component`: The individual exponent terms
//!
//! # Degenerate Inputs
//!
//! Non-positive distance, tracking, signature or falloff never raise. They map
//! to `f64::INFINITY` (an untrackable or unreachable term) or `0.0` as each
//! function documents. Callers check `is_finite()` where it matters.

pub mod chance;
pub mod components;
pub mod inverse;

pub use chance::{HitResult, calculate_hit_chance};
pub use components::{
    calculate_angular_velocity, calculate_range_component, calculate_tracking_component,
};
pub use inverse::calculate_max_transversal;
