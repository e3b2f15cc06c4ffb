//! Deterministic turret hit-chance model.
//!
//! `gunnery-core` defines the forward calculation (turret and target
//! parameters → hit chance) and its inverse (target hit chance → maximum
//! transversal velocity). Everything here is pure and total: no I/O, no
//! logging, no shared state. Degenerate inputs produce `f64::INFINITY` or
//! `0.0` instead of errors.
//!
//! With the `serde` feature, parameter and result types serialize with
//! camelCase field names and non-finite floats go through [`float_repr`].
pub mod constants;
#[cfg(feature = "serde")]
pub mod float_repr;
pub mod hit;
pub mod params;

pub use constants::{EXPECTED_HIT_MULTIPLIER, SIGNATURE_RESOLUTION};
pub use hit::{
    HitResult, calculate_angular_velocity, calculate_hit_chance, calculate_max_transversal,
    calculate_range_component, calculate_tracking_component,
};
pub use params::{InverseParameters, TurretParameters};
