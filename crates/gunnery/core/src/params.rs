//! Input parameter sets for the forward and inverse calculations.
//!
//! Both sets carry documented fallbacks. Loosely-typed input (query strings,
//! form fields) goes through [`TurretParameters::from_fields`] /
//! [`InverseParameters::from_fields`], which substitute the fallback for any
//! field that is absent or unparseable. Malformed values are never an error.

/// Fallback values for missing or unparseable inputs.
pub mod defaults {
    pub const TRANSVERSAL: f64 = 0.0;
    pub const DISTANCE: f64 = 1.0;
    pub const TRACKING_SPEED: f64 = 0.01;
    pub const SIGNATURE_RADIUS: f64 = 100.0;
    pub const OPTIMAL_RANGE: f64 = 10_000.0;
    pub const FALLOFF: f64 = 5_000.0;
    pub const TARGET_HIT_CHANCE: f64 = 0.5;
}

/// Inputs of the forward hit-chance calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct TurretParameters {
    /// Target velocity perpendicular to the line of sight (m/s).
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub transversal: f64,
    /// Distance to the target (m).
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub distance: f64,
    /// Turret tracking speed (rad/s).
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub tracking_speed: f64,
    /// Target signature radius (m).
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub signature_radius: f64,
    /// Turret optimal range (m).
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub optimal_range: f64,
    /// Turret falloff (m).
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub falloff: f64,
}

impl TurretParameters {
    /// Build parameters from loosely-typed key/value pairs.
    ///
    /// Recognised keys (camelCase or snake_case): `transversal`, `distance`,
    /// `trackingSpeed`, `signatureRadius`, `optimalRange`, `falloff`.
    /// Unknown keys are ignored; unparseable values keep the fallback.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in fields {
            let Some(value) = parse_number(value.as_ref()) else {
                continue;
            };
            match key.as_ref() {
                "transversal" => params.transversal = value,
                "distance" => params.distance = value,
                "trackingSpeed" | "tracking_speed" => params.tracking_speed = value,
                "signatureRadius" | "signature_radius" => params.signature_radius = value,
                "optimalRange" | "optimal_range" | "optimal" => params.optimal_range = value,
                "falloff" => params.falloff = value,
                _ => {}
            }
        }
        params
    }
}

impl Default for TurretParameters {
    fn default() -> Self {
        Self {
            transversal: defaults::TRANSVERSAL,
            distance: defaults::DISTANCE,
            tracking_speed: defaults::TRACKING_SPEED,
            signature_radius: defaults::SIGNATURE_RADIUS,
            optimal_range: defaults::OPTIMAL_RANGE,
            falloff: defaults::FALLOFF,
        }
    }
}

/// Inputs of the inverse calculation (maximum transversal for a target hit chance).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct InverseParameters {
    /// Desired hit chance in `(0, 1]`.
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub target_hit_chance: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub distance: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub tracking_speed: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub signature_radius: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub optimal_range: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::float_repr"))]
    pub falloff: f64,
}

impl InverseParameters {
    /// Build parameters from loosely-typed key/value pairs.
    ///
    /// Same rules as [`TurretParameters::from_fields`], plus `targetHitChance`.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in fields {
            let Some(value) = parse_number(value.as_ref()) else {
                continue;
            };
            match key.as_ref() {
                "targetHitChance" | "target_hit_chance" => params.target_hit_chance = value,
                "distance" => params.distance = value,
                "trackingSpeed" | "tracking_speed" => params.tracking_speed = value,
                "signatureRadius" | "signature_radius" => params.signature_radius = value,
                "optimalRange" | "optimal_range" | "optimal" => params.optimal_range = value,
                "falloff" => params.falloff = value,
                _ => {}
            }
        }
        params
    }

    /// The forward parameters with the given transversal velocity.
    pub fn with_transversal(&self, transversal: f64) -> TurretParameters {
        TurretParameters {
            transversal,
            distance: self.distance,
            tracking_speed: self.tracking_speed,
            signature_radius: self.signature_radius,
            optimal_range: self.optimal_range,
            falloff: self.falloff,
        }
    }
}

impl Default for InverseParameters {
    fn default() -> Self {
        Self {
            target_hit_chance: defaults::TARGET_HIT_CHANCE,
            distance: defaults::DISTANCE,
            tracking_speed: defaults::TRACKING_SPEED,
            signature_radius: defaults::SIGNATURE_RADIUS,
            optimal_range: defaults::OPTIMAL_RANGE,
            falloff: defaults::FALLOFF,
        }
    }
}

/// Parse a loosely formatted number. NaN counts as unparseable.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| !value.is_nan())
}
