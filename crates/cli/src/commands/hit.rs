//! Forward hit-chance calculation.

use anyhow::Result;
use clap::Parser;
use console::style;

use gunnery_core::{HitResult, TurretParameters, calculate_hit_chance};

use crate::config::CliConfig;
use crate::output::{OutputFormat, format_float, print_json, yes_no};

/// Calculate turret hit chance against a target
///
/// Values are taken as text; anything that does not parse as a number keeps
/// its default.
#[derive(Parser)]
pub struct Hit {
    /// Target transversal velocity (m/s)
    #[arg(short, long, value_name = "M/S")]
    transversal: Option<String>,

    /// Distance to target (m)
    #[arg(short, long, value_name = "M")]
    distance: Option<String>,

    /// Turret tracking speed (rad/s)
    #[arg(long, value_name = "RAD/S")]
    tracking_speed: Option<String>,

    /// Target signature radius (m)
    #[arg(long, value_name = "M")]
    signature_radius: Option<String>,

    /// Turret optimal range (m)
    #[arg(long, visible_alias = "optimal", value_name = "M")]
    optimal_range: Option<String>,

    /// Turret falloff (m)
    #[arg(long, value_name = "M")]
    falloff: Option<String>,

    /// Output format (overrides GUNNERY_OUTPUT)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

impl Hit {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let format = self.format.unwrap_or(config.format);
        let params = self.parameters();
        let result = calculate_hit_chance(&params);
        tracing::debug!(?params, hit_chance = result.hit_chance, "calculated hit chance");

        match format {
            OutputFormat::Summary => print_summary(&params, &result),
            OutputFormat::Json => print_json(&HitOutput {
                params: &params,
                result: &result,
            })?,
        }
        Ok(())
    }

    fn parameters(&self) -> TurretParameters {
        let fields = [
            ("transversal", &self.transversal),
            ("distance", &self.distance),
            ("trackingSpeed", &self.tracking_speed),
            ("signatureRadius", &self.signature_radius),
            ("optimalRange", &self.optimal_range),
            ("falloff", &self.falloff),
        ];
        TurretParameters::from_fields(
            fields
                .into_iter()
                .filter_map(|(key, value)| value.as_deref().map(|v| (key, v))),
        )
    }
}

#[derive(serde::Serialize)]
struct HitOutput<'a> {
    params: &'a TurretParameters,
    result: &'a HitResult,
}

fn print_summary(params: &TurretParameters, result: &HitResult) {
    println!("{}", style("=== Hit Chance ===").bold().green());
    println!();

    println!("{}", style("Parameters:").bold().yellow());
    println!("  Transversal:      {} m/s", format_float(params.transversal, 1));
    println!("  Distance:         {} m", format_float(params.distance, 1));
    println!("  Tracking speed:   {} rad/s", format_float(params.tracking_speed, 4));
    println!("  Signature radius: {} m", format_float(params.signature_radius, 1));
    println!(
        "  Optimal/falloff:  {} m + {} m",
        format_float(params.optimal_range, 1),
        format_float(params.falloff, 1)
    );
    println!();

    println!("{}", style("Result:").bold().yellow());
    println!(
        "  Hit chance:       {}",
        style(format!("{} %", format_float(result.hit_chance_percent, 2))).bold()
    );
    println!(
        "  Angular velocity: {} rad/s ({} mrad/s)",
        format_float(result.angular_velocity, 5),
        format_float(result.angular_velocity_mrad, 2)
    );
    println!("  Tracking term:    {}", format_float(result.tracking_component, 4));
    println!("  Range term:       {}", format_float(result.range_component, 4));
    println!("  In optimal:       {}", yes_no(result.is_in_optimal));
    println!("  In falloff:       {}", yes_no(result.is_in_falloff));
    println!(
        "  Expected damage:  {}x base",
        format_float(result.expected_damage_modifier, 4)
    );
}
