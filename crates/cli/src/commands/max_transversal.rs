//! Inverse calculation: fastest transversal for a desired hit chance.

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;

use gunnery_core::{InverseParameters, calculate_hit_chance, calculate_max_transversal};

use crate::config::CliConfig;
use crate::output::{OutputFormat, format_float, print_json};

/// Calculate the maximum target transversal that keeps a desired hit chance
#[derive(Parser)]
pub struct MaxTransversal {
    /// Desired hit chance in (0, 1]
    #[arg(short = 'c', long, value_name = "CHANCE")]
    target_hit_chance: Option<String>,

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

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaxTransversalOutput {
    params: InverseParameters,
    #[serde(with = "gunnery_core::float_repr")]
    max_transversal: f64,
    /// Forward hit chance at `max_transversal`, absent when unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    achieved_hit_chance: Option<f64>,
}

impl MaxTransversal {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let format = self.format.unwrap_or(config.format);
        let output = solve(self.parameters());
        tracing::debug!(
            params = ?output.params,
            max_transversal = output.max_transversal,
            "calculated max transversal"
        );

        match format {
            OutputFormat::Summary => print_summary(&output),
            OutputFormat::Json => print_json(&output)?,
        }
        Ok(())
    }

    fn parameters(&self) -> InverseParameters {
        let fields = [
            ("targetHitChance", &self.target_hit_chance),
            ("distance", &self.distance),
            ("trackingSpeed", &self.tracking_speed),
            ("signatureRadius", &self.signature_radius),
            ("optimalRange", &self.optimal_range),
            ("falloff", &self.falloff),
        ];
        InverseParameters::from_fields(
            fields
                .into_iter()
                .filter_map(|(key, value)| value.as_deref().map(|v| (key, v))),
        )
    }
}

fn solve(params: InverseParameters) -> MaxTransversalOutput {
    let max_transversal = calculate_max_transversal(&params);
    let achieved_hit_chance = max_transversal
        .is_finite()
        .then(|| calculate_hit_chance(&params.with_transversal(max_transversal)).hit_chance);

    MaxTransversalOutput {
        params,
        max_transversal,
        achieved_hit_chance,
    }
}

fn print_summary(output: &MaxTransversalOutput) {
    let params = &output.params;
    println!("{}", style("=== Max Transversal ===").bold().green());
    println!();

    println!("{}", style("Parameters:").bold().yellow());
    println!(
        "  Target hit chance: {} %",
        format_float(params.target_hit_chance * 100.0, 2)
    );
    println!("  Distance:          {} m", format_float(params.distance, 1));
    println!("  Tracking speed:    {} rad/s", format_float(params.tracking_speed, 4));
    println!("  Signature radius:  {} m", format_float(params.signature_radius, 1));
    println!(
        "  Optimal/falloff:   {} m + {} m",
        format_float(params.optimal_range, 1),
        format_float(params.falloff, 1)
    );
    println!();

    println!("{}", style("Result:").bold().yellow());
    println!(
        "  Max transversal:   {}",
        style(format!("{} m/s", format_float(output.max_transversal, 1))).bold()
    );
    match output.achieved_hit_chance {
        Some(chance) => println!("  Hit chance there:  {} %", format_float(chance * 100.0, 2)),
        None => println!(
            "  {}",
            style("Transversal is not the limiting factor at this range").dim()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_parameters() {
        let cmd = MaxTransversal::try_parse_from([
            "max-transversal",
            "-c",
            "0.75",
            "--distance",
            "20000",
            "--optimal",
            "18000",
        ])
        .unwrap();
        let params = cmd.parameters();

        assert_eq!(params.target_hit_chance, 0.75);
        assert_eq!(params.distance, 20_000.0);
        assert_eq!(params.optimal_range, 18_000.0);
        assert_eq!(params.falloff, InverseParameters::default().falloff);
    }

    #[test]
    fn solved_speed_reproduces_target_chance() {
        let params = InverseParameters {
            target_hit_chance: 0.6,
            distance: 12_000.0,
            tracking_speed: 0.04,
            signature_radius: 200.0,
            optimal_range: 10_000.0,
            falloff: 10_000.0,
        };
        let output = solve(params);

        assert!(output.max_transversal.is_finite());
        let achieved = output.achieved_hit_chance.unwrap();
        assert!((achieved - 0.6).abs() < 1e-9);
    }

    #[test]
    fn invalid_target_yields_zero_speed() {
        let params = InverseParameters {
            target_hit_chance: 1.5,
            ..InverseParameters::default()
        };
        let output = solve(params);
        assert_eq!(output.max_transversal, 0.0);
    }

    #[test]
    fn unbounded_speed_serializes_as_label() {
        let params = InverseParameters {
            target_hit_chance: 0.9,
            distance: 50_000.0,
            optimal_range: 10_000.0,
            falloff: 5_000.0,
            ..InverseParameters::default()
        };
        let output = solve(params);
        assert!(output.max_transversal.is_infinite());

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["maxTransversal"], "Infinity");
        assert!(value.get("achievedHitChance").is_none());
    }
}
