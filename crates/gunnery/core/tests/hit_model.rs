use gunnery_core::{
    InverseParameters, TurretParameters, calculate_hit_chance, calculate_max_transversal,
};
use proptest::prelude::*;

fn turret(
    transversal: f64,
    distance: f64,
    tracking_speed: f64,
    signature_radius: f64,
) -> TurretParameters {
    TurretParameters {
        transversal,
        distance,
        tracking_speed,
        signature_radius,
        optimal_range: 10_000.0,
        falloff: 5_000.0,
    }
}

#[test]
fn inside_optimal_range_has_no_range_penalty() {
    let result = calculate_hit_chance(&turret(0.0, 5_000.0, 0.05, 125.0));
    assert_eq!(result.range_component, 0.0);
    assert!(result.is_in_optimal);
}

#[test]
fn two_km_into_falloff() {
    let result = calculate_hit_chance(&turret(0.0, 12_000.0, 0.05, 125.0));
    assert!((result.range_component - 0.16).abs() < 1e-12);
}

#[test]
fn stationary_target_has_no_tracking_penalty() {
    for &(tracking, signature) in &[(0.001, 40.0), (0.05, 125.0), (1.2, 5_000.0)] {
        let result = calculate_hit_chance(&turret(0.0, 7_500.0, tracking, signature));
        assert_eq!(result.angular_velocity, 0.0);
        assert_eq!(result.tracking_component, 0.0);
    }
}

#[test]
fn invalid_target_hit_chance_reports_zero() {
    let params = InverseParameters {
        target_hit_chance: 1.5,
        ..InverseParameters::default()
    };
    assert_eq!(calculate_max_transversal(&params), 0.0);
}

#[test]
fn infinite_results_serialize_as_labels() {
    let result = calculate_hit_chance(&turret(100.0, 0.0, 0.05, 125.0));
    let json = serde_json::to_value(result).unwrap();

    assert_eq!(json["angularVelocity"], "Infinity");
    assert_eq!(json["trackingComponent"], "Infinity");
    assert_eq!(json["hitChance"], 0.0);
    assert_eq!(json["isInOptimal"], true);

    let back: gunnery_core::HitResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.angular_velocity, f64::INFINITY);
}

#[test]
fn parameters_deserialize_with_defaults() {
    let params: TurretParameters =
        serde_json::from_str(r#"{"transversal": 150, "distance": "Infinity"}"#).unwrap();
    assert_eq!(params.transversal, 150.0);
    assert_eq!(params.distance, f64::INFINITY);
    assert_eq!(params.tracking_speed, 0.01);
    assert_eq!(params.falloff, 5_000.0);
}

proptest! {
    #[test]
    fn hit_chance_is_a_probability(
        transversal in 0.0f64..5_000.0,
        distance in 1.0f64..100_000.0,
        tracking in 0.0001f64..2.0,
        signature in 1.0f64..10_000.0,
    ) {
        let result = calculate_hit_chance(&turret(transversal, distance, tracking, signature));
        prop_assert!((0.0..=1.0).contains(&result.hit_chance));
        prop_assert_eq!(
            result.hit_chance,
            0.5_f64.powf(result.tracking_component + result.range_component).clamp(0.0, 1.0)
        );
        prop_assert!((result.hit_chance_percent - result.hit_chance * 100.0).abs() < 1e-9);
    }

    #[test]
    fn inverse_round_trips(
        target in 0.01f64..0.99,
        distance in 100.0f64..20_000.0,
        tracking in 0.001f64..1.0,
        signature in 10.0f64..2_000.0,
    ) {
        let params = InverseParameters {
            target_hit_chance: target,
            distance,
            tracking_speed: tracking,
            signature_radius: signature,
            optimal_range: 10_000.0,
            falloff: 5_000.0,
        };
        let range = gunnery_core::calculate_range_component(distance, 10_000.0, 5_000.0);
        prop_assume!(-target.log2() - range > 1e-6);

        let transversal = calculate_max_transversal(&params);
        prop_assert!(transversal.is_finite());
        prop_assert!(transversal >= 0.0);

        let forward = calculate_hit_chance(&params.with_transversal(transversal));
        prop_assert!((forward.hit_chance - target).abs() < 1e-9);
    }
}
