use axlecheck_domain::{
    check_federal_compliance, check_state_compliance, VehicleConfig, ViolationKind,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn vehicle_strategy() -> impl Strategy<Value = VehicleConfig> {
    (2_usize..=9).prop_flat_map(|axles| {
        (
            prop::collection::vec(0_u32..=30_000, axles),
            prop::collection::vec(0_u32..=400, axles - 1),
            prop::option::of(0_u32..=200_000),
        )
            .prop_map(|(weights, spacing, declared)| {
                let mut config = VehicleConfig::new(
                    "generated",
                    weights.into_iter().map(f64::from).collect(),
                    // tenths of a foot
                    spacing.into_iter().map(|s| f64::from(s) / 10.0).collect(),
                );
                config.declared_gross_weight = declared.map(f64::from);
                config
            })
    })
}

fn violation_keys(config: &VehicleConfig) -> Vec<(ViolationKind, Option<usize>, Option<(usize, usize)>)> {
    check_federal_compliance(config)
        .expect("valid config")
        .violations
        .iter()
        .map(|v| (v.kind, v.axle_index, v.axle_group.map(|g| (g.first, g.last))))
        .collect()
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn evaluation_is_idempotent(config in vehicle_strategy()) {
        let first = check_federal_compliance(&config).expect("valid config");
        let second = check_federal_compliance(&config).expect("valid config");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn gross_weight_is_axle_sum(config in vehicle_strategy()) {
        let result = check_federal_compliance(&config).expect("valid config");
        let sum: f64 = config.axles.axle_weights.iter().sum();
        prop_assert_eq!(result.gross_weight, sum);
        prop_assert_eq!(result.over_weight, (sum - result.max_allowed_weight).max(0.0));
    }

    #[test]
    fn compliant_iff_no_violations(config in vehicle_strategy()) {
        let result = check_federal_compliance(&config).expect("valid config");
        prop_assert_eq!(result.is_compliant, result.violations.is_empty());
    }

    #[test]
    fn heavier_axle_never_removes_violations(
        config in vehicle_strategy(),
        pick in any::<prop::sample::Index>(),
        extra in 1_u32..=10_000,
    ) {
        let before = check_federal_compliance(&config).expect("valid config");
        let before_keys = violation_keys(&config);

        let mut heavier = config.clone();
        let axle = pick.index(heavier.axles.axle_count);
        heavier.axles.axle_weights[axle] += f64::from(extra);
        let after = check_federal_compliance(&heavier).expect("valid config");
        let after_keys = violation_keys(&heavier);

        prop_assert!(after.over_weight >= before.over_weight);
        for key in before_keys {
            prop_assert!(after_keys.contains(&key), "lost violation {:?}", key);
        }
    }

    #[test]
    fn unknown_state_is_federal(config in vehicle_strategy()) {
        let federal = check_federal_compliance(&config).expect("valid config");
        let fallback = check_state_compliance(&config, "ZZ").expect("valid config");
        prop_assert_eq!(
            serde_json::to_string(&federal).expect("serialize"),
            serde_json::to_string(&fallback).expect("serialize")
        );
    }
}
