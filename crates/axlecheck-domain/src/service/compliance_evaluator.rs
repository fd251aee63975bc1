//! Axle weight compliance evaluation
//!
//! Violations are always reported in the same order: gross first, then
//! single axles by index, then tandem pairs by first axle, then bridge
//! formula groups by first axle (shorter groups before longer ones).

use std::sync::OnceLock;

use axlecheck_types::Result;
use tracing::{trace, warn};

use crate::model::{
    normalize_code, AxleGroup, ComplianceResult, JurisdictionTable, VehicleConfig, Violation,
    WeightLimits, FEDERAL_CODE,
};

static BUILTIN_TABLE: OnceLock<JurisdictionTable> = OnceLock::new();

fn builtin_table() -> &'static JurisdictionTable {
    BUILTIN_TABLE.get_or_init(JurisdictionTable::builtin)
}

/// Check a vehicle against federal limits using the compiled-in table.
pub fn check_federal_compliance(config: &VehicleConfig) -> Result<ComplianceResult> {
    ComplianceEvaluator::new(builtin_table()).check_federal(config)
}

/// Check a vehicle against a state's limits using the compiled-in table.
///
/// Unknown state codes fall back to federal limits.
pub fn check_state_compliance(config: &VehicleConfig, state_code: &str) -> Result<ComplianceResult> {
    ComplianceEvaluator::new(builtin_table()).check_state(config, state_code)
}

/// Maximum weight (lbs, rounded down) the bridge formula allows on a group
/// of `axle_count` axles spanning `length_ft` feet.
///
/// `W = 500 * (L*N/(N-1) + 12*N + 36)`
pub fn bridge_formula_limit(length_ft: f64, axle_count: usize) -> Option<f64> {
    if axle_count < 2 || !length_ft.is_finite() || length_ft < 0.0 {
        return None;
    }
    let n = axle_count as f64;
    let w = 500.0 * (length_ft * n / (n - 1.0) + 12.0 * n + 36.0);
    // snap only float noise around a whole pound, never a real fraction
    let nearest = w.round();
    if (w - nearest).abs() < 1e-9 {
        Some(nearest)
    } else {
        Some(w.floor())
    }
}

/// Evaluator bound to a jurisdiction table
#[derive(Debug, Clone, Copy)]
pub struct ComplianceEvaluator<'a> {
    table: &'a JurisdictionTable,
}

impl<'a> ComplianceEvaluator<'a> {
    pub fn new(table: &'a JurisdictionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a JurisdictionTable {
        self.table
    }

    /// Code whose limits `check_state` applies: the normalized state code
    /// when the table has it, otherwise `"US"`.
    pub fn applied_code(&self, state_code: &str) -> String {
        let code = normalize_code(state_code);
        if code != FEDERAL_CODE && self.table.state(&code).is_some() {
            code
        } else {
            FEDERAL_CODE.to_string()
        }
    }

    pub fn check_federal(&self, config: &VehicleConfig) -> Result<ComplianceResult> {
        evaluate(config, self.table.federal(), FEDERAL_CODE)
    }

    pub fn check_state(&self, config: &VehicleConfig, state_code: &str) -> Result<ComplianceResult> {
        let code = normalize_code(state_code);
        if code == FEDERAL_CODE {
            return self.check_federal(config);
        }
        match self.table.state_limits(&code) {
            Some(limits) => evaluate(config, &limits, &code),
            None => {
                warn!(state_code, "unknown jurisdiction code, applying federal limits");
                self.check_federal(config)
            }
        }
    }
}

/// Evaluate `config` against already-resolved `limits`.
///
/// Fails with `InvalidConfiguration` when the axle arrays are malformed.
pub fn evaluate(
    config: &VehicleConfig,
    limits: &WeightLimits,
    jurisdiction: &str,
) -> Result<ComplianceResult> {
    config.validate()?;

    let weights = &config.axles.axle_weights;
    let spacing = &config.axles.axle_spacing;
    let gross_weight = config.gross_weight();
    let mut violations = Vec::new();

    if gross_weight > limits.gross_weight_cap {
        violations.push(Violation::gross(gross_weight, limits.gross_weight_cap));
    }

    for (index, &weight) in weights.iter().enumerate() {
        if weight > limits.single_axle_cap {
            violations.push(Violation::single_axle(index, weight, limits.single_axle_cap));
        }
    }

    for (first, &gap) in spacing.iter().enumerate() {
        if gap >= limits.tandem_spacing_ft {
            continue;
        }
        let actual = weights[first] + weights[first + 1];
        if actual > limits.tandem_axle_cap {
            violations.push(Violation::tandem(
                AxleGroup::new(first, first + 1),
                actual,
                limits.tandem_axle_cap,
            ));
        }
    }

    if limits.bridge_formula {
        for first in 0..weights.len() {
            for last in (first + 2)..weights.len() {
                let group = AxleGroup::new(first, last);
                let length: f64 = spacing[first..last].iter().sum();
                let Some(limit) = bridge_formula_limit(length, group.axle_count()) else {
                    continue;
                };
                let actual: f64 = weights[first..=last].iter().sum();
                if actual > limit {
                    violations.push(Violation::bridge_formula(group, actual, limit));
                }
            }
        }
    }

    let max_allowed_weight = limits.gross_weight_cap;
    trace!(
        jurisdiction,
        gross_weight,
        violations = violations.len(),
        "evaluated vehicle"
    );

    Ok(ComplianceResult {
        is_compliant: violations.is_empty(),
        jurisdiction: jurisdiction.to_string(),
        gross_weight,
        max_allowed_weight,
        over_weight: (gross_weight - max_allowed_weight).max(0.0),
        violations,
    })
}
