//! Jurisdiction weight limits
//!
//! The federal regime sets the baseline. A state entry overrides only the
//! dimensions it names; everything else resolves to the federal value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Code reported for results evaluated under federal limits
pub const FEDERAL_CODE: &str = "US";

/// Resolved limits for a single evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightLimits {
    /// Gross vehicle weight cap (lbs)
    pub gross_weight_cap: f64,
    /// Cap for any single axle (lbs)
    pub single_axle_cap: f64,
    /// Cap for a tandem pair (lbs)
    pub tandem_axle_cap: f64,
    /// Consecutive axles closer than this (feet) form a tandem
    pub tandem_spacing_ft: f64,
    /// Whether bridge formula group caps apply
    pub bridge_formula: bool,
}

impl WeightLimits {
    pub const FEDERAL: WeightLimits = WeightLimits {
        gross_weight_cap: 80_000.0,
        single_axle_cap: 20_000.0,
        tandem_axle_cap: 34_000.0,
        tandem_spacing_ft: 8.0,
        bridge_formula: true,
    };
}

impl Default for WeightLimits {
    fn default() -> Self {
        Self::FEDERAL
    }
}

/// Partial limits for one state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_weight_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_axle_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tandem_axle_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tandem_spacing_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_formula: Option<bool>,
}

impl StateOverride {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Overlay this state's values on top of `base`.
    pub fn apply(&self, base: &WeightLimits) -> WeightLimits {
        WeightLimits {
            gross_weight_cap: self.gross_weight_cap.unwrap_or(base.gross_weight_cap),
            single_axle_cap: self.single_axle_cap.unwrap_or(base.single_axle_cap),
            tandem_axle_cap: self.tandem_axle_cap.unwrap_or(base.tandem_axle_cap),
            tandem_spacing_ft: self.tandem_spacing_ft.unwrap_or(base.tandem_spacing_ft),
            bridge_formula: self.bridge_formula.unwrap_or(base.bridge_formula),
        }
    }
}

/// Normalize a jurisdiction code for lookup (`" mi "` -> `"MI"`)
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Read-only reference table of federal and state limits
#[derive(Debug, Clone, PartialEq)]
pub struct JurisdictionTable {
    federal: WeightLimits,
    states: BTreeMap<String, StateOverride>,
}

impl Default for JurisdictionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl JurisdictionTable {
    /// Table with the given federal limits and no state entries
    pub fn new(federal: WeightLimits) -> Self {
        Self {
            federal,
            states: BTreeMap::new(),
        }
    }

    /// Compiled-in reference table.
    ///
    /// State values are a sample of commonly published interstate limits and
    /// should be replaced with a TOML table for enforcement use.
    pub fn builtin() -> Self {
        Self::new(WeightLimits::FEDERAL)
            .with_state(
                "CT",
                StateOverride {
                    single_axle_cap: Some(22_400.0),
                    tandem_axle_cap: Some(36_000.0),
                    ..StateOverride::named("Connecticut")
                },
            )
            .with_state(
                "ID",
                StateOverride {
                    gross_weight_cap: Some(105_500.0),
                    ..StateOverride::named("Idaho")
                },
            )
            .with_state(
                "MI",
                StateOverride {
                    gross_weight_cap: Some(164_000.0),
                    bridge_formula: Some(false),
                    ..StateOverride::named("Michigan")
                },
            )
            .with_state(
                "NY",
                StateOverride {
                    single_axle_cap: Some(22_400.0),
                    tandem_axle_cap: Some(36_000.0),
                    ..StateOverride::named("New York")
                },
            )
            .with_state(
                "OR",
                StateOverride {
                    gross_weight_cap: Some(105_500.0),
                    ..StateOverride::named("Oregon")
                },
            )
            .with_state(
                "WY",
                StateOverride {
                    gross_weight_cap: Some(117_000.0),
                    ..StateOverride::named("Wyoming")
                },
            )
    }

    pub fn with_state(mut self, code: &str, state: StateOverride) -> Self {
        self.states.insert(normalize_code(code), state);
        self
    }

    pub fn federal(&self) -> &WeightLimits {
        &self.federal
    }

    /// Resolved limits for a state, or `None` if the code is not in the table
    pub fn state_limits(&self, code: &str) -> Option<WeightLimits> {
        self.states
            .get(&normalize_code(code))
            .map(|state| state.apply(&self.federal))
    }

    pub fn state(&self, code: &str) -> Option<&StateOverride> {
        self.states.get(&normalize_code(code))
    }

    /// State entries ordered by code
    pub fn states(&self) -> impl Iterator<Item = (&str, &StateOverride)> {
        self.states.iter().map(|(code, state)| (code.as_str(), state))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_falls_back_per_dimension() {
        let table = JurisdictionTable::builtin();
        let ny = table.state_limits("NY").unwrap();
        assert_eq!(ny.single_axle_cap, 22_400.0);
        assert_eq!(ny.tandem_axle_cap, 36_000.0);
        assert_eq!(ny.gross_weight_cap, WeightLimits::FEDERAL.gross_weight_cap);
        assert!(ny.bridge_formula);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = JurisdictionTable::builtin();
        assert_eq!(table.state_limits(" mi "), table.state_limits("MI"));
        assert!(!table.state_limits("mi").unwrap().bridge_formula);
    }

    #[test]
    fn test_unknown_state() {
        let table = JurisdictionTable::builtin();
        assert!(table.state_limits("ZZ").is_none());
        assert!(table.state("ZZ").is_none());
    }

    #[test]
    fn test_states_sorted_by_code() {
        let table = JurisdictionTable::builtin();
        let codes: Vec<&str> = table.states().map(|(code, _)| code).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        assert_eq!(table.state_count(), codes.len());
    }
}
