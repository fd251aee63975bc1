//! Compliance verdict types

use serde::{Deserialize, Serialize};

/// Which limit a violation breached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    Gross,
    SingleAxle,
    Tandem,
    BridgeFormula,
}

impl ViolationKind {
    pub fn label(&self) -> &'static str {
        match self {
            ViolationKind::Gross => "Gross weight",
            ViolationKind::SingleAxle => "Single axle",
            ViolationKind::Tandem => "Tandem axle",
            ViolationKind::BridgeFormula => "Bridge formula",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::Gross => write!(f, "gross"),
            ViolationKind::SingleAxle => write!(f, "single-axle"),
            ViolationKind::Tandem => write!(f, "tandem"),
            ViolationKind::BridgeFormula => write!(f, "bridge-formula"),
        }
    }
}

/// Consecutive axles regulated as a unit (0-based, inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxleGroup {
    pub first: usize,
    pub last: usize,
}

impl AxleGroup {
    pub fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    pub fn axle_count(&self) -> usize {
        self.last - self.first + 1
    }
}

impl std::fmt::Display for AxleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "axles {}-{}", self.first + 1, self.last + 1)
    }
}

/// A single breached limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub actual: f64,
    pub limit: f64,
    /// Set only for single-axle violations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axle_index: Option<usize>,
    /// Set only for tandem and bridge-formula violations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axle_group: Option<AxleGroup>,
}

impl Violation {
    pub fn gross(actual: f64, limit: f64) -> Self {
        Self {
            kind: ViolationKind::Gross,
            actual,
            limit,
            axle_index: None,
            axle_group: None,
        }
    }

    pub fn single_axle(axle_index: usize, actual: f64, limit: f64) -> Self {
        Self {
            kind: ViolationKind::SingleAxle,
            actual,
            limit,
            axle_index: Some(axle_index),
            axle_group: None,
        }
    }

    pub fn tandem(group: AxleGroup, actual: f64, limit: f64) -> Self {
        Self {
            kind: ViolationKind::Tandem,
            actual,
            limit,
            axle_index: None,
            axle_group: Some(group),
        }
    }

    pub fn bridge_formula(group: AxleGroup, actual: f64, limit: f64) -> Self {
        Self {
            kind: ViolationKind::BridgeFormula,
            actual,
            limit,
            axle_index: None,
            axle_group: Some(group),
        }
    }

    /// Pounds over the limit
    pub fn excess(&self) -> f64 {
        self.actual - self.limit
    }

    /// Where on the vehicle the violation occurred, for display
    pub fn location(&self) -> String {
        match (self.axle_index, self.axle_group) {
            (Some(index), _) => format!("axle {}", index + 1),
            (None, Some(group)) => group.to_string(),
            (None, None) => "vehicle".to_string(),
        }
    }
}

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub is_compliant: bool,
    /// Jurisdiction code whose limits were applied
    pub jurisdiction: String,
    /// Recomputed from axle weights
    pub gross_weight: f64,
    pub max_allowed_weight: f64,
    pub over_weight: f64,
    pub violations: Vec<Violation>,
}

impl ComplianceResult {
    pub fn violations_of(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_json_shape() {
        let json = serde_json::to_value(Violation::single_axle(2, 20_001.0, 20_000.0)).unwrap();
        assert_eq!(json["type"], "single-axle");
        assert_eq!(json["axle_index"], 2);
        assert!(json.get("axle_group").is_none());

        let json = serde_json::to_value(Violation::gross(80_001.0, 80_000.0)).unwrap();
        assert_eq!(json["type"], "gross");
        assert!(json.get("axle_index").is_none());
    }

    #[test]
    fn test_location() {
        assert_eq!(Violation::single_axle(0, 1.0, 0.0).location(), "axle 1");
        assert_eq!(
            Violation::tandem(AxleGroup::new(1, 2), 1.0, 0.0).location(),
            "axles 2-3"
        );
        assert_eq!(Violation::gross(1.0, 0.0).location(), "vehicle");
    }

    #[test]
    fn test_group_axle_count() {
        assert_eq!(AxleGroup::new(0, 4).axle_count(), 5);
    }
}
