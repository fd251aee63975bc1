//! Compliance use cases: table selection and batch evaluation

use axlecheck_domain::model::{
    normalize_code, ComplianceResult, JurisdictionTable, VehicleConfig, FEDERAL_CODE,
};
use axlecheck_domain::ComplianceEvaluator;
use axlecheck_infra::JurisdictionLoader;
use axlecheck_types::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;

/// Jurisdiction table selected by the config: the TOML file when one is
/// configured, otherwise the compiled-in table.
pub fn load_jurisdictions(config: &Config) -> Result<JurisdictionTable> {
    match &config.jurisdictions_file {
        Some(path) => {
            info!(path = %path.display(), "using jurisdiction table from file");
            JurisdictionLoader::load_from_file(path)
        }
        None => Ok(JurisdictionTable::builtin()),
    }
}

/// Check one vehicle against `jurisdiction`, or federal limits when `None`.
pub fn check_vehicle(
    evaluator: &ComplianceEvaluator<'_>,
    config: &VehicleConfig,
    jurisdiction: Option<&str>,
) -> Result<ComplianceResult> {
    match jurisdiction {
        Some(code) => evaluator.check_state(config, code),
        None => evaluator.check_federal(config),
    }
}

/// Result for one vehicle of a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub axle_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ComplianceResult>,
    /// Set when the vehicle could not be evaluated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Results of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub evaluated_at: DateTime<Utc>,
    /// Code whose limits were applied (`"US"` when the request was unknown)
    pub jurisdiction: String,
    /// Normalized code as requested
    pub requested_jurisdiction: String,
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn compliant(&self) -> usize {
        self.results().filter(|(_, r)| r.is_compliant).count()
    }

    pub fn non_compliant(&self) -> usize {
        self.results().filter(|(_, r)| !r.is_compliant).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_none()).count()
    }

    /// Evaluated entries with their vehicle id
    pub fn results(&self) -> impl Iterator<Item = (&str, &ComplianceResult)> {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().map(|r| (e.vehicle_id.as_str(), r)))
    }

    /// Evaluated entries in the shape the text report expects
    pub fn labelled_results(&self) -> Vec<(String, ComplianceResult)> {
        self.results()
            .map(|(id, r)| (id.to_string(), r.clone()))
            .collect()
    }
}

/// Evaluate every vehicle. A vehicle that fails validation is recorded as a
/// failed entry; the remaining vehicles are still evaluated.
pub fn evaluate_batch(
    evaluator: &ComplianceEvaluator<'_>,
    vehicles: &[VehicleConfig],
    jurisdiction: Option<&str>,
) -> BatchReport {
    let evaluated_at = Utc::now();
    let entries: Vec<BatchEntry> = vehicles
        .iter()
        .enumerate()
        .map(|(index, vehicle)| {
            let vehicle_id = vehicle
                .id
                .clone()
                .unwrap_or_else(|| format!("#{}", index + 1));
            let (result, error) = match check_vehicle(evaluator, vehicle, jurisdiction) {
                Ok(result) => (Some(result), None),
                Err(e) => {
                    warn!(vehicle = %vehicle_id, error = %e, "vehicle skipped");
                    (None, Some(e.to_string()))
                }
            };
            BatchEntry {
                vehicle_id,
                vehicle_type: vehicle.vehicle_type.clone(),
                axle_count: vehicle.axles.axle_count,
                result,
                error,
            }
        })
        .collect();

    let requested_jurisdiction = jurisdiction
        .map(normalize_code)
        .unwrap_or_else(|| FEDERAL_CODE.to_string());
    let report = BatchReport {
        evaluated_at,
        jurisdiction: evaluator.applied_code(&requested_jurisdiction),
        requested_jurisdiction,
        entries,
    };
    info!(
        total = report.total(),
        non_compliant = report.non_compliant(),
        failed = report.failed(),
        "batch evaluated"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fleet() -> Vec<VehicleConfig> {
        vec![
            VehicleConfig::new("5-Axle Semi", vec![16_000.0; 5], vec![12.0, 4.5, 33.0, 4.5]).with_id("T-1"),
            VehicleConfig::new("broken", vec![16_000.0; 3], vec![12.0]).with_id("T-2"),
            VehicleConfig::new("2-Axle", vec![10_000.0, 22_000.0], vec![14.0]),
        ]
    }

    #[test]
    fn test_batch_isolates_invalid_vehicle() {
        let table = JurisdictionTable::builtin();
        let evaluator = ComplianceEvaluator::new(&table);
        let report = evaluate_batch(&evaluator, &fleet(), None);

        assert_eq!(report.total(), 3);
        assert_eq!(report.compliant(), 1);
        assert_eq!(report.non_compliant(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.jurisdiction, FEDERAL_CODE);

        let broken = &report.entries[1];
        assert!(broken.result.is_none());
        assert!(broken.error.as_deref().unwrap().contains("Invalid vehicle configuration"));
    }

    #[test]
    fn test_batch_generates_missing_ids() {
        let table = JurisdictionTable::builtin();
        let evaluator = ComplianceEvaluator::new(&table);
        let report = evaluate_batch(&evaluator, &fleet(), Some("ny"));
        assert_eq!(report.entries[2].vehicle_id, "#3");
        assert_eq!(report.jurisdiction, "NY");
        assert_eq!(report.requested_jurisdiction, "NY");
        // 22,000 lbs is legal under the NY single axle cap
        assert_eq!(report.non_compliant(), 0);
    }

    #[test]
    fn test_batch_unknown_jurisdiction_reports_federal() {
        let table = JurisdictionTable::builtin();
        let evaluator = ComplianceEvaluator::new(&table);
        let report = evaluate_batch(&evaluator, &fleet(), Some("zz"));
        assert_eq!(report.requested_jurisdiction, "ZZ");
        assert_eq!(report.jurisdiction, FEDERAL_CODE);
        for (_, result) in report.results() {
            assert_eq!(result.jurisdiction, report.jurisdiction);
        }
    }

    #[test]
    fn test_labelled_results_skip_failures() {
        let table = JurisdictionTable::builtin();
        let evaluator = ComplianceEvaluator::new(&table);
        let report = evaluate_batch(&evaluator, &fleet(), None);
        let labels: Vec<String> = report.labelled_results().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["T-1".to_string(), "#3".to_string()]);
    }

    #[test]
    fn test_load_jurisdictions_builtin() {
        let table = load_jurisdictions(&Config::default()).unwrap();
        assert_eq!(table, JurisdictionTable::builtin());
    }

    #[test]
    fn test_load_jurisdictions_missing_file() {
        let config = Config {
            jurisdictions_file: Some(PathBuf::from("/nonexistent/axlecheck/states.toml")),
            ..Config::default()
        };
        assert!(load_jurisdictions(&config).is_err());
    }
}
