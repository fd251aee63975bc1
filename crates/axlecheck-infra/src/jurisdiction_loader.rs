//! Jurisdiction limit table loader from TOML
//!
//! ```toml
//! [federal]
//! gross_weight_cap = 80000
//!
//! [states.MI]
//! name = "Michigan"
//! gross_weight_cap = 164000
//! bridge_formula = false
//! ```
//!
//! Every federal field is optional and defaults to the federal baseline.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use axlecheck_domain::model::{JurisdictionTable, StateOverride, WeightLimits};
use axlecheck_types::{ConfigError, Error, Result};
use serde::Deserialize;
use tracing::debug;

/// Container for parsing a jurisdictions TOML file
#[derive(Debug, Deserialize)]
struct JurisdictionFile {
    #[serde(default)]
    federal: StateOverride,
    #[serde(default)]
    states: BTreeMap<String, StateOverride>,
}

pub struct JurisdictionLoader;

impl JurisdictionLoader {
    /// Load a jurisdiction table from a TOML file
    pub fn load_from_file(path: &Path) -> Result<JurisdictionTable> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read jurisdictions file {}: {}",
                path.display(),
                e
            )))
        })?;

        let table = Self::load_from_str(&content)?;
        debug!(
            path = %path.display(),
            states = table.state_count(),
            "loaded jurisdiction table"
        );
        Ok(table)
    }

    /// Load a jurisdiction table from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<JurisdictionTable> {
        let file: JurisdictionFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse jurisdictions TOML: {}",
                e
            )))
        })?;

        let federal = file.federal.apply(&WeightLimits::FEDERAL);
        check_limits("federal", &federal)?;

        let mut table = JurisdictionTable::new(federal);
        for (code, state) in file.states {
            check_limits(&code, &state.apply(&federal))?;
            table = table.with_state(&code, state);
        }
        Ok(table)
    }
}

fn check_limits(code: &str, limits: &WeightLimits) -> Result<()> {
    let values = [
        ("gross_weight_cap", limits.gross_weight_cap),
        ("single_axle_cap", limits.single_axle_cap),
        ("tandem_axle_cap", limits.tandem_axle_cap),
        ("tandem_spacing_ft", limits.tandem_spacing_ft),
    ];
    for (field, value) in values {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::Config(ConfigError::ParseError(format!(
                "{}: {} must be a non-negative number, got {}",
                code, field, value
            ))));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_TOML: &str = r#"
[states.mi]
name = "Michigan"
gross_weight_cap = 164000
bridge_formula = false

[states.NY]
single_axle_cap = 22400
tandem_axle_cap = 36000
"#;

    #[test]
    fn test_load_from_str() {
        let table = JurisdictionLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(table.state_count(), 2);
        assert_eq!(*table.federal(), WeightLimits::FEDERAL);
    }

    #[test]
    fn test_codes_are_normalized() {
        let table = JurisdictionLoader::load_from_str(TEST_TOML).unwrap();
        let mi = table.state_limits("MI").unwrap();
        assert_eq!(mi.gross_weight_cap, 164_000.0);
        assert!(!mi.bridge_formula);
        assert_eq!(table.state("MI").unwrap().name.as_deref(), Some("Michigan"));
    }

    #[test]
    fn test_state_inherits_custom_federal() {
        let toml = r#"
[federal]
single_axle_cap = 18000

[states.TX]
gross_weight_cap = 84000
"#;
        let table = JurisdictionLoader::load_from_str(toml).unwrap();
        let tx = table.state_limits("TX").unwrap();
        assert_eq!(tx.single_axle_cap, 18_000.0);
        assert_eq!(tx.gross_weight_cap, 84_000.0);
        assert_eq!(tx.tandem_axle_cap, WeightLimits::FEDERAL.tandem_axle_cap);
    }

    #[test]
    fn test_empty_file_is_federal_only() {
        let table = JurisdictionLoader::load_from_str("").unwrap();
        assert_eq!(table.state_count(), 0);
        assert_eq!(*table.federal(), WeightLimits::FEDERAL);
    }

    #[test]
    fn test_rejects_negative_limit() {
        let toml = "[states.XX]\ngross_weight_cap = -5\n";
        assert!(matches!(
            JurisdictionLoader::load_from_str(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(JurisdictionLoader::load_from_str("[states.XX\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEST_TOML.as_bytes()).unwrap();
        let table = JurisdictionLoader::load_from_file(file.path()).unwrap();
        assert!(table.state_limits("NY").is_some());
    }

    #[test]
    fn test_example_file_matches_builtin() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("data")
            .join("jurisdictions.example.toml");
        let table = JurisdictionLoader::load_from_file(&path).unwrap();
        assert_eq!(table, JurisdictionTable::builtin());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = JurisdictionLoader::load_from_file(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }
}
