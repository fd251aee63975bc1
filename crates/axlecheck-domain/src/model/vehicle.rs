//! Vehicle axle configuration

use axlecheck_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// Axle layout of a vehicle, front to rear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxleLayout {
    pub axle_count: usize,
    /// Distance in feet between axle `i` and axle `i + 1`
    pub axle_spacing: Vec<f64>,
    /// Weight in lbs carried by each axle
    pub axle_weights: Vec<f64>,
}

/// Vehicle configuration submitted for a compliance check
///
/// `gross_weight` and `total_length` may be supplied by the caller but are
/// never used by the evaluator; both are recomputed from the axle layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Category label (e.g. "5-Axle Semi")
    #[serde(rename = "type", default)]
    pub vehicle_type: String,
    pub axles: AxleLayout,
    #[serde(rename = "total_length", default, skip_serializing_if = "Option::is_none")]
    pub declared_total_length: Option<f64>,
    #[serde(rename = "gross_weight", default, skip_serializing_if = "Option::is_none")]
    pub declared_gross_weight: Option<f64>,
}

impl VehicleConfig {
    /// Build a configuration from per-axle weights and spacings.
    pub fn new(vehicle_type: impl Into<String>, axle_weights: Vec<f64>, axle_spacing: Vec<f64>) -> Self {
        Self {
            id: None,
            vehicle_type: vehicle_type.into(),
            axles: AxleLayout {
                axle_count: axle_weights.len(),
                axle_spacing,
                axle_weights,
            },
            declared_total_length: None,
            declared_gross_weight: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sum of all axle weights (lbs)
    pub fn gross_weight(&self) -> f64 {
        self.axles.axle_weights.iter().sum()
    }

    /// Sum of all axle spacings (feet)
    pub fn total_length(&self) -> f64 {
        self.axles.axle_spacing.iter().sum()
    }

    /// Check that the axle arrays describe a real vehicle.
    ///
    /// Zero spacing is accepted (axles at the same point); negative or
    /// non-finite values and mismatched lengths are rejected.
    pub fn validate(&self) -> Result<()> {
        let axles = &self.axles;
        if axles.axle_count < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "at least 2 axles required, got {}",
                axles.axle_count
            )));
        }
        if axles.axle_weights.len() != axles.axle_count {
            return Err(Error::InvalidConfiguration(format!(
                "expected {} axle weights, got {}",
                axles.axle_count,
                axles.axle_weights.len()
            )));
        }
        if axles.axle_spacing.len() != axles.axle_count - 1 {
            return Err(Error::InvalidConfiguration(format!(
                "expected {} axle spacings, got {}",
                axles.axle_count - 1,
                axles.axle_spacing.len()
            )));
        }
        if let Some((index, weight)) = axles
            .axle_weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(Error::InvalidConfiguration(format!(
                "axle {} has invalid weight {}",
                index, weight
            )));
        }
        if let Some((index, gap)) = axles
            .axle_spacing
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite() || **s < 0.0)
        {
            return Err(Error::InvalidConfiguration(format!(
                "spacing {} has invalid length {}",
                index, gap
            )));
        }
        Ok(())
    }
}
