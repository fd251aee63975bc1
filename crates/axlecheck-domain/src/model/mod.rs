//! Domain model types

pub mod compliance;
pub mod limits;
pub mod vehicle;

pub use compliance::{AxleGroup, ComplianceResult, Violation, ViolationKind};
pub use limits::{normalize_code, JurisdictionTable, StateOverride, WeightLimits, FEDERAL_CODE};
pub use vehicle::{AxleLayout, VehicleConfig};
