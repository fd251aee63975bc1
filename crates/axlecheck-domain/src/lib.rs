//! Domain layer for axle weight compliance
//!
//! Models describe a vehicle's axle layout, the weight limits of a
//! jurisdiction and the verdict produced by the evaluator. Nothing here
//! performs I/O.

pub mod model;
pub mod service;

pub use model::{
    AxleGroup, AxleLayout, ComplianceResult, JurisdictionTable, StateOverride, VehicleConfig,
    Violation, ViolationKind, WeightLimits, FEDERAL_CODE,
};
pub use service::{
    bridge_formula_limit, check_federal_compliance, check_state_compliance,
    generate_compliance_report, ComplianceEvaluator,
};
