//! Domain services

pub mod compliance_evaluator;
pub mod report;

pub use compliance_evaluator::{
    bridge_formula_limit, check_federal_compliance, check_state_compliance, evaluate,
    ComplianceEvaluator,
};
pub use report::generate_compliance_report;
