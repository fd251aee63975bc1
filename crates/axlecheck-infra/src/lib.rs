//! Infrastructure layer - file loaders for jurisdiction tables and vehicles

pub mod jurisdiction_loader;
pub mod vehicle_loader;

pub use jurisdiction_loader::JurisdictionLoader;
pub use vehicle_loader::{load_vehicles, load_vehicles_from_csv, load_vehicles_from_json};
