//! Vehicle configuration loaders (CSV and JSON)

use std::io::Read;
use std::path::Path;

use axlecheck_domain::model::VehicleConfig;
use axlecheck_types::{Error, Result};
use serde::Deserialize;
use tracing::debug;

/// One CSV row: `id,type,axle_weights,axle_spacing`
///
/// List columns hold `;`-separated numbers, e.g. `12000;17000;17000`.
#[derive(Debug, Deserialize)]
struct VehicleRecord {
    id: String,
    #[serde(rename = "type", default)]
    vehicle_type: String,
    axle_weights: String,
    axle_spacing: String,
}

/// Load vehicles from a file, picking the format from its extension
/// (`.json` is JSON, anything else is CSV).
pub fn load_vehicles(path: &Path) -> Result<Vec<VehicleConfig>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        load_vehicles_from_json(path)
    } else {
        load_vehicles_from_csv(path)
    }
}

/// Load vehicles from a CSV file with a header row
pub fn load_vehicles_from_csv(path: &Path) -> Result<Vec<VehicleConfig>> {
    let file = std::fs::File::open(path)?;
    let vehicles = read_vehicles_csv(file)?;
    debug!(path = %path.display(), count = vehicles.len(), "loaded vehicles from CSV");
    Ok(vehicles)
}

/// Load vehicles from a JSON array of vehicle configurations
pub fn load_vehicles_from_json(path: &Path) -> Result<Vec<VehicleConfig>> {
    let content = std::fs::read_to_string(path)?;
    let vehicles: Vec<VehicleConfig> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = vehicles.len(), "loaded vehicles from JSON");
    Ok(vehicles)
}

fn read_vehicles_csv<R: Read>(reader: R) -> Result<Vec<VehicleConfig>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut vehicles = Vec::new();
    for (index, record) in rdr.deserialize::<VehicleRecord>().enumerate() {
        // header is line 1
        let line = index + 2;
        let record = record?;
        let axle_weights = parse_list(&record.axle_weights)
            .map_err(|e| Error::VehicleFile(format!("line {}: axle_weights: {}", line, e)))?;
        let axle_spacing = parse_list(&record.axle_spacing)
            .map_err(|e| Error::VehicleFile(format!("line {}: axle_spacing: {}", line, e)))?;
        vehicles.push(VehicleConfig::new(record.vehicle_type, axle_weights, axle_spacing).with_id(record.id));
    }
    Ok(vehicles)
}

/// Parse a `;`-separated list. One trailing `;` is tolerated; any other
/// empty item is an error so a blank cell never shifts the axle layout.
fn parse_list(s: &str) -> std::result::Result<Vec<f64>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    let s = s.strip_suffix(';').unwrap_or(s);
    s.split(';')
        .map(str::trim)
        .enumerate()
        .map(|(index, part)| {
            if part.is_empty() {
                return Err(format!("item {} is empty", index + 1));
            }
            part.parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", part))
        })
        .collect()
}
