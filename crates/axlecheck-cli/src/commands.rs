//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_limits, output_result};
use axlecheck_app::config::Config;
use axlecheck_app::export::export_to_excel;
use axlecheck_app::logging::init_logging;
use axlecheck_app::service::{check_vehicle, evaluate_batch, load_jurisdictions};
use axlecheck_domain::model::{normalize_code, VehicleConfig, FEDERAL_CODE};
use axlecheck_domain::{bridge_formula_limit, generate_compliance_report, ComplianceEvaluator};
use axlecheck_infra::load_vehicles;
use axlecheck_types::{Error, OutputFormat, Result};
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    init_logging(if cli.verbose { "debug" } else { config.log_level.as_str() });
    debug!(?config, "configuration loaded");

    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Check {
            weights,
            spacing,
            state,
            vehicle_type,
        } => {
            let jurisdiction = state.or_else(|| config.default_jurisdiction.clone());
            cmd_check(&config, weights, spacing, jurisdiction, vehicle_type, output_format)
        }

        Commands::Batch { file, state, output } => {
            let jurisdiction = state.or_else(|| config.default_jurisdiction.clone());
            cmd_batch(&config, file, jurisdiction, output, output_format)
        }

        Commands::Limits { state } => cmd_limits(&config, state, output_format),

        Commands::Bridge { length, axles } => cmd_bridge(length, axles, output_format),

        Commands::Config {
            show,
            set_jurisdiction,
            clear_jurisdiction,
            set_jurisdictions_file,
            clear_jurisdictions_file,
            set_output,
            set_log_level,
            reset,
        } => cmd_config(
            config,
            show,
            set_jurisdiction,
            clear_jurisdiction,
            set_jurisdictions_file,
            clear_jurisdictions_file,
            set_output,
            set_log_level,
            reset,
        ),
    }
}

fn cmd_check(
    config: &Config,
    weights: Vec<f64>,
    spacing: Vec<f64>,
    jurisdiction: Option<String>,
    vehicle_type: String,
    output_format: OutputFormat,
) -> Result<()> {
    let table = load_jurisdictions(config)?;
    let evaluator = ComplianceEvaluator::new(&table);
    let vehicle = VehicleConfig::new(vehicle_type, weights, spacing);

    let result = check_vehicle(&evaluator, &vehicle, jurisdiction.as_deref())?;
    output_result(output_format, &vehicle.vehicle_type, &result)
}

fn cmd_batch(
    config: &Config,
    file: PathBuf,
    jurisdiction: Option<String>,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let table = load_jurisdictions(config)?;
    let evaluator = ComplianceEvaluator::new(&table);

    let vehicles = load_vehicles(&file)?;
    eprintln!("Loaded {} vehicles from {}", vehicles.len(), file.display());

    let report = evaluate_batch(&evaluator, &vehicles, jurisdiction.as_deref());

    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => {
            println!("{}", generate_compliance_report(&report.labelled_results()));
            for entry in report.entries.iter().filter(|e| e.result.is_none()) {
                println!(
                    "Skipped {}: {}",
                    entry.vehicle_id,
                    entry.error.as_deref().unwrap_or("not evaluated")
                );
            }
        }
    }

    if let Some(path) = output {
        export_to_excel(&report, &path)?;
        eprintln!("Exported to: {}", path.display());
    }

    if report.non_compliant() > 0 {
        eprintln!("\nWarning: {} vehicle(s) not compliant", report.non_compliant());
    }

    Ok(())
}

fn cmd_limits(config: &Config, state: Option<String>, output_format: OutputFormat) -> Result<()> {
    let table = load_jurisdictions(config)?;

    let Some(state) = state else {
        return output_limits(output_format, &table, None);
    };

    let code = normalize_code(&state);
    let (code, limits) = match table.state_limits(&code) {
        Some(limits) => (code, limits),
        None => {
            if code != FEDERAL_CODE {
                eprintln!("Unknown state '{}', showing federal limits", state);
            }
            (FEDERAL_CODE.to_string(), *table.federal())
        }
    };
    output_limits(output_format, &table, Some((code.as_str(), limits)))
}

fn cmd_bridge(length: f64, axles: usize, output_format: OutputFormat) -> Result<()> {
    let limit = bridge_formula_limit(length, axles).ok_or_else(|| {
        Error::InvalidConfiguration(format!(
            "bridge formula needs at least 2 axles and a non-negative length (got {} axles, {} ft)",
            axles, length
        ))
    })?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "length_ft": length,
                "axle_count": axles,
                "max_weight": limit,
            }))?
        ),
        OutputFormat::Table => {
            println!("Axles:           {}", axles);
            println!("Length:          {:.1} ft", length);
            println!("Max group weight: {:.0} lbs", limit);
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    mut config: Config,
    show: bool,
    set_jurisdiction: Option<String>,
    clear_jurisdiction: bool,
    set_jurisdictions_file: Option<PathBuf>,
    clear_jurisdictions_file: bool,
    set_output: Option<OutputFormat>,
    set_log_level: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut modified = false;

    if let Some(code) = set_jurisdiction {
        config.default_jurisdiction = Some(normalize_code(&code));
        modified = true;
    }

    if clear_jurisdiction {
        config.default_jurisdiction = None;
        modified = true;
    }

    if let Some(path) = set_jurisdictions_file {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        config.jurisdictions_file = Some(path);
        modified = true;
    }

    if clear_jurisdictions_file {
        config.jurisdictions_file = None;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(level) = set_log_level {
        config.log_level = level;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
