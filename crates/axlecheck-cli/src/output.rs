//! Output formatting module

use axlecheck_domain::model::{ComplianceResult, JurisdictionTable, StateOverride, WeightLimits};
use axlecheck_types::{OutputFormat, Result};
use serde::Serialize;

pub fn output_result(output_format: OutputFormat, label: &str, result: &ComplianceResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("\nCompliance Result: {}", label);
    println!("===================");
    println!("Jurisdiction:    {}", result.jurisdiction);
    println!("Gross weight:    {:.0} lbs", result.gross_weight);
    println!("Max allowed:     {:.0} lbs", result.max_allowed_weight);
    if result.over_weight > 0.0 {
        println!("Over by:         {:.0} lbs", result.over_weight);
    }
    println!(
        "Status:          {}",
        if result.is_compliant { "COMPLIANT" } else { "NOT COMPLIANT" }
    );

    if !result.violations.is_empty() {
        println!("\nViolations:");
        for v in &result.violations {
            println!(
                "  ✗ {:<15} {:<12} {:>8.0} lbs > {:>8.0} lbs ({:+.0})",
                v.kind.label(),
                v.location(),
                v.actual,
                v.limit,
                v.excess()
            );
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct LimitsRow<'a> {
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    limits: WeightLimits,
}

fn limits_row<'a>(code: &'a str, state: Option<&'a StateOverride>, limits: WeightLimits) -> LimitsRow<'a> {
    LimitsRow {
        code,
        name: state.and_then(|s| s.name.as_deref()),
        limits,
    }
}

/// Print the federal row followed by every state, or a single state when
/// `only` is set.
pub fn output_limits(
    output_format: OutputFormat,
    table: &JurisdictionTable,
    only: Option<(&str, WeightLimits)>,
) -> Result<()> {
    let rows: Vec<LimitsRow<'_>> = match only {
        Some((code, limits)) => vec![limits_row(code, table.state(code), limits)],
        None => std::iter::once(LimitsRow {
            code: axlecheck_domain::FEDERAL_CODE,
            name: Some("Federal"),
            limits: *table.federal(),
        })
        .chain(table.states().map(|(code, state)| {
            limits_row(code, Some(state), state.apply(table.federal()))
        }))
        .collect(),
    };

    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<5} {:<14} {:>10} {:>10} {:>10} {:>8} {:>7}",
        "Code", "Name", "Gross", "Single", "Tandem", "Tandem<", "Bridge"
    );
    println!("{}", "-".repeat(70));
    for row in rows {
        println!(
            "{:<5} {:<14} {:>10.0} {:>10.0} {:>10.0} {:>6.1}ft {:>7}",
            row.code,
            row.name.unwrap_or("-"),
            row.limits.gross_weight_cap,
            row.limits.single_axle_cap,
            row.limits.tandem_axle_cap,
            row.limits.tandem_spacing_ft,
            if row.limits.bridge_formula { "yes" } else { "no" }
        );
    }
    Ok(())
}
