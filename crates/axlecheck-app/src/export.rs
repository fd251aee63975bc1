//! Excel export of batch results

use axlecheck_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

use crate::service::BatchReport;

fn excel(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a batch report to an Excel file (Summary and Details sheets)
pub fn export_to_excel(report: &BatchReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, report)?;

    workbook.save(output_path).map_err(excel)?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &BatchReport) -> Result<()> {
    sheet.set_name("Summary").map_err(excel)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Axle Weight Compliance Report", &header_format)
        .map_err(excel)?;

    let rows: [(&str, String); 3] = [
        ("Evaluated At:", report.evaluated_at.to_rfc3339()),
        ("Jurisdiction:", report.jurisdiction.clone()),
        ("Requested:", report.requested_jurisdiction.clone()),
    ];
    for (offset, (label, value)) in rows.iter().enumerate() {
        let row = 2 + offset as u32;
        sheet.write_string(row, 0, *label).map_err(excel)?;
        sheet.write_string(row, 1, value).map_err(excel)?;
    }

    let counts = [
        ("Vehicles:", report.total()),
        ("Compliant:", report.compliant()),
        ("Non-compliant:", report.non_compliant()),
        ("Failed:", report.failed()),
    ];
    for (offset, (label, count)) in counts.iter().enumerate() {
        let row = 5 + offset as u32;
        sheet.write_string(row, 0, *label).map_err(excel)?;
        sheet.write_number(row, 1, *count as f64).map_err(excel)?;
    }

    sheet.set_column_width(0, 20).map_err(excel)?;
    sheet.set_column_width(1, 30).map_err(excel)?;

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, report: &BatchReport) -> Result<()> {
    sheet.set_name("Details").map_err(excel)?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Vehicle",
        "Type",
        "Axles",
        "Jurisdiction",
        "Gross (lbs)",
        "Max Allowed (lbs)",
        "Over (lbs)",
        "Compliant",
        "Violations",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel)?;
    }

    for (row_idx, entry) in report.entries.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        sheet.write_string(row, 0, &entry.vehicle_id).map_err(excel)?;
        sheet.write_string(row, 1, &entry.vehicle_type).map_err(excel)?;
        sheet
            .write_number(row, 2, entry.axle_count as f64)
            .map_err(excel)?;

        match (&entry.result, &entry.error) {
            (Some(result), _) => {
                sheet.write_string(row, 3, &result.jurisdiction).map_err(excel)?;
                sheet.write_number(row, 4, result.gross_weight).map_err(excel)?;
                sheet
                    .write_number(row, 5, result.max_allowed_weight)
                    .map_err(excel)?;
                sheet.write_number(row, 6, result.over_weight).map_err(excel)?;
                sheet
                    .write_string(row, 7, if result.is_compliant { "Yes" } else { "No" })
                    .map_err(excel)?;

                let violations: Vec<String> = result
                    .violations
                    .iter()
                    .map(|v| format!("{} @ {}: {:.0} > {:.0}", v.kind, v.location(), v.actual, v.limit))
                    .collect();
                sheet
                    .write_string(row, 8, violations.join("; "))
                    .map_err(excel)?;
            }
            (None, error) => {
                sheet.write_string(row, 7, "Error").map_err(excel)?;
                sheet
                    .write_string(row, 8, error.as_deref().unwrap_or("not evaluated"))
                    .map_err(excel)?;
            }
        }
    }

    sheet.set_column_width(0, 16).map_err(excel)?;
    sheet.set_column_width(1, 18).map_err(excel)?;
    sheet.set_column_width(8, 60).map_err(excel)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::evaluate_batch;
    use axlecheck_domain::model::{JurisdictionTable, VehicleConfig};
    use axlecheck_domain::ComplianceEvaluator;

    #[test]
    fn test_export_writes_workbook() {
        let table = JurisdictionTable::builtin();
        let evaluator = ComplianceEvaluator::new(&table);
        let vehicles = vec![
            VehicleConfig::new("5-Axle Semi", vec![16_000.0; 5], vec![12.0, 4.5, 33.0, 4.5]),
            VehicleConfig::new("2-Axle", vec![10_000.0, 22_000.0], vec![14.0]),
            VehicleConfig::new("broken", vec![10_000.0], vec![]),
        ];
        let report = evaluate_batch(&evaluator, &vehicles, None);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        export_to_excel(&report, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
