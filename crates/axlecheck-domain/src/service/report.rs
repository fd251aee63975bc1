//! Plain-text compliance report

use crate::model::ComplianceResult;

/// Render a summary of labelled results followed by the violations of each
/// non-compliant vehicle.
pub fn generate_compliance_report(results: &[(String, ComplianceResult)]) -> String {
    let total = results.len();
    let failing: Vec<&(String, ComplianceResult)> =
        results.iter().filter(|(_, r)| !r.is_compliant).collect();
    let compliant_count = total - failing.len();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("            Axle Weight Compliance Report          \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Vehicles checked:   {}\n", total));
    report.push_str(&format!("  Compliant:          {}\n", compliant_count));
    report.push_str(&format!("  Non-compliant:      {}\n", failing.len()));
    if total > 0 {
        let rate = (compliant_count as f64 / total as f64) * 100.0;
        report.push_str(&format!("  Compliance rate:    {:.1}%\n", rate));
    }
    report.push('\n');

    if failing.is_empty() {
        report.push_str("[No Violations]\n");
        report.push_str("  All vehicles are within weight limits.\n\n");
    } else {
        report.push_str("[Violations]\n");
        for (label, result) in failing {
            report.push_str("-".repeat(70).as_str());
            report.push('\n');
            report.push_str(&format!(
                "{} ({})  gross {:.0} lbs / max {:.0} lbs",
                truncate_str(label, 24),
                result.jurisdiction,
                result.gross_weight,
                result.max_allowed_weight
            ));
            if result.over_weight > 0.0 {
                report.push_str(&format!("  over by {:.0} lbs", result.over_weight));
            }
            report.push('\n');
            report.push_str(&format!(
                "  {:<16} {:<12} {:>10} {:>10} {:>9}\n",
                "Type", "Location", "Actual", "Limit", "Excess"
            ));
            for v in &result.violations {
                report.push_str(&format!(
                    "  {:<16} {:<12} {:>10.0} {:>10.0} {:>+9.0}\n",
                    v.kind.label(),
                    v.location(),
                    v.actual,
                    v.limit,
                    v.excess()
                ));
            }
        }
        report.push_str("-".repeat(70).as_str());
        report.push_str("\n\n");
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VehicleConfig;
    use crate::service::check_federal_compliance;

    fn labelled(label: &str, weights: Vec<f64>, spacing: Vec<f64>) -> (String, ComplianceResult) {
        let config = VehicleConfig::new("test", weights, spacing);
        (label.to_string(), check_federal_compliance(&config).unwrap())
    }

    #[test]
    fn test_report_all_compliant() {
        let results = vec![labelled("T-100", vec![10_000.0, 15_000.0], vec![14.0])];
        let report = generate_compliance_report(&results);
        assert!(report.contains("Vehicles checked:   1"));
        assert!(report.contains("Compliance rate:    100.0%"));
        assert!(report.contains("All vehicles are within weight limits."));
    }

    #[test]
    fn test_report_lists_violations() {
        let results = vec![
            labelled("T-100", vec![10_000.0, 15_000.0], vec![14.0]),
            labelled("T-200", vec![10_000.0, 21_000.0], vec![14.0]),
        ];
        let report = generate_compliance_report(&results);
        assert!(report.contains("Non-compliant:      1"));
        assert!(report.contains("T-200 (US)"));
        assert!(report.contains("Single axle"));
        assert!(report.contains("axle 2"));
        assert!(!report.contains("T-100 (US)"));
    }

    #[test]
    fn test_report_empty() {
        let report = generate_compliance_report(&[]);
        assert!(report.contains("Vehicles checked:   0"));
        assert!(!report.contains("Compliance rate"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("abc", 5), "abc");
        assert_eq!(truncate_str("abcdefgh", 5), "abc..");
    }
}
