use crate::structs::audit::audit_report::AuditReport;

pub struct AuditLogger {}

impl AuditLogger {

    pub fn render_table(report: &AuditReport) -> String {
        let width = report
            .results
            .iter()
            .map(|r| r.check_name.len())
            .max()
            .unwrap_or(0)
            .max("check".len());

        let mut out = String::new();
        out.push_str(&format!("{:<width$}  {:>10}  {:<6}  {}\n", "check", "measured", "status", "expects"));
        out.push_str(&format!("{}\n", "━".repeat(width + 32)));
        for result in &report.results {
            out.push_str(&format!(
                "{:<width$}  {:>10}  {:<6}  {}\n",
                result.check_name, result.measured, result.status.label(), result.threshold
            ));
        }

        out.push('\n');
        if report.drift.is_empty() {
            out.push_str("Policy drift: none\n");
        } else {
            out.push_str(&format!("Policy drift: {} policies still read token claims\n", report.drift.len()));
            for drift in &report.drift {
                out.push_str(&format!("  - {}.{} ({})\n", drift.table_name, drift.policy_name, drift.command));
            }
        }
        out
    }

    pub fn print_report(report: &AuditReport) {
        println!("\n📊 Policy audit ({})", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
        print!("{}", Self::render_table(report));

        if report.is_clean() {
            println!("✅ {} checks passed, no drift", report.passed_count());
        } else {
            println!(
                "❌ {} of {} checks failed, {} drifted policies",
                report.failed_count(),
                report.results.len(),
                report.drift.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::enums::check_status::CheckStatus;
    use crate::enums::threshold::Threshold;
    use crate::structs::audit::check_result::CheckResult;
    use crate::structs::audit::policy_drift::PolicyDrift;

    #[test]
    fn table_lists_results_and_drift() {
        let report = AuditReport {
            generated_at: Utc::now(),
            results: vec![CheckResult {
                check_name: "customer_visibility".to_string(),
                measured: 1,
                threshold: Threshold::GreaterThan(1),
                status: CheckStatus::Fail,
            }],
            drift: vec![PolicyDrift {
                table_name: "shipment".to_string(),
                policy_name: "admins read all".to_string(),
                command: "SELECT".to_string(),
            }],
        };

        let table = AuditLogger::render_table(&report);
        assert!(table.contains("customer_visibility"));
        assert!(table.contains("FAIL"));
        assert!(table.contains("> 1"));
        assert!(table.contains("shipment.admins read all (SELECT)"));
    }
}
