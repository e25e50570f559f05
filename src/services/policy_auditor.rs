use chrono::Utc;
use crate::errors::{ReportOpsError, ReportOpsResult};
use crate::services::check_catalog::{DEFAULT_CHECKS, POLICY_DRIFT_SQL};
use crate::structs::audit::audit_report::AuditReport;
use crate::structs::audit::check_result::CheckResult;
use crate::structs::audit::diagnostic_check::DiagnosticCheck;
use crate::traits::diagnostic_executor::DiagnosticExecutor;

pub struct PolicyAuditor {
    checks: Vec<DiagnosticCheck>,
}

impl PolicyAuditor {

    pub const fn new(checks: Vec<DiagnosticCheck>) -> Self {
        Self { checks }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(DEFAULT_CHECKS.clone())
    }

    pub fn checks(&self) -> &[DiagnosticCheck] {
        &self.checks
    }

    /// Runs every check in presentation order, then the drift query. The first
    /// query error aborts the audit.
    pub async fn run<E>(&self, executor: &mut E) -> ReportOpsResult<AuditReport>
    where
        E: DiagnosticExecutor + ?Sized,
    {
        let mut results = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            let measured = executor.measure(&check.measure).await.map_err(|e| match e {
                ReportOpsError::Database { reason, .. } => ReportOpsError::database_error(&check.name, &reason),
                other => other,
            })?;
            let status = check.threshold.evaluate(measured);
            log::debug!("{} {} = {} ({})", status.emoji(), check.name, measured, check.threshold);

            results.push(CheckResult {
                check_name: check.name.clone(),
                measured,
                threshold: check.threshold,
                status,
            });
        }

        let drift = executor.policy_drift().await?;
        if !drift.is_empty() {
            log::warn!("⚠️ {} policies still read token claims", drift.len());
        }

        Ok(AuditReport {
            generated_at: Utc::now(),
            results,
            drift,
        })
    }

    /// The whole battery as an annotated script for an SQL console.
    pub fn render_script(&self) -> String {
        let mut script = String::from(
            "-- Row-level-security diagnostics. Read-only, run as an admin user.\n",
        );
        for check in &self.checks {
            script.push_str(&format!("\n-- {} (pass when {})\n", check.name, check.threshold));
            script.push_str(&check.annotated_sql());
            script.push('\n');
        }
        script.push_str("\n-- policy drift: expect zero rows\n");
        script.push_str(POLICY_DRIFT_SQL);
        script.push_str(";\n");
        script
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_contains_every_check_and_the_drift_query() {
        let auditor = PolicyAuditor::with_default_catalog();
        let script = auditor.render_script();

        for check in auditor.checks() {
            assert!(script.contains(&format!("'{}' AS check_name", check.name)));
        }
        assert!(script.contains("FROM pg_policies"));
        assert_eq!(script.matches(';').count(), auditor.checks().len() + 1);
    }
}
