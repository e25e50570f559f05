use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::audit::check_result::CheckResult;
use crate::structs::audit::policy_drift::PolicyDrift;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<CheckResult>,
    pub drift: Vec<PolicyDrift>,
}

impl AuditReport {
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.passed()).count()
    }

    pub fn passed_count(&self) -> usize {
        self.results.len() - self.failed_count()
    }

    pub fn is_clean(&self) -> bool {
        self.failed_count() == 0 && self.drift.is_empty()
    }
}
