use async_trait::async_trait;
use crate::enums::measure::Measure;
use crate::errors::ReportOpsResult;
use crate::structs::audit::policy_drift::PolicyDrift;

#[async_trait]
pub trait DiagnosticExecutor: Send {

    async fn measure(&mut self, measure: &Measure) -> ReportOpsResult<i64>;

    /// Policies outside the role table whose predicates read token claims.
    async fn policy_drift(&mut self) -> ReportOpsResult<Vec<PolicyDrift>>;
}
