use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Postgres, Transaction};
use crate::config::constants::timeout_duration_secs;
use crate::enums::measure::Measure;
use crate::errors::{ReportOpsError, ReportOpsResult};
use crate::services::check_catalog::POLICY_DRIFT_SQL;
use crate::structs::audit::policy_drift::PolicyDrift;
use crate::traits::diagnostic_executor::DiagnosticExecutor;

/// Runs diagnostics inside one read-only transaction that is always rolled back.
pub struct PgDiagnostics {
    tx: Transaction<'static, Postgres>,
}

impl PgDiagnostics {

    pub async fn connect(database_url: &str, acquire_timeout_secs: u64, impersonate_user: Option<&str>) -> ReportOpsResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(timeout_duration_secs(acquire_timeout_secs))
            .connect(database_url)
            .await
            .map_err(|e| ReportOpsError::database_error("connect", &e.to_string()))?;

        let mut tx = pool
            .begin()
            .await
            .map_err(|e| ReportOpsError::database_error("begin transaction", &e.to_string()))?;

        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| ReportOpsError::database_error("set read only", &e.to_string()))?;

        if let Some(user_id) = impersonate_user {
            log::info!("🎭 Impersonating user {}", user_id);
            let claims = json!({ "sub": user_id, "role": "authenticated" }).to_string();

            sqlx::query("SELECT set_config('request.jwt.claims', $1, true)")
                .bind(claims)
                .execute(&mut *tx)
                .await
                .map_err(|e| ReportOpsError::database_error("set jwt claims", &e.to_string()))?;
            sqlx::query("SET LOCAL ROLE authenticated")
                .execute(&mut *tx)
                .await
                .map_err(|e| ReportOpsError::database_error("set role", &e.to_string()))?;
        }

        Ok(Self { tx })
    }

    pub async fn finish(self) -> ReportOpsResult<()> {
        self.tx
            .rollback()
            .await
            .map_err(|e| ReportOpsError::database_error("rollback", &e.to_string()))
    }
}

#[async_trait]
impl DiagnosticExecutor for PgDiagnostics {

    async fn measure(&mut self, measure: &Measure) -> ReportOpsResult<i64> {
        let sql = measure.query();
        let (value,): (i64,) = sqlx::query_as(&sql).fetch_one(&mut *self.tx).await?;
        Ok(value)
    }

    async fn policy_drift(&mut self) -> ReportOpsResult<Vec<PolicyDrift>> {
        let rows = sqlx::query_as::<_, PolicyDrift>(POLICY_DRIFT_SQL)
            .fetch_all(&mut *self.tx)
            .await
            .map_err(|e| ReportOpsError::database_error("policy drift", &e.to_string()))?;
        Ok(rows)
    }
}
