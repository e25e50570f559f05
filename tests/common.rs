use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use report_ops::enums::measure::Measure;
use report_ops::errors::{ReportOpsError, ReportOpsResult};
use report_ops::structs::audit::policy_drift::PolicyDrift;
use report_ops::traits::diagnostic_executor::DiagnosticExecutor;
use serde_json::json;
use tempfile::TempDir;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::Filter;

pub const SERVICE_KEY: &str = "service-role-test-key";

/// What the fake storage endpoint has seen and stored.
#[derive(Clone, Default)]
pub struct FakeStorage {
    pub objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    pub content_types: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<AtomicUsize>,
}

impl FakeStorage {
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

/// Serves the storage upload route on an ephemeral port and returns its base URL.
pub fn spawn_fake_storage() -> (String, FakeStorage) {
    let state = FakeStorage::default();
    let shared = state.clone();

    let route = warp::post()
        .and(warp::path!("storage" / "v1" / "object" / String / String))
        .and(warp::header::optional::<String>("authorization"))
        .and(warp::header::optional::<String>("apikey"))
        .and(warp::header::optional::<String>("x-upsert"))
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::bytes())
        .map(
            move |bucket: String,
                  path: String,
                  authorization: Option<String>,
                  apikey: Option<String>,
                  upsert: Option<String>,
                  content_type: Option<String>,
                  body: Bytes| {
                shared.requests.fetch_add(1, Ordering::SeqCst);

                let expected = format!("Bearer {SERVICE_KEY}");
                if authorization.as_deref() != Some(expected.as_str()) || apikey.as_deref() != Some(SERVICE_KEY) {
                    return warp::reply::with_status(
                        warp::reply::json(&json!({ "error": "Unauthorized", "message": "invalid signature" })),
                        StatusCode::FORBIDDEN,
                    );
                }

                let key = format!("{bucket}/{path}");
                let mut objects = shared.objects.lock().unwrap();
                if objects.contains_key(&key) && upsert.as_deref() != Some("true") {
                    return warp::reply::with_status(
                        warp::reply::json(&json!({ "error": "Duplicate", "message": "The resource already exists" })),
                        StatusCode::CONFLICT,
                    );
                }

                objects.insert(key.clone(), body.to_vec());
                shared.content_types.lock().unwrap().push(content_type.unwrap_or_default());
                warp::reply::with_status(warp::reply::json(&json!({ "Key": key })), StatusCode::OK)
            },
        );

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    (format!("http://{addr}"), state)
}

/// Environment lookup backed by a fixed set of pairs.
pub fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + Send + Sync + 'static {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

/// Writes `content` as a config file in a fresh temp dir.
pub fn config_file(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// In-memory stand-in for a database seen through row-level security.
#[derive(Default)]
pub struct FixtureDatabase {
    pub row_counts: HashMap<String, i64>,
    pub is_admin: bool,
    pub drift: Vec<PolicyDrift>,
    pub queries: usize,
}

impl FixtureDatabase {
    /// Every audited table populated, `customers` customer rows, current user is admin.
    pub fn admin_view(customers: i64) -> Self {
        let mut row_counts: HashMap<String, i64> = [
            "carrier",
            "shipment",
            "user_roles",
            "users_customers",
            "dashboard_widgets",
            "ai_knowledge",
            "ai_knowledge_documents",
            "field_business_context",
            "glossary_global",
            "glossary_customer",
            "scheduled_reports",
        ]
        .iter()
        .map(|t| ((*t).to_string(), 3))
        .collect();
        row_counts.insert("customer".to_string(), customers);

        Self {
            row_counts,
            is_admin: true,
            drift: Vec::new(),
            queries: 0,
        }
    }
}

#[async_trait]
impl DiagnosticExecutor for FixtureDatabase {
    async fn measure(&mut self, measure: &Measure) -> ReportOpsResult<i64> {
        self.queries += 1;
        match measure {
            Measure::RowCount(table) => self.row_counts.get(table).copied().ok_or_else(|| {
                ReportOpsError::database_error("query", &format!("relation \"public.{table}\" does not exist"))
            }),
            Measure::Flag(_) => Ok(i64::from(self.is_admin)),
        }
    }

    async fn policy_drift(&mut self) -> ReportOpsResult<Vec<PolicyDrift>> {
        self.queries += 1;
        Ok(self.drift.clone())
    }
}
