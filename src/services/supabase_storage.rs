use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use crate::config::constants::{timeout_duration_secs, STORAGE_OBJECT_PATH};
use crate::errors::{ReportOpsError, ReportOpsResult};
use crate::structs::upload_receipt::UploadReceipt;
use crate::structs::upload_request::UploadRequest;
use crate::traits::object_store::ObjectStore;

/// Object storage client for a hosted Supabase project.
#[derive(Clone)]
pub struct SupabaseStorage {
    base_url: String,
    service_key: String,
    client: Client,
}

impl SupabaseStorage {

    pub fn new(endpoint: &str, service_key: String, timeout_secs: u64) -> ReportOpsResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration_secs(timeout_secs))
            .build()
            .map_err(|e| ReportOpsError::config_error(&format!("failed to build HTTP client: {e}"), None, None))?;

        Ok(Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
            service_key,
            client,
        })
    }

    pub fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/{}/{}/{}", self.base_url, STORAGE_OBJECT_PATH, bucket, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ObjectStore for SupabaseStorage {

    async fn upload(&self, request: UploadRequest) -> ReportOpsResult<UploadReceipt> {
        let url = self.object_url(&request.bucket, &request.path);
        let target = request.target();
        log::debug!("📦 POST {} ({} bytes, upsert={})", url, request.body.len(), request.upsert);

        let response = self.client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.service_key))
            .header("apikey", &self.service_key)
            .header(CONTENT_TYPE, &request.content_type)
            .header("x-upsert", if request.upsert { "true" } else { "false" })
            .body(request.body)
            .send()
            .await
            .map_err(|e| ReportOpsError::upload_error(&target, None, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(ReportOpsError::upload_error(&target, Some(status.as_u16()), &error_text));
        }

        let body = response.text().await.unwrap_or_default();
        // Older storage versions answer with an empty body
        let receipt = serde_json::from_str::<UploadReceipt>(&body).unwrap_or(UploadReceipt { key: target });

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_url_joins_segments_without_duplicate_slashes() {
        let storage = SupabaseStorage::new("https://abc.supabase.co/", "key".to_string(), 30).unwrap();
        assert_eq!(
            storage.object_url("customer-reports", "/4586648.json"),
            "https://abc.supabase.co/storage/v1/object/customer-reports/4586648.json"
        );
    }
}
