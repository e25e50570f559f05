use crate::config::config_manager::{validate_bucket, validate_customer_id};
use crate::config::constants::JSON_CONTENT_TYPE;
use crate::errors::{ReportOpsError, ReportOpsResult};
use crate::services::report_validator::ReportValidator;
use crate::structs::report::report_definition::ReportDefinition;
use crate::structs::seed_options::SeedOptions;
use crate::structs::seed_outcome::SeedOutcome;
use crate::structs::seeder_settings::SeederSettings;
use crate::structs::upload_request::UploadRequest;
use crate::traits::object_store::ObjectStore;

pub struct ReportSeeder<S: ObjectStore> {
    store: S,
}

impl<S: ObjectStore> ReportSeeder<S> {

    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates, serializes and uploads `definition` in a single attempt.
    pub async fn seed(&self, definition: &ReportDefinition, options: &SeedOptions) -> ReportOpsResult<SeedOutcome> {
        validate_customer_id(&options.customer_id)
            .map_err(|reason| ReportOpsError::config_error(&format!("customer id {reason}"), Some("customer_id"), None))?;
        validate_bucket(&options.bucket)
            .map_err(|reason| ReportOpsError::config_error(&format!("bucket {reason}"), Some("bucket"), None))?;
        ReportValidator::validate(definition).into_result(&definition.id)?;

        let body = definition.to_json_bytes()?;
        let request = UploadRequest {
            bucket: options.bucket.clone(),
            path: options.object_path(),
            body,
            content_type: JSON_CONTENT_TYPE.to_string(),
            // re-running a seed always replaces the previous object
            upsert: true,
        };
        let bytes = request.body.len();

        if options.dry_run {
            log::info!("🧪 Dry run: would upload {} bytes to {}", bytes, request.target());
            return Ok(SeedOutcome {
                bucket: request.bucket,
                path: request.path,
                bytes,
                receipt: None,
            });
        }

        log::info!("⬆️  Uploading report '{}' to {}", definition.id, request.target());
        let (bucket, path) = (request.bucket.clone(), request.path.clone());
        let receipt = self.store.upload(request).await?;
        log::info!("✅ Stored {} ({} bytes)", receipt.key, bytes);

        Ok(SeedOutcome {
            bucket,
            path,
            bytes,
            receipt: Some(receipt),
        })
    }
}

/// Resolves the storage secrets through `lookup` before building a store, so
/// a missing variable aborts ahead of any network activity.
pub async fn seed_from_env<F, S, M>(
    lookup: &F,
    definition: &ReportDefinition,
    options: &SeedOptions,
    make_store: M,
) -> ReportOpsResult<SeedOutcome>
where
    F: Fn(&str) -> Option<String>,
    S: ObjectStore,
    M: FnOnce(&SeederSettings) -> ReportOpsResult<S>,
{
    let settings = SeederSettings::from_lookup(lookup)?;
    log::debug!("Resolved storage settings: {:?}", settings);

    let seeder = ReportSeeder::new(make_store(&settings)?);
    seeder.seed(definition, options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::upload_receipt::UploadReceipt;
    use crate::traits::object_store::MockObjectStore;

    fn options() -> SeedOptions {
        SeedOptions {
            bucket: "customer-reports".to_string(),
            customer_id: "4586648".to_string(),
            dry_run: false,
        }
    }

    #[tokio::test]
    async fn uploads_once_with_json_content_type_and_upsert() {
        let definition = ReportDefinition::builtin().unwrap();
        let expected_body = definition.to_json_bytes().unwrap();

        let mut store = MockObjectStore::new();
        store
            .expect_upload()
            .withf(move |request| {
                request.bucket == "customer-reports"
                    && request.path == "4586648.json"
                    && request.content_type == "application/json"
                    && request.upsert
                    && request.body == expected_body
            })
            .times(1)
            .returning(|request| Ok(UploadReceipt { key: request.target() }));

        let outcome = ReportSeeder::new(store).seed(&definition, &options()).await.unwrap();
        assert_eq!(outcome.path, "4586648.json");
        assert_eq!(outcome.receipt.unwrap().key, "customer-reports/4586648.json");
    }

    #[tokio::test]
    async fn upload_failures_are_not_retried() {
        let mut store = MockObjectStore::new();
        store
            .expect_upload()
            .times(1)
            .returning(|request| Err(ReportOpsError::upload_error(&request.target(), Some(500), "boom")));

        let definition = ReportDefinition::builtin().unwrap();
        let err = ReportSeeder::new(store).seed(&definition, &options()).await.unwrap_err();
        assert!(matches!(err, ReportOpsError::Upload { status_code: Some(500), .. }));
    }

    #[tokio::test]
    async fn invalid_definitions_never_reach_the_store() {
        let mut store = MockObjectStore::new();
        store.expect_upload().times(0);

        let mut definition = ReportDefinition::builtin().unwrap();
        definition.categories.rotate_right(1);

        let err = ReportSeeder::new(store).seed(&definition, &options()).await.unwrap_err();
        assert!(matches!(err, ReportOpsError::Validation { .. }));
    }

    #[tokio::test]
    async fn dry_run_skips_the_upload() {
        let mut store = MockObjectStore::new();
        store.expect_upload().times(0);

        let mut opts = options();
        opts.dry_run = true;
        let outcome = ReportSeeder::new(store)
            .seed(&ReportDefinition::builtin().unwrap(), &opts)
            .await
            .unwrap();
        assert!(outcome.receipt.is_none());
        assert!(outcome.bytes > 0);
    }

    #[tokio::test]
    async fn path_like_customer_ids_are_rejected() {
        let mut store = MockObjectStore::new();
        store.expect_upload().times(0);

        let mut opts = options();
        opts.customer_id = "../other".to_string();
        let err = ReportSeeder::new(store)
            .seed(&ReportDefinition::builtin().unwrap(), &opts)
            .await
            .unwrap_err();
        assert!(matches!(err, ReportOpsError::Configuration { .. }));
    }

    #[tokio::test]
    async fn blank_or_nested_buckets_are_rejected() {
        for bucket in ["", "reports/archive"] {
            let mut store = MockObjectStore::new();
            store.expect_upload().times(0);

            let mut opts = options();
            opts.bucket = bucket.to_string();
            let err = ReportSeeder::new(store)
                .seed(&ReportDefinition::builtin().unwrap(), &opts)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                ReportOpsError::Configuration { field: Some(ref field), .. } if field == "bucket"
            ));
        }
    }

    #[tokio::test]
    async fn missing_secrets_never_build_a_store() {
        let lookup = |_: &str| -> Option<String> { None };
        let result = seed_from_env(
            &lookup,
            &ReportDefinition::builtin().unwrap(),
            &options(),
            |_| -> ReportOpsResult<MockObjectStore> { panic!("store must not be built") },
        )
        .await;
        assert!(matches!(result, Err(ReportOpsError::Configuration { .. })));
    }
}
