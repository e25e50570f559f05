use std::time::Duration;

pub const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
pub const SUPABASE_SERVICE_ROLE_KEY_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

pub const DEFAULT_BUCKET: &str = "customer-reports";
pub const DEFAULT_CUSTOMER_ID: &str = "4586648";

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const STORAGE_OBJECT_PATH: &str = "storage/v1/object";
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Table whose own policies may legitimately inspect token claims.
pub const ROLE_TABLE: &str = "user_roles";
pub const ADMIN_ROLE: &str = "admin";

pub const CONFIG_DIR_NAME: &str = "report-ops";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
