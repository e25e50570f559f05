use crate::config::constants::{DEFAULT_BUCKET, DEFAULT_CUSTOMER_ID, DEFAULT_DB_ACQUIRE_TIMEOUT_SECS, DEFAULT_UPLOAD_TIMEOUT_SECS};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_bucket() -> String {
        DEFAULT_BUCKET.to_string()
    }

    pub fn default_customer_id() -> String {
        DEFAULT_CUSTOMER_ID.to_string()
    }

    pub const fn default_upload_timeout_secs() -> u64 {
        DEFAULT_UPLOAD_TIMEOUT_SECS
    }

    pub const fn default_acquire_timeout_secs() -> u64 {
        DEFAULT_DB_ACQUIRE_TIMEOUT_SECS
    }

    pub const fn default_strict() -> bool {
        false
    }
}
