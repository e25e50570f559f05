use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "ConfigHelper::default_bucket")]
    pub bucket: String,

    #[serde(default = "ConfigHelper::default_customer_id")]
    pub customer_id: String,

    /// Report definition file; the embedded definition is used when unset.
    #[serde(default)]
    pub definition_path: Option<String>,

    #[serde(default = "ConfigHelper::default_upload_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: ConfigHelper::default_bucket(),
            customer_id: ConfigHelper::default_customer_id(),
            definition_path: None,
            timeout_secs: ConfigHelper::default_upload_timeout_secs(),
        }
    }
}
