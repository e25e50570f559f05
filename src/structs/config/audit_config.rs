use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    #[serde(default = "ConfigHelper::default_strict")]
    pub strict: bool,

    #[serde(default = "ConfigHelper::default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,

    /// User to impersonate so row-level security applies to every check.
    #[serde(default)]
    pub impersonate_user: Option<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            strict: ConfigHelper::default_strict(),
            acquire_timeout_secs: ConfigHelper::default_acquire_timeout_secs(),
            impersonate_user: None,
        }
    }
}
