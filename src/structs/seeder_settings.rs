use crate::config::constants::{SUPABASE_SERVICE_ROLE_KEY_ENV, SUPABASE_URL_ENV};
use crate::errors::ReportOpsResult;
use crate::helpers::env_helper::require;

/// Secrets the seeder needs, read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct SeederSettings {
    pub endpoint: String,
    pub service_key: String,
}

impl SeederSettings {
    pub fn from_lookup<F>(lookup: &F) -> ReportOpsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            endpoint: require(lookup, SUPABASE_URL_ENV)?,
            service_key: require(lookup, SUPABASE_SERVICE_ROLE_KEY_ENV)?,
        })
    }
}

impl std::fmt::Debug for SeederSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeederSettings")
            .field("endpoint", &self.endpoint)
            .field("service_key", &"<redacted>")
            .finish()
    }
}
