use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ReportOpsError, ReportOpsResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# report-ops configuration
#
# Secrets are never read from this file. Export SUPABASE_URL,
# SUPABASE_SERVICE_ROLE_KEY and DATABASE_URL instead.

[storage]
# Bucket that receives report definitions
bucket = "customer-reports"

# Customer whose report definition is seeded; the object is "<customer_id>.json"
customer_id = "4586648"

# Optional report definition file. The built-in definition is used when unset.
# definition_path = "/etc/report-ops/cost_per_pound.json"

# Upload timeout in seconds
timeout_secs = 30

[audit]
# Exit with status 2 when a check fails or a policy still reads token claims
strict = false

# Seconds to wait for a database connection
acquire_timeout_secs = 10

# Run every check as this user so row-level security applies.
# Required by 'report-ops audit' unless --as-user is given.
# impersonate_user = "00000000-0000-0000-0000-000000000000"
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load() -> ReportOpsResult<Config> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> ReportOpsResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| ReportOpsError::ConfigurationFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ReportOpsError::ConfigurationFile {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })?;

        if let Err(errors) = Self::validate_config(&config) {
            return Err(ReportOpsError::ConfigurationFile {
                path: path.display().to_string(),
                reason: errors.join("; "),
            });
        }

        Ok(config)
    }

    pub fn create_sample_config() -> ReportOpsResult<PathBuf> {
        let path = Self::default_path().ok_or_else(|| {
            ReportOpsError::config_error("could not determine the home directory", None, None)
        })?;
        Self::create_sample_config_at(&path)?;
        Ok(path)
    }

    pub fn create_sample_config_at(path: &Path) -> ReportOpsResult<()> {
        if path.exists() {
            return Err(ReportOpsError::ConfigurationFile {
                path: path.display().to_string(),
                reason: "file already exists".to_string(),
            });
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(reason) = validate_bucket(&config.storage.bucket) {
            errors.push(format!("storage.bucket {reason}"));
        }
        if let Err(reason) = validate_customer_id(&config.storage.customer_id) {
            errors.push(format!("storage.customer_id {reason}"));
        }
        if config.storage.timeout_secs == 0 {
            errors.push("storage.timeout_secs must be greater than zero".to_string());
        }
        if config.audit.acquire_timeout_secs == 0 {
            errors.push("audit.acquire_timeout_secs must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_path_segment(segment: &str) -> Result<(), String> {
    if segment.trim().is_empty() {
        return Err("must not be empty".to_string());
    }
    if segment.contains('/') || segment.contains('\\') || segment == "." || segment == ".." {
        return Err(format!("'{segment}' must be a single path segment"));
    }
    Ok(())
}

/// Customer ids become object names, so they must be a single path segment.
pub fn validate_customer_id(customer_id: &str) -> Result<(), String> {
    validate_path_segment(customer_id)
}

/// The bucket is the first segment of the storage object URL.
pub fn validate_bucket(bucket: &str) -> Result<(), String> {
    validate_path_segment(bucket)
}
