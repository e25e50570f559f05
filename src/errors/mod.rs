use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportOpsError {
    // Configuration errors
    #[error("Configuration Error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFile {
        path: String,
        reason: String,
    },

    // Report definition errors
    #[error("Report definition '{report}' is invalid: {}", .errors.join("; "))]
    Validation {
        report: String,
        errors: Vec<String>,
    },
    #[error("Failed to parse {content_type}: {reason}")]
    Serialization {
        content_type: String,
        reason: String,
    },

    // Storage errors
    #[error("Upload to '{target}' failed (status: {status_code:?}): {reason}")]
    Upload {
        target: String,
        status_code: Option<u16>,
        reason: String,
    },

    // Database errors
    #[error("Database error during {operation}: {reason}")]
    Database {
        operation: String,
        reason: String,
    },

    #[error("Policy audit found {failed} failing checks and {drifted} drifted policies")]
    AuditFailed {
        failed: usize,
        drifted: usize,
    },

    // System errors
    #[error("I/O error during {operation}: {reason}")]
    Io {
        operation: String,
        reason: String,
    },
}

impl ReportOpsError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(str::to_string),
            suggestion: suggestion.map(str::to_string),
        }
    }

    pub fn missing_env(name: &str) -> Self {
        Self::config_error(
            &format!("required environment variable {name} is not set"),
            Some(name),
            Some(&format!("export {name}=... before running this command")),
        )
    }

    pub fn upload_error(target: &str, status_code: Option<u16>, reason: &str) -> Self {
        Self::Upload {
            target: target.to_string(),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn database_error(operation: &str, reason: &str) -> Self {
        Self::Database {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io_error(operation: &str, reason: &str) -> Self {
        Self::Io {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io { .. } => ErrorSeverity::Critical,
            Self::Upload { .. } | Self::Database { .. } | Self::ConfigurationFile { .. } => {
                ErrorSeverity::High
            }
            Self::Validation { .. } | Self::Serialization { .. } | Self::AuditFailed { .. } => {
                ErrorSeverity::Medium
            }
            Self::Configuration { .. } => ErrorSeverity::Low,
        }
    }

    /// Process exit status for this error. Audit failures under `--strict`
    /// are distinguished from operational errors.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::AuditFailed { .. } => 2,
            _ => 1,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration { field, suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFile { .. } => {
                format!("{self}\n💡 Check file permissions and TOML syntax")
            }
            Self::Validation { report, errors } => {
                let mut msg = format!("Report definition '{report}' is invalid:");
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("\n  {}. {}", i + 1, error));
                }
                msg
            }
            Self::Upload { .. } => {
                format!("{self}\n💡 Check SUPABASE_URL, the service role key and the bucket name; re-running is safe")
            }
            Self::Database { .. } => {
                format!("{self}\n💡 Check DATABASE_URL and that the role can read the audited tables")
            }
            _ => self.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for report-ops operations
pub type ReportOpsResult<T> = Result<T, ReportOpsError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the operator-facing message to stderr.
    pub fn handle_error(error: &ReportOpsError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

impl From<std::io::Error> for ReportOpsError {
    fn from(error: std::io::Error) -> Self {
        Self::io_error("I/O operation", &error.to_string())
    }
}

impl From<serde_json::Error> for ReportOpsError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<sqlx::Error> for ReportOpsError {
    fn from(error: sqlx::Error) -> Self {
        Self::database_error("query", &error.to_string())
    }
}
