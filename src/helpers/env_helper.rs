use crate::errors::{ReportOpsError, ReportOpsResult};

/// Reads a variable from the process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Resolves a required variable through `lookup`, treating blank values as missing.
pub fn require<F>(lookup: &F, name: &str) -> ReportOpsResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ReportOpsError::missing_env(name)),
    }
}
