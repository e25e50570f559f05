use crate::errors::{ReportOpsError, ReportOpsResult};

#[derive(Debug, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn into_result(self, report: &str) -> ReportOpsResult<()> {
        for warning in &self.warnings {
            log::warn!("⚠️ {}: {}", report, warning);
        }
        if self.is_valid {
            Ok(())
        } else {
            Err(ReportOpsError::Validation {
                report: report.to_string(),
                errors: self.errors,
            })
        }
    }

    pub fn print_summary(&self) {
        if self.is_valid {
            println!("✅ Validation passed");
        } else {
            println!("❌ Validation failed with {} errors", self.errors.len());
        }

        if !self.warnings.is_empty() {
            println!("⚠️ {} warnings found", self.warnings.len());
        }

        for error in &self.errors {
            println!("   ❌ {}", error);
        }

        for warning in &self.warnings {
            println!("   ⚠️ {}", warning);
        }
    }
}
