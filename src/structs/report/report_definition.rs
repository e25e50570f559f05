use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::enums::time_grouping::TimeGrouping;
use crate::errors::{ReportOpsError, ReportOpsResult};
use crate::structs::report::calculation::Calculation;
use crate::structs::report::category_rule::CategoryRule;

const BUILTIN_DEFINITION: &str = include_str!("../../../data/reports/cost_per_pound.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub calculation: Calculation,
    pub group_by: TimeGrouping,
    pub categories: Vec<CategoryRule>,
}

impl ReportDefinition {
    /// The definition shipped with the binary.
    pub fn builtin() -> ReportOpsResult<Self> {
        Self::from_json(BUILTIN_DEFINITION)
    }

    pub fn from_json(content: &str) -> ReportOpsResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> ReportOpsResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ReportOpsError::io_error(&format!("reading {}", path.display()), &e.to_string()))?;
        Self::from_json(&content)
    }

    /// Loads `path` when given, otherwise the built-in definition.
    pub fn load(path: Option<&Path>) -> ReportOpsResult<Self> {
        match path {
            Some(path) => {
                log::info!("📄 Loading report definition from {}", path.display());
                Self::from_file(path)
            }
            None => Self::builtin(),
        }
    }

    pub fn to_json_bytes(&self) -> ReportOpsResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn default_category(&self) -> Option<&CategoryRule> {
        self.categories.iter().find(|c| c.is_default)
    }

    /// First keyword rule matching `text`; the catch-all is only consulted last.
    pub fn categorize(&self, text: &str) -> Option<&CategoryRule> {
        self.categories
            .iter()
            .filter(|c| !c.is_default)
            .find(|c| c.matches(text))
            .or_else(|| self.default_category())
    }
}
