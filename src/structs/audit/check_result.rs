use serde::{Deserialize, Serialize};
use crate::enums::check_status::CheckStatus;
use crate::enums::threshold::Threshold;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub check_name: String,
    pub measured: i64,
    pub threshold: Threshold,
    pub status: CheckStatus,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}
