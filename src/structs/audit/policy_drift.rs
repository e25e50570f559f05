use serde::{Deserialize, Serialize};

/// A policy that still authorizes through token claims instead of the role table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PolicyDrift {
    pub table_name: String,
    pub policy_name: String,
    pub command: String,
}
