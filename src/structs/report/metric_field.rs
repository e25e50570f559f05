use serde::{Deserialize, Serialize};
use crate::enums::aggregation::Aggregation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricField {
    pub field: String,
    pub aggregation: Aggregation,
}
