use serde::{Deserialize, Serialize};
use crate::structs::report::metric_field::MetricField;

/// Ratio metric: `aggregation(numerator) / aggregation(denominator)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub numerator: MetricField,
    pub denominator: MetricField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}
