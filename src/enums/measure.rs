use serde::{Deserialize, Serialize};

/// What a diagnostic measures, always as a single `bigint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "source", rename_all = "snake_case")]
pub enum Measure {
    /// Rows of `public.<table>` visible to the current role.
    RowCount(String),
    /// Boolean SQL expression, measured as 1 or 0.
    Flag(String),
}

impl Measure {
    pub fn row_count(table: &str) -> Self {
        Self::RowCount(table.to_string())
    }

    pub fn flag(expression: &str) -> Self {
        Self::Flag(expression.to_string())
    }

    /// Select-list expression producing the measured value.
    pub fn expression(&self) -> String {
        match self {
            Self::RowCount(_) => "count(*)".to_string(),
            Self::Flag(expression) => format!("(CASE WHEN {expression} THEN 1 ELSE 0 END)"),
        }
    }

    pub fn from_clause(&self) -> Option<String> {
        match self {
            Self::RowCount(table) => Some(format!("FROM public.{table}")),
            Self::Flag(_) => None,
        }
    }

    /// Standalone query returning the measured value.
    pub fn query(&self) -> String {
        match self.from_clause() {
            Some(from) => format!("SELECT {}::bigint {}", self.expression(), from),
            None => format!("SELECT {}::bigint", self.expression()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_counts_read_from_the_public_schema() {
        assert_eq!(Measure::row_count("customer").query(), "SELECT count(*)::bigint FROM public.customer");
    }

    #[test]
    fn flags_are_measured_as_integers() {
        assert_eq!(
            Measure::flag("true").query(),
            "SELECT (CASE WHEN true THEN 1 ELSE 0 END)::bigint"
        );
    }
}
