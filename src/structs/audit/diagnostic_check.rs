use serde::{Deserialize, Serialize};
use crate::enums::measure::Measure;
use crate::enums::threshold::Threshold;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticCheck {
    pub name: String,
    pub measure: Measure,
    pub threshold: Threshold,
}

impl DiagnosticCheck {
    pub fn new(name: &str, measure: Measure, threshold: Threshold) -> Self {
        Self {
            name: name.to_string(),
            measure,
            threshold,
        }
    }

    /// Annotated statement for interactive use: check name, measured value and status.
    pub fn annotated_sql(&self) -> String {
        let expression = self.measure.expression();
        let mut sql = format!(
            "SELECT '{}' AS check_name,\n       {}::bigint AS measured,\n       CASE WHEN {} THEN 'PASS' ELSE 'FAIL' END AS status",
            self.name,
            expression,
            self.threshold.sql_condition(&expression),
        );
        if let Some(from) = self.measure.from_clause() {
            sql.push('\n');
            sql.push_str(&from);
        }
        sql.push(';');
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotated_row_count() {
        let check = DiagnosticCheck::new("customer_visibility", Measure::row_count("customer"), Threshold::GreaterThan(1));
        assert_eq!(
            check.annotated_sql(),
            "SELECT 'customer_visibility' AS check_name,\n       count(*)::bigint AS measured,\n       CASE WHEN count(*) > 1 THEN 'PASS' ELSE 'FAIL' END AS status\nFROM public.customer;"
        );
    }

    #[test]
    fn annotated_flag_has_no_from_clause() {
        let check = DiagnosticCheck::new("always", Measure::flag("true"), Threshold::Equals(1));
        let sql = check.annotated_sql();
        assert!(sql.contains("CASE WHEN (CASE WHEN true THEN 1 ELSE 0 END) = 1 THEN 'PASS'"));
        assert!(!sql.contains("FROM"));
    }
}
