use std::fmt;
use serde::{Deserialize, Serialize};
use crate::enums::check_status::CheckStatus;

/// Literal comparison a measured value must satisfy to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Threshold {
    GreaterThan(i64),
    AtLeast(i64),
    Equals(i64),
}

impl Threshold {
    pub const fn evaluate(self, measured: i64) -> CheckStatus {
        let passed = match self {
            Self::GreaterThan(n) => measured > n,
            Self::AtLeast(n) => measured >= n,
            Self::Equals(n) => measured == n,
        };
        if passed { CheckStatus::Pass } else { CheckStatus::Fail }
    }

    pub const fn operator(self) -> &'static str {
        match self {
            Self::GreaterThan(_) => ">",
            Self::AtLeast(_) => ">=",
            Self::Equals(_) => "=",
        }
    }

    pub const fn value(self) -> i64 {
        match self {
            Self::GreaterThan(n) | Self::AtLeast(n) | Self::Equals(n) => n,
        }
    }

    /// SQL predicate applying this threshold to `expression`.
    pub fn sql_condition(self, expression: &str) -> String {
        format!("{} {} {}", expression, self.operator(), self.value())
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greater_than_is_strict() {
        assert_eq!(Threshold::GreaterThan(1).evaluate(1), CheckStatus::Fail);
        assert_eq!(Threshold::GreaterThan(1).evaluate(2), CheckStatus::Pass);
    }

    #[test]
    fn at_least_accepts_the_bound() {
        assert_eq!(Threshold::AtLeast(0).evaluate(0), CheckStatus::Pass);
        assert_eq!(Threshold::AtLeast(0).evaluate(-1), CheckStatus::Fail);
    }

    #[test]
    fn equals_is_exact() {
        assert_eq!(Threshold::Equals(1).evaluate(1), CheckStatus::Pass);
        assert_eq!(Threshold::Equals(1).evaluate(2), CheckStatus::Fail);
    }

    #[test]
    fn renders_as_sql() {
        assert_eq!(Threshold::GreaterThan(1).sql_condition("count(*)"), "count(*) > 1");
        assert_eq!(Threshold::AtLeast(0).to_string(), ">= 0");
    }
}
