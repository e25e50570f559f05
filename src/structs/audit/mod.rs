pub mod audit_report;
pub mod check_result;
pub mod diagnostic_check;
pub mod policy_drift;
