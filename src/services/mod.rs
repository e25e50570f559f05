pub mod check_catalog;
pub mod pg_diagnostics;
pub mod policy_auditor;
pub mod report_seeder;
pub mod report_validator;
pub mod supabase_storage;
