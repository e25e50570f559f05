pub mod audit_config;
pub mod config;
pub mod storage_config;
