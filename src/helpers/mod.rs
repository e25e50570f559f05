pub mod config_helper;
pub mod env_helper;
