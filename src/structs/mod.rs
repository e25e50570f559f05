pub mod audit;
pub mod cli;
pub mod config;
pub mod report;
pub mod seed_options;
pub mod seed_outcome;
pub mod seeder_settings;
pub mod upload_receipt;
pub mod upload_request;
pub mod validation_result;
