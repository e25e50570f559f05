pub mod aggregation;
pub mod check_status;
pub mod commands;
pub mod measure;
pub mod threshold;
pub mod time_grouping;
