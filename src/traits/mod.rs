pub mod diagnostic_executor;
pub mod object_store;
