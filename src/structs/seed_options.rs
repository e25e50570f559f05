use crate::structs::config::storage_config::StorageConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOptions {
    pub bucket: String,
    pub customer_id: String,
    pub dry_run: bool,
}

impl SeedOptions {
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            bucket: config.bucket.clone(),
            customer_id: config.customer_id.clone(),
            dry_run: false,
        }
    }

    pub fn object_path(&self) -> String {
        format!("{}.json", self.customer_id)
    }
}
