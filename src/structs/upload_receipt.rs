use serde::{Deserialize, Serialize};

/// Body returned by the storage API after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(rename = "Key")]
    pub key: String,
}
