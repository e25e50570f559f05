use crate::structs::upload_receipt::UploadReceipt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub bucket: String,
    pub path: String,
    pub bytes: usize,
    /// `None` for dry runs.
    pub receipt: Option<UploadReceipt>,
}
