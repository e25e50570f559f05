use async_trait::async_trait;
use crate::errors::ReportOpsResult;
use crate::structs::upload_receipt::UploadReceipt;
use crate::structs::upload_request::UploadRequest;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {

    /// Writes one object. With `upsert` set an existing object at the same
    /// path is replaced rather than rejected.
    async fn upload(&self, request: UploadRequest) -> ReportOpsResult<UploadReceipt>;
}
