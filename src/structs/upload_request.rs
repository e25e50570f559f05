#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub bucket: String,
    pub path: String,
    pub body: Vec<u8>,
    pub content_type: String,
    pub upsert: bool,
}

impl UploadRequest {
    pub fn target(&self) -> String {
        format!("{}/{}", self.bucket, self.path)
    }
}
