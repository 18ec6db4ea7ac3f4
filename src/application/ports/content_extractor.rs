use async_trait::async_trait;

use crate::domain::{ExtractedContent, UploadedDocument};

#[async_trait]
pub trait ContentExtractor: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<ExtractedContent, ExtractError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("parse failed: {0}")]
    ParseFailed(String),
}
