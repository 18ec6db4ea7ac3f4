use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{ExtractedContent, UploadedDocument};

/// Test double that treats every upload as UTF-8 plain text, or fails for
/// filenames registered as poisoned.
#[derive(Default)]
pub struct MockExtractor {
    failing_filenames: Vec<String>,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(filenames: Vec<String>) -> Self {
        Self {
            failing_filenames: filenames,
        }
    }
}

#[async_trait]
impl ContentExtractor for MockExtractor {
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<ExtractedContent, ExtractError> {
        if self.failing_filenames.contains(&document.filename) {
            return Err(ExtractError::ParseFailed(format!(
                "simulated failure for {}",
                document.filename
            )));
        }

        Ok(ExtractedContent::PlainText(
            String::from_utf8_lossy(data).into_owned(),
        ))
    }
}
