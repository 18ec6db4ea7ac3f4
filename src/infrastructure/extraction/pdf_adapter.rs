use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{DocumentFormat, ExtractedContent, UploadedDocument};

use super::text_sanitizer::sanitize_extracted_text;

/// Extracts plain text from PDF bytes. Pages with no extractable text
/// contribute nothing; a PDF with no text at all yields an empty string, not
/// an error. Decoding runs on a blocking thread under a timeout because
/// malformed PDFs can stall the parser.
pub struct PdfAdapter {
    timeout: Duration,
}

impl PdfAdapter {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl ContentExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<ExtractedContent, ExtractError> {
        if document.format != DocumentFormat::Pdf {
            return Err(ExtractError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let data_owned = data.to_vec();
        let text = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem(&data_owned)
                    .map_err(|e| ExtractError::ParseFailed(format!("failed to parse PDF: {e}")))
            }),
        )
        .await
        .map_err(|_| ExtractError::ParseFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractError::ParseFailed(format!("task join error: {e}")))??;

        let sanitized = sanitize_extracted_text(&text);
        tracing::info!(chars = sanitized.len(), "PDF text extraction complete");

        Ok(ExtractedContent::PlainText(sanitized))
    }
}
