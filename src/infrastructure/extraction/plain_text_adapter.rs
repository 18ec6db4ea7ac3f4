use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{DocumentFormat, ExtractedContent, UploadedDocument};

/// Decodes TXT uploads as UTF-8, dropping undecodable byte sequences rather
/// than failing.
pub struct PlainTextAdapter;

#[async_trait]
impl ContentExtractor for PlainTextAdapter {
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<ExtractedContent, ExtractError> {
        if document.format != DocumentFormat::Txt {
            return Err(ExtractError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let text: String = String::from_utf8_lossy(data)
            .chars()
            .filter(|&c| c != char::REPLACEMENT_CHARACTER)
            .collect();

        Ok(ExtractedContent::PlainText(text))
    }
}
