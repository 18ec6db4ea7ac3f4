use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild, read_docx};

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{DocumentFormat, ExtractedContent, UploadedDocument};

use super::text_sanitizer::sanitize_extracted_text;

/// Concatenates DOCX paragraph texts in document order, newline separated.
pub struct DocxAdapter;

#[async_trait]
impl ContentExtractor for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<ExtractedContent, ExtractError> {
        if document.format != DocumentFormat::Docx {
            return Err(ExtractError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let docx = read_docx(data)
            .map_err(|e| ExtractError::ParseFailed(format!("failed to parse DOCX: {e}")))?;

        let mut paragraphs: Vec<String> = Vec::new();
        for child in docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                let text = paragraph_text(&paragraph);
                if !text.trim().is_empty() {
                    paragraphs.push(text);
                }
            }
        }

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        Ok(ExtractedContent::PlainText(sanitize_extracted_text(
            &paragraphs.join("\n"),
        )))
    }
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    paragraph
        .children
        .iter()
        .filter_map(|child| {
            if let ParagraphChild::Run(run) = child {
                Some(
                    run.children
                        .iter()
                        .filter_map(|rc| {
                            if let RunChild::Text(t) = rc {
                                Some(t.text.as_str())
                            } else {
                                None
                            }
                        })
                        .collect::<Vec<_>>()
                        .join(""),
                )
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("")
}
