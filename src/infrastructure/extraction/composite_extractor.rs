use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{DocumentFormat, ExtractedContent, UploadedDocument};

use super::{CsvAdapter, DocxAdapter, PdfAdapter, PlainTextAdapter, VcfAdapter, XlsxAdapter};

/// Dispatches extraction to the adapter registered for the document's
/// format. The format was decided once at the upload boundary, so a miss
/// here means the caller registered an incomplete adapter set.
pub struct CompositeExtractor {
    adapters: HashMap<DocumentFormat, Arc<dyn ContentExtractor>>,
}

impl CompositeExtractor {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn ContentExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// All six supported formats with their default adapters.
    pub fn with_default_adapters(pdf_timeout_secs: u64) -> Self {
        Self::new(vec![
            (
                DocumentFormat::Pdf,
                Arc::new(PdfAdapter::new(pdf_timeout_secs)) as Arc<dyn ContentExtractor>,
            ),
            (DocumentFormat::Txt, Arc::new(PlainTextAdapter)),
            (DocumentFormat::Docx, Arc::new(DocxAdapter)),
            (DocumentFormat::Csv, Arc::new(CsvAdapter)),
            (DocumentFormat::Xlsx, Arc::new(XlsxAdapter)),
            (DocumentFormat::Vcf, Arc::new(VcfAdapter)),
        ])
    }
}

#[async_trait]
impl ContentExtractor for CompositeExtractor {
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<ExtractedContent, ExtractError> {
        let adapter = self.adapters.get(&document.format).ok_or_else(|| {
            ExtractError::UnsupportedFormat(document.format.as_extension().to_string())
        })?;

        adapter.extract(data, document).await
    }
}
