use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{DocumentFormat, ExtractedContent, Table, UploadedDocument};

/// Parses CSV uploads into a [`Table`] with the first row as headers. All
/// values are kept as text. Ragged rows are normalized to the header width:
/// extra fields truncated, missing fields padded with empty strings.
pub struct CsvAdapter;

#[async_trait]
impl ContentExtractor for CsvAdapter {
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<ExtractedContent, ExtractError> {
        if document.format != DocumentFormat::Csv {
            return Err(ExtractError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| ExtractError::ParseFailed(format!("failed to read CSV headers: {e}")))?
            .iter()
            .map(|value| value.trim().to_string())
            .collect();

        let mut table = Table::new(columns);
        for record in reader.records() {
            let record = record
                .map_err(|e| ExtractError::ParseFailed(format!("failed to read CSV row: {e}")))?;
            table.push_row_padded(record.iter().map(|value| value.to_string()).collect());
        }

        Ok(ExtractedContent::Table(table))
    }
}
