use std::io::Cursor;

use async_trait::async_trait;
use calamine::{Data, Reader, Xlsx};

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{DocumentFormat, ExtractedContent, Table, UploadedDocument};

/// Parses the first worksheet of an XLSX upload into a [`Table`], first row
/// as headers, every cell rendered as text.
pub struct XlsxAdapter;

#[async_trait]
impl ContentExtractor for XlsxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<ExtractedContent, ExtractError> {
        if document.format != DocumentFormat::Xlsx {
            return Err(ExtractError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let cursor = Cursor::new(data.to_vec());
        let mut workbook: Xlsx<_> = Xlsx::new(cursor)
            .map_err(|e| ExtractError::ParseFailed(format!("failed to parse XLSX: {e}")))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ExtractError::ParseFailed("workbook has no sheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ExtractError::ParseFailed(format!("failed to read sheet: {e}")))?;

        let mut rows = range.rows();
        let columns: Vec<String> = rows
            .next()
            .ok_or_else(|| ExtractError::ParseFailed("sheet has no header row".to_string()))?
            .iter()
            .map(cell_text)
            .collect();

        let mut table = Table::new(columns);
        for row in rows {
            table.push_row_padded(row.iter().map(cell_text).collect());
        }

        tracing::info!(
            sheet = %sheet_name,
            row_count = table.row_count(),
            "XLSX extraction complete"
        );

        Ok(ExtractedContent::Table(table))
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
